//! Record mapping from a parsed LAS document to OSDU records

use crate::config::Configuration;
use crate::constants::WELL_LOG_ID_SUFFIX;
use crate::error::Result;
use crate::models::{LasDocument, Record, WellLogRecord, WellboreRecord};
use tracing::debug;

use super::attributes::{build_acl, build_legal, build_well_log_data, build_wellbore_data};

/// Maps one parsed LAS document to Wellbore and WellLog records
#[derive(Debug, Clone, Copy)]
pub struct RecordMapper<'a> {
    document: &'a LasDocument,
    config: &'a Configuration,
}

impl<'a> RecordMapper<'a> {
    pub fn new(document: &'a LasDocument, config: &'a Configuration) -> Self {
        Self { document, config }
    }

    /// Wellbore record without an id; the caller assigns one
    pub fn map_to_wellbore_record(&self) -> Result<WellboreRecord> {
        let acl = build_acl(self.config)?;
        let legal = build_legal(self.config)?;
        let data = build_wellbore_data(self.document, self.config)?;

        debug!(
            "Mapped wellbore record for '{}' with {} alias(es)",
            data.facility_name,
            data.name_aliases.len()
        );

        Ok(Record::new(acl, legal, data))
    }

    /// WellLog record with id `<wellbore_id>-log`
    pub fn map_to_well_log_record(&self, wellbore_id: &str) -> Result<WellLogRecord> {
        let acl = build_acl(self.config)?;
        let legal = build_legal(self.config)?;
        let data = build_well_log_data(self.document, self.config, wellbore_id)?;

        debug!(
            "Mapped well log record for wellbore '{}' with {} curve(s)",
            wellbore_id,
            data.curves.len()
        );

        Ok(Record::new(acl, legal, data).with_id(format!("{wellbore_id}{WELL_LOG_ID_SUFFIX}")))
    }
}
