//! Writing converted records to disk
//!
//! Each conversion produces `<wellbore_id>-wellbore.json` and
//! `<wellbore_id>-welllog.json`, indented with four spaces.

use crate::constants::{JSON_INDENT, WELL_LOG_FILE_SUFFIX, WELLBORE_FILE_SUFFIX};
use crate::error::{LasOsduError, Result};
use crate::models::ConversionOutput;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paths of the two files written for one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenRecords {
    pub wellbore_path: PathBuf,
    pub welllog_path: PathBuf,
}

/// Serialize a value as JSON indented with four spaces
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    String::from_utf8(buffer).map_err(|e| LasOsduError::conversion(e.to_string()))
}

/// Write both records of a conversion into `output_dir`, creating it if needed
pub fn write_records(
    output: &ConversionOutput,
    output_dir: &Path,
    wellbore_id: &str,
) -> Result<WrittenRecords> {
    std::fs::create_dir_all(output_dir)?;

    let wellbore_path = output_dir.join(format!("{wellbore_id}{WELLBORE_FILE_SUFFIX}"));
    let welllog_path = output_dir.join(format!("{wellbore_id}{WELL_LOG_FILE_SUFFIX}"));

    std::fs::write(&wellbore_path, to_pretty_json(&output.wellbore_record)?)?;
    std::fs::write(&welllog_path, to_pretty_json(&output.welllog_record)?)?;

    debug!(
        "Wrote {} and {}",
        wellbore_path.display(),
        welllog_path.display()
    );

    Ok(WrittenRecords {
        wellbore_path,
        welllog_path,
    })
}
