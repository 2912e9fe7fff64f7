//! Attribute builders for OSDU record blocks
//!
//! Pure functions computing each record sub-block from a parsed
//! [`LasDocument`] and a [`Configuration`]. Configuration fields are only
//! checked by the builder that needs them, so a record that never touches a
//! field never fails on its absence.

use crate::config::Configuration;
use crate::constants::{
    ALIAS_NAME_TYPE_UWI, UNIT_OF_MEASURE_PREFIX, UNITLESS, WELLBORE_MASTER_PREFIX, mnemonics,
};
use crate::error::{LasOsduError, Result};
use crate::models::{Acl, CurveEntry, LasDocument, Legal, NameAlias, WellLogData, WellboreData};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unencoded in a URL component: alphanumerics and `-_.~`
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Build the access control list block
pub fn build_acl(config: &Configuration) -> Result<Acl> {
    match (&config.default_viewers, &config.default_owners) {
        (Some(viewers), Some(owners)) => Ok(Acl {
            viewers: viewers.clone(),
            owners: owners.clone(),
        }),
        _ => Err(LasOsduError::config(
            "Config missing 'defaultViewers' or 'defaultOwners'",
        )),
    }
}

/// Build the legal block
pub fn build_legal(config: &Configuration) -> Result<Legal> {
    match (
        &config.legal_tags,
        &config.legal_relevant_data_countries,
        &config.legal_status,
    ) {
        (Some(tags), Some(countries), Some(status)) => Ok(Legal {
            legaltags: tags.clone(),
            other_relevant_data_countries: countries.clone(),
            status: status.clone(),
        }),
        _ => Err(LasOsduError::config(
            "Config missing 'legalTags', 'legalRelevantDataCountries', or 'legalStatus'",
        )),
    }
}

/// UWI from the well section, if present and not blank
pub fn extract_uwi(document: &LasDocument) -> Option<String> {
    document
        .well_value(mnemonics::UWI)
        .filter(|uwi| !uwi.trim().is_empty())
        .map(str::to_string)
}

/// Name aliases for a wellbore.
///
/// Without a UWI the list is empty and the configuration is not consulted.
pub fn build_name_aliases(uwi: Option<&str>, config: &Configuration) -> Result<Vec<NameAlias>> {
    let Some(uwi) = uwi else {
        return Ok(Vec::new());
    };

    let partition = require_partition(config.partition(), "'dataPartitionId'")?;
    Ok(vec![NameAlias {
        alias_name: uwi.to_string(),
        alias_name_type_id: format!("{partition}:{ALIAS_NAME_TYPE_UWI}"),
    }])
}

/// `data` block of a Wellbore record.
///
/// `FacilityName` is the `WELL` value as parsed, blank or not; rejecting a
/// blank name is the parser's job.
pub fn build_wellbore_data(document: &LasDocument, config: &Configuration) -> Result<WellboreData> {
    let facility_name = document.well_name().unwrap_or_default().to_string();
    let uwi = extract_uwi(document);
    let name_aliases = build_name_aliases(uwi.as_deref(), config)?;

    Ok(WellboreData {
        facility_name,
        name_aliases,
    })
}

/// Curve entries for a WellLog record, in file order
pub fn build_curves(document: &LasDocument, partition: Option<&str>) -> Result<Vec<CurveEntry>> {
    let partition = require_partition(partition, "'dataPartitionId'")?;

    let curves = document
        .curves()
        .iter()
        .map(|curve| CurveEntry {
            curve_id: curve.mnemonic.clone(),
            curve_unit: format!(
                "{partition}:{UNIT_OF_MEASURE_PREFIX}:{}:",
                encode_unit(&curve.unit)
            ),
            mnemonic: curve.mnemonic.clone(),
        })
        .collect();

    Ok(curves)
}

/// `data` block of a WellLog record.
///
/// The first curve is the reference (depth) curve; curves are never
/// reordered.
pub fn build_well_log_data(
    document: &LasDocument,
    config: &Configuration,
    wellbore_id: &str,
) -> Result<WellLogData> {
    if wellbore_id.trim().is_empty() {
        return Err(LasOsduError::validation("Wellbore ID is required"));
    }

    let reference_curve_id = document
        .reference_curve()
        .map(|curve| curve.mnemonic.as_str())
        .filter(|mnemonic| !mnemonic.trim().is_empty())
        .ok_or_else(|| {
            LasOsduError::validation("Failed to extract reference curve ID from LAS file")
        })?
        .to_string();

    let partition = require_partition(
        config.partition(),
        "'dataPartitionId' for building curves",
    )?;

    Ok(WellLogData {
        reference_curve_id,
        curves: build_curves(document, Some(partition))?,
        wellbore_id: format!("{partition}:{WELLBORE_MASTER_PREFIX}:{wellbore_id}:"),
    })
}

/// Percent-encode a unit as a URL component; encoded spaces become hyphens
/// and an empty unit becomes `UNITLESS`
pub fn encode_unit(unit: &str) -> String {
    let encoded = utf8_percent_encode(unit, URL_COMPONENT)
        .to_string()
        .replace("%20", "-");
    if encoded.is_empty() {
        UNITLESS.to_string()
    } else {
        encoded
    }
}

fn require_partition<'a>(partition: Option<&'a str>, what: &str) -> Result<&'a str> {
    partition.ok_or_else(|| LasOsduError::config(format!("Config missing {what}")))
}
