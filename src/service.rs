//! Conversion service: the public entry point of the library.
//!
//! Wires configuration, LAS parsing and record mapping together for one
//! conversion. Every call owns its configuration and parse tree; nothing is
//! cached between calls, so conversions of different files may run
//! concurrently without coordination.

use crate::config::{Configuration, ConversionOptions};
use crate::constants::DEFAULT_WELLBORE_ID_PREFIX;
use crate::error::{LasOsduError, Result};
use crate::las::{LasParser, read_las_file};
use crate::mapping::RecordMapper;
use crate::models::ConversionOutput;
use std::path::Path;
use tracing::{error, info};

/// Convert LAS text into Wellbore and WellLog records.
///
/// `raw_config` is the untyped config payload; its fields are only checked
/// by the builders that need them. Parse, configuration and validation
/// errors are returned unchanged; any other failure is reported as
/// [`LasOsduError::Conversion`].
pub fn convert(
    las_text: &str,
    wellbore_id: &str,
    raw_config: &serde_json::Value,
) -> Result<ConversionOutput> {
    convert_with_options(las_text, wellbore_id, raw_config, ConversionOptions::default())
}

/// [`convert`] with explicit parsing options
pub fn convert_with_options(
    las_text: &str,
    wellbore_id: &str,
    raw_config: &serde_json::Value,
    options: ConversionOptions,
) -> Result<ConversionOutput> {
    Configuration::from_value(raw_config)
        .and_then(|config| convert_text(las_text, wellbore_id, &config, options))
        .map_err(report)
}

/// Convert raw LAS bytes, decoded as ISO-8859-1
pub fn convert_bytes(
    raw: &[u8],
    wellbore_id: &str,
    raw_config: &serde_json::Value,
    options: ConversionOptions,
) -> Result<ConversionOutput> {
    let text = crate::las::decode_latin1(raw);
    convert_with_options(&text, wellbore_id, raw_config, options)
}

/// Convert LAS text with an already-built configuration
pub fn convert_with_config(
    las_text: &str,
    wellbore_id: &str,
    config: &Configuration,
    options: ConversionOptions,
) -> Result<ConversionOutput> {
    convert_text(las_text, wellbore_id, config, options).map_err(report)
}

/// Read a LAS file from disk and convert it
pub fn convert_file(
    las_path: &Path,
    wellbore_id: &str,
    config: &Configuration,
    options: ConversionOptions,
) -> Result<ConversionOutput> {
    info!("Reading LAS file {}", las_path.display());
    read_las_file(las_path)
        .and_then(|text| convert_text(&text, wellbore_id, config, options))
        .map_err(report)
}

/// Wellbore id derived from a LAS file name: `wellbore-<stem>`
pub fn default_wellbore_id(las_path: &Path) -> String {
    let stem = las_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "001".to_string());
    format!("{DEFAULT_WELLBORE_ID_PREFIX}{stem}")
}

fn convert_text(
    las_text: &str,
    wellbore_id: &str,
    config: &Configuration,
    options: ConversionOptions,
) -> Result<ConversionOutput> {
    info!("Converting LAS content for wellbore '{}'", wellbore_id);

    let document = LasParser::with_options(options).parse(las_text)?;
    let mapper = RecordMapper::new(&document, config);

    let wellbore_record = mapper.map_to_wellbore_record()?.with_id(wellbore_id);
    let welllog_record = mapper.map_to_well_log_record(wellbore_id)?;

    info!(
        "Converted wellbore '{}': {} curve(s)",
        wellbore_id,
        welllog_record.data.curves.len()
    );

    Ok(ConversionOutput {
        wellbore_record,
        welllog_record,
    })
}

/// Log a failure and hand it back to the caller
fn report(err: LasOsduError) -> LasOsduError {
    if err.is_domain_error() {
        error!("Mapping/validation error: {}", err);
        err
    } else {
        error!("Unexpected conversion error: {}", err);
        err.into_conversion()
    }
}
