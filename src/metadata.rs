//! Read-only views of a LAS file: load summary, validation report and
//! header metadata.
//!
//! These back the `validate` and `metadata` CLI commands and let a host
//! inspect a file before committing to a conversion.

use crate::config::ConversionOptions;
use crate::constants::{UNKNOWN_VALUE, mnemonics};
use crate::error::Result;
use crate::las::LasParser;
use crate::models::LasDocument;
use serde::{Deserialize, Serialize};

/// Summary of a LAS file as loaded, before any mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LasSummary {
    pub well_name: Option<String>,
    pub curve_count: Option<usize>,
    pub size_chars: usize,
    /// Parse failure, if the quick parse did not succeed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_note: Option<String>,
}

impl LasSummary {
    /// Summarize LAS text from its parse outcome. A file that fails to parse
    /// still yields a summary carrying the failure in `parse_note`.
    pub fn from_parsed(text: &str, parsed: &Result<LasDocument>) -> Self {
        let size_chars = text.chars().count();
        match parsed {
            Ok(document) => Self {
                well_name: Some(display_value(document.well_name())),
                curve_count: Some(document.curve_count()),
                size_chars,
                parse_note: None,
            },
            Err(e) => Self {
                well_name: None,
                curve_count: None,
                size_chars,
                parse_note: Some(format!("Quick parse failed: {e}")),
            },
        }
    }
}

/// Outcome of validating a LAS file without converting it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub version: String,
    pub well_name: String,
    pub curve_count: usize,
    pub message: String,
}

impl ValidationReport {
    /// Report for a parse outcome; failures are captured in the report
    pub fn from_parsed(parsed: &Result<LasDocument>) -> Self {
        match parsed {
            Ok(document) => Self {
                is_valid: true,
                version: display_value(document.las_version()),
                well_name: display_value(document.well_name()),
                curve_count: document.curve_count(),
                message: "LAS file is valid and can be processed".to_string(),
            },
            Err(e) => Self {
                is_valid: false,
                version: UNKNOWN_VALUE.to_string(),
                well_name: UNKNOWN_VALUE.to_string(),
                curve_count: 0,
                message: format!("LAS validation failed: {e}"),
            },
        }
    }
}

/// Validation report plus load summary, from a single parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inspection {
    #[serde(flatten)]
    pub report: ValidationReport,
    pub summary: LasSummary,
}

impl Inspection {
    pub fn from_text(text: &str, options: ConversionOptions) -> Self {
        let parsed = LasParser::with_options(options).parse(text);
        Self {
            report: ValidationReport::from_parsed(&parsed),
            summary: LasSummary::from_parsed(text, &parsed),
        }
    }
}

/// Depth index range from the well section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthRange {
    pub start: Option<String>,
    pub stop: Option<String>,
    pub step: Option<String>,
}

/// Header metadata of a LAS file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LasMetadata {
    pub well_name: String,
    pub field: String,
    pub country: String,
    pub uwi: String,
    pub date: String,
    pub company: String,
    pub curves: Vec<String>,
    pub curve_count: usize,
    pub depth_range: DepthRange,
}

impl LasMetadata {
    pub fn from_document(document: &LasDocument) -> Self {
        let well = |mnemonic: &str| display_value(document.well_value(mnemonic));
        let index = |mnemonic: &str| document.well_value(mnemonic).map(str::to_string);
        let curves: Vec<String> = document
            .curves()
            .iter()
            .map(|curve| curve.mnemonic.clone())
            .collect();

        Self {
            well_name: well(mnemonics::WELL),
            field: well(mnemonics::FIELD),
            country: well(mnemonics::COUNTRY),
            uwi: well(mnemonics::UWI),
            date: well(mnemonics::DATE),
            company: well(mnemonics::COMPANY),
            curve_count: curves.len(),
            curves,
            depth_range: DepthRange {
                start: index(mnemonics::START),
                stop: index(mnemonics::STOP),
                step: index(mnemonics::STEP),
            },
        }
    }
}

/// Header value for display; absent items read as `Unknown`
fn display_value(value: Option<&str>) -> String {
    value.unwrap_or(UNKNOWN_VALUE).to_string()
}
