//! Test utilities for the mapping layer


use crate::config::Configuration;
use crate::models::{CurveItem, HeaderItem, LasDocument};

/// Configuration with all six governance fields populated
pub fn complete_config() -> Configuration {
    Configuration::default()
        .with_default_viewers(vec!["data.default.viewers@osdu.example.com".to_string()])
        .with_default_owners(vec!["data.default.owners@osdu.example.com".to_string()])
        .with_legal_tags(vec!["osdu-public-usa-dataset".to_string()])
        .with_legal_relevant_data_countries(vec!["US".to_string()])
        .with_legal_status("compliant")
        .with_data_partition_id("osdu")
}

pub fn well_item(mnemonic: &str, value: &str) -> HeaderItem {
    HeaderItem {
        mnemonic: mnemonic.to_string(),
        unit: String::new(),
        value: value.to_string(),
        description: String::new(),
    }
}

pub fn curve(mnemonic: &str, unit: &str) -> CurveItem {
    CurveItem {
        mnemonic: mnemonic.to_string(),
        unit: unit.to_string(),
        description: String::new(),
    }
}

/// Document with the given well items and curves
pub fn document(well: Vec<HeaderItem>, curves: Option<Vec<CurveItem>>) -> LasDocument {
    LasDocument {
        version: vec![well_item("VERS", "2.0")],
        well,
        curves,
        ..Default::default()
    }
}

/// The Well-A / wb-1 scenario document: UWI present, DEPT in metres and a
/// unitless GR curve
pub fn well_a_document() -> LasDocument {
    document(
        vec![well_item("WELL", "Well-A"), well_item("UWI", "42-001-00001")],
        Some(vec![curve("DEPT", "M"), curve("GR", "")]),
    )
}
