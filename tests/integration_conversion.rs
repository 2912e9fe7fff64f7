//! Integration tests for LAS to OSDU conversion through the public API
//!
//! These tests drive `las_osdu::convert` and friends end to end, from LAS
//! text and a raw JSON configuration to serialized records.

use las_osdu::mapping::{RecordMapper, build_well_log_data, build_wellbore_data};
use las_osdu::writer::{to_pretty_json, write_records};
use las_osdu::{
    Configuration, ConversionOptions, LasOsduError, LasParser, WellLogRecord, WellboreRecord,
    convert, convert_file, convert_with_options,
};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const WELL_A: &str = "\
~VERSION INFORMATION
 VERS.   2.0 : CWLS LOG ASCII STANDARD - VERSION 2.0
 WRAP.    NO : ONE LINE PER DEPTH STEP
~WELL INFORMATION
 STRT.M   1000.0 : START DEPTH
 STOP.M   1001.0 : STOP DEPTH
 WELL.    Well-A : WELL
 UWI .    42-001-00001 : UNIQUE WELL ID
~CURVE INFORMATION
 DEPT.M          : DEPTH
 GR  .           : GAMMA RAY
~A
1000.0  55.1
1000.5  56.3
1001.0  57.9
";

fn complete_config() -> Value {
    json!({
        "defaultViewers": ["data.default.viewers@osdu.example.com"],
        "defaultOwners": ["data.default.owners@osdu.example.com"],
        "legalTags": ["osdu-public-usa-dataset"],
        "legalRelevantDataCountries": ["US"],
        "legalStatus": "compliant",
        "dataPartitionId": "osdu"
    })
}

fn sample_file() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join("7_1-1.las")
}

/// Record ids follow the supplied wellbore id exactly
///
/// Purpose: The Wellbore record carries the wellbore id, the WellLog record `<id>-log`
/// Benefit: Downstream ingestion can link the two records without extra lookups
#[test]
fn test_record_ids_follow_wellbore_id() {
    for wellbore_id in ["wb-1", "opendes:wellbore:7_1-1", "WB 42"] {
        let output = convert(WELL_A, wellbore_id, &complete_config()).unwrap();

        assert_eq!(output.wellbore_record.id.as_deref(), Some(wellbore_id));
        assert_eq!(
            output.welllog_record.id,
            Some(format!("{wellbore_id}-log"))
        );
    }
}

/// Well-A scenario: facility name and UWI alias
#[test]
fn test_well_a_wellbore_record() {
    let output = convert(WELL_A, "wb-1", &complete_config()).unwrap();
    let wellbore = serde_json::to_value(&output.wellbore_record).unwrap();

    assert_eq!(wellbore["kind"], "osdu:wks:master-data--Wellbore:1.0.0");
    assert_eq!(wellbore["data"]["FacilityName"], "Well-A");
    assert_eq!(
        wellbore["data"]["NameAliases"],
        json!([{
            "AliasName": "42-001-00001",
            "AliasNameTypeID": "osdu:reference-data--AliasNameType:UniqueIdentifier:"
        }])
    );
    assert_eq!(
        wellbore["acl"],
        json!({
            "viewers": ["data.default.viewers@osdu.example.com"],
            "owners": ["data.default.owners@osdu.example.com"]
        })
    );
    assert_eq!(
        wellbore["legal"],
        json!({
            "legaltags": ["osdu-public-usa-dataset"],
            "otherRelevantDataCountries": ["US"],
            "status": "compliant"
        })
    );
}

/// Well-A scenario: reference curve, unitless curve and wellbore link
#[test]
fn test_well_a_well_log_record() {
    let output = convert(WELL_A, "wb-1", &complete_config()).unwrap();
    let welllog = serde_json::to_value(&output.welllog_record).unwrap();

    assert_eq!(
        welllog["kind"],
        "osdu:wks:work-product-component--WellLog:1.0.0"
    );
    assert_eq!(welllog["data"]["ReferenceCurveID"], "DEPT");
    assert_eq!(
        welllog["data"]["Curves"],
        json!([
            {
                "CurveID": "DEPT",
                "CurveUnit": "osdu:reference-data--UnitOfMeasure:M:",
                "Mnemonic": "DEPT"
            },
            {
                "CurveID": "GR",
                "CurveUnit": "osdu:reference-data--UnitOfMeasure:UNITLESS:",
                "Mnemonic": "GR"
            }
        ])
    );
    assert_eq!(welllog["data"]["WellboreID"], "osdu:master-data--Wellbore:wb-1:");
}

/// Missing ACL fields fail every record regardless of the other fields
#[test]
fn test_missing_acl_is_config_error() {
    for missing in ["defaultViewers", "defaultOwners"] {
        let mut config = complete_config();
        config.as_object_mut().unwrap().remove(missing);

        match convert(WELL_A, "wb-1", &config) {
            Err(LasOsduError::Config { message }) => {
                assert!(message.contains("defaultViewers"));
            }
            other => panic!("Expected Config error without {missing}, got {other:?}"),
        }
    }
}

/// snake_case configuration keys are accepted alongside camelCase ones
#[test]
fn test_snake_case_config_keys() {
    let config = json!({
        "data_default_viewers": ["v"],
        "data_default_owners": ["o"],
        "legal_tags": ["t"],
        "legal_relevant_data_countries": ["NO"],
        "legal_status": "compliant",
        "data_partition_id": "opendes"
    });

    let output = convert(WELL_A, "wb-1", &config).unwrap();
    assert_eq!(
        output.welllog_record.data.wellbore_id,
        "opendes:master-data--Wellbore:wb-1:"
    );
}

/// Serialized records parse back into identical structures
#[test]
fn test_records_round_trip_through_json() {
    let output = convert(WELL_A, "wb-1", &complete_config()).unwrap();

    let wellbore: WellboreRecord =
        serde_json::from_str(&serde_json::to_string(&output.wellbore_record).unwrap()).unwrap();
    let welllog: WellLogRecord =
        serde_json::from_str(&serde_json::to_string(&output.welllog_record).unwrap()).unwrap();

    assert_eq!(wellbore, output.wellbore_record);
    assert_eq!(welllog, output.welllog_record);
}

/// Converting twice yields byte-identical JSON
#[test]
fn test_conversion_is_idempotent() {
    let first = convert(WELL_A, "wb-1", &complete_config()).unwrap();
    let second = convert(WELL_A, "wb-1", &complete_config()).unwrap();

    assert_eq!(
        to_pretty_json(&first).unwrap(),
        to_pretty_json(&second).unwrap()
    );
}

/// Zero curves fail the WellLog but not the Wellbore
#[test]
fn test_zero_curves_only_fail_well_log() {
    let las = "~V\n VERS. 2.0 :\n~W\n WELL. Well-A : WELL\n~C\n~A\n";
    let document = LasParser::new().parse(las).unwrap();
    let config = Configuration::from_value(&complete_config()).unwrap();

    assert!(build_wellbore_data(&document, &config).is_ok());
    assert!(matches!(
        build_well_log_data(&document, &config, "wb-1"),
        Err(LasOsduError::Validation { .. })
    ));
    assert!(matches!(
        convert(las, "wb-1", &complete_config()),
        Err(LasOsduError::Validation { .. })
    ));
}

/// Without a UWI the Wellbore never needs a data partition
#[test]
fn test_absent_uwi_needs_no_partition() {
    let las = "~V\n VERS. 2.0 :\n~W\n WELL. Well-A : WELL\n~C\n DEPT.M : depth\n";
    let document = LasParser::new().parse(las).unwrap();

    let mut raw = complete_config();
    raw.as_object_mut().unwrap().remove("dataPartitionId");
    let config = Configuration::from_value(&raw).unwrap();

    let wellbore = RecordMapper::new(&document, &config)
        .map_to_wellbore_record()
        .unwrap();
    assert!(wellbore.data.name_aliases.is_empty());

    // The WellLog still needs it for curve units
    assert!(matches!(
        convert(las, "wb-1", &raw),
        Err(LasOsduError::Config { .. })
    ));
}

/// Structural parse failures surface as parse errors with a line number
#[test]
fn test_malformed_las_is_parse_error() {
    let las = "~V\n VERS. 2.0 :\n~W\n WELL Well-A missing dot\n";

    match convert(las, "wb-1", &complete_config()) {
        Err(LasOsduError::Parse { line, .. }) => assert_eq!(line, Some(4)),
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

/// A blank well name is a warning by default and an error in strict mode
#[test]
fn test_strict_well_name() {
    let las = WELL_A.replace("Well-A", "");

    let output = convert(&las, "wb-1", &complete_config()).unwrap();
    assert_eq!(output.wellbore_record.data.facility_name, "");

    assert!(matches!(
        convert_with_options(&las, "wb-1", &complete_config(), ConversionOptions::strict()),
        Err(LasOsduError::Validation { .. })
    ));
}

/// End to end: sample file on disk to record files on disk
///
/// Purpose: Exercise file decoding, conversion and the writer together
/// Benefit: Catches regressions in the path the CLI takes
#[test]
fn test_convert_sample_file_and_write() {
    let config = Configuration::from_value(&complete_config()).unwrap();
    let output = convert_file(
        &sample_file(),
        "wb-7_1-1",
        &config,
        ConversionOptions::default(),
    )
    .unwrap();

    assert_eq!(output.wellbore_record.data.facility_name, "7/1-1");
    assert_eq!(
        output.wellbore_record.data.name_aliases[0].alias_name,
        "NO-7-1-1-0001"
    );

    let units: Vec<&str> = output
        .welllog_record
        .data
        .curves
        .iter()
        .map(|c| c.curve_unit.as_str())
        .collect();
    assert_eq!(
        units,
        vec![
            "osdu:reference-data--UnitOfMeasure:M:",
            "osdu:reference-data--UnitOfMeasure:US%2FM:",
            "osdu:reference-data--UnitOfMeasure:K%2FM3:",
            "osdu:reference-data--UnitOfMeasure:V%2FV:",
            "osdu:reference-data--UnitOfMeasure:GAPI:",
            "osdu:reference-data--UnitOfMeasure:MM:",
        ]
    );

    let temp_dir = TempDir::new().unwrap();
    let written = write_records(&output, temp_dir.path(), "wb-7_1-1").unwrap();

    let text = std::fs::read_to_string(&written.welllog_path).unwrap();
    assert!(text.starts_with("{\n    \"kind\""));
    let welllog: WellLogRecord = serde_json::from_str(&text).unwrap();
    assert_eq!(welllog, output.welllog_record);
}
