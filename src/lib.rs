//! LAS to OSDU Library
//!
//! A Rust library for converting LAS (Log ASCII Standard) well-log files
//! into OSDU-style Wellbore and WellLog JSON records.
//!
//! This library provides tools for:
//! - Parsing LAS 1.2 and 2.0 headers into a typed document
//! - Building ACL, legal, name-alias and curve blocks from a JSON configuration
//! - Assembling Wellbore and WellLog records with deterministic ids
//! - Inspecting files (validation report, header metadata) without converting
//! - Writing records as indented JSON, one pair of files per wellbore
//!
//! ```rust
//! use serde_json::json;
//!
//! let config = json!({
//!     "defaultViewers": ["data.default.viewers@osdu.example.com"],
//!     "defaultOwners": ["data.default.owners@osdu.example.com"],
//!     "legalTags": ["osdu-public-usa-dataset"],
//!     "legalRelevantDataCountries": ["US"],
//!     "legalStatus": "compliant",
//!     "dataPartitionId": "osdu"
//! });
//! let las = "~V\nVERS. 2.0 :\n~W\nWELL. Well-A : WELL\n~C\nDEPT.M : DEPTH\nGR. : GAMMA RAY\n";
//!
//! let output = las_osdu::convert(las, "wb-1", &config)?;
//! assert_eq!(output.welllog_record.id.as_deref(), Some("wb-1-log"));
//! assert_eq!(output.welllog_record.data.curves[1].curve_unit, "osdu:reference-data--UnitOfMeasure:UNITLESS:");
//! # Ok::<(), las_osdu::LasOsduError>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod las;
pub mod mapping;
pub mod metadata;
pub mod models;
pub mod service;
pub mod writer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{Configuration, ConversionOptions};
pub use error::{LasOsduError, Result};
pub use las::LasParser;
pub use models::{
    ConversionOutput, LasDocument, Record, WellLogData, WellLogRecord, WellboreData,
    WellboreRecord,
};
pub use service::{convert, convert_bytes, convert_file, convert_with_config, convert_with_options};
