//! Application constants for the LAS to OSDU converter
//!
//! Record kinds, OSDU reference-data templates, LAS section markers and the
//! well-section mnemonics the mapping layer reads.

// =============================================================================
// OSDU Record Kinds
// =============================================================================

/// Kind assigned to every Wellbore master-data record
pub const WELLBORE_KIND: &str = "osdu:wks:master-data--Wellbore:1.0.0";

/// Kind assigned to every WellLog work-product-component record
pub const WELL_LOG_KIND: &str = "osdu:wks:work-product-component--WellLog:1.0.0";

/// Suffix appended to the wellbore id to form the WellLog record id
pub const WELL_LOG_ID_SUFFIX: &str = "-log";

// =============================================================================
// OSDU Reference Data
// =============================================================================

/// Reference-data path for the UWI alias type; prefixed with `<partition>:`
pub const ALIAS_NAME_TYPE_UWI: &str = "reference-data--AliasNameType:UniqueIdentifier:";

/// Reference-data path prefix for units of measure
pub const UNIT_OF_MEASURE_PREFIX: &str = "reference-data--UnitOfMeasure";

/// Master-data path prefix for wellbores
pub const WELLBORE_MASTER_PREFIX: &str = "master-data--Wellbore";

/// Unit token used for curves that carry no unit
pub const UNITLESS: &str = "UNITLESS";

// =============================================================================
// LAS Format
// =============================================================================

/// LAS section markers (first letter after `~`)
pub mod sections {
    pub const VERSION: char = 'V';
    pub const WELL: char = 'W';
    pub const CURVES: char = 'C';
    pub const PARAMETERS: char = 'P';
    pub const OTHER: char = 'O';
    pub const ASCII: char = 'A';
}

/// Well-known LAS header mnemonics
pub mod mnemonics {
    /// Version section: LAS format version
    pub const VERS: &str = "VERS";
    /// Version section: wrapped data flag
    pub const WRAP: &str = "WRAP";

    /// Well section: well name
    pub const WELL: &str = "WELL";
    /// Well section: unique well identifier
    pub const UWI: &str = "UWI";
    pub const FIELD: &str = "FLD";
    pub const COUNTRY: &str = "CNTY";
    pub const COMPANY: &str = "COMP";
    pub const DATE: &str = "DATE";
    pub const START: &str = "STRT";
    pub const STOP: &str = "STOP";
    pub const STEP: &str = "STEP";
    pub const NULL: &str = "NULL";

    /// Well items whose value stays in the value slot in LAS 1.2 files
    pub const LAS12_INDEX_ITEMS: &[&str] = &[START, STOP, STEP, NULL];
}

/// Placeholder reported for header values that are missing
pub const UNKNOWN_VALUE: &str = "Unknown";

// =============================================================================
// Host Defaults
// =============================================================================

/// Configuration file used when none is supplied on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config/default_config.json";

/// Prefix of wellbore ids derived from a LAS file name
pub const DEFAULT_WELLBORE_ID_PREFIX: &str = "wellbore-";

/// File extension of LAS input files
pub const LAS_EXTENSION: &str = "las";

/// Output file suffixes, appended to the wellbore id
pub const WELLBORE_FILE_SUFFIX: &str = "-wellbore.json";
pub const WELL_LOG_FILE_SUFFIX: &str = "-welllog.json";

/// Indentation used when writing records to disk
pub const JSON_INDENT: &[u8] = b"    ";
