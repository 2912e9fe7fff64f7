//! Core data structures for LAS parsing and OSDU record output.
//!
//! The LAS side ([`LasDocument`] and its items) is the typed parse tree;
//! the OSDU side ([`Record`] and its data blocks) is the serialization
//! contract for the two records produced by every conversion.

use crate::constants::{WELL_LOG_KIND, WELLBORE_KIND, mnemonics};
use serde::{Deserialize, Serialize};

// =============================================================================
// LAS Parse Tree
// =============================================================================

/// Generic `MNEM.UNIT VALUE : DESCRIPTION` header line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderItem {
    pub mnemonic: String,
    pub unit: String,
    pub value: String,
    pub description: String,
}

/// Item of the `~W` (well information) section
pub type WellItem = HeaderItem;

/// Item of the `~C` (curve information) section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveItem {
    pub mnemonic: String,
    pub unit: String,
    pub description: String,
}

/// Structural sections of a LAS file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LasDocument {
    /// `~V` items; always contains `VERS` once parsed
    pub version: Vec<HeaderItem>,
    /// `~W` items in file order
    pub well: Vec<WellItem>,
    /// `~C` items in file order, `None` when the file has no curve section
    pub curves: Option<Vec<CurveItem>>,
    /// `~P` items in file order
    pub parameters: Vec<HeaderItem>,
    /// Non-blank lines found in the `~A` section
    pub data_rows: usize,
}

impl LasDocument {
    /// Look up a version-section value by mnemonic (case-insensitive)
    pub fn version_value(&self, mnemonic: &str) -> Option<&str> {
        find_item(&self.version, mnemonic).map(|item| item.value.as_str())
    }

    /// Look up a well-section item by mnemonic (case-insensitive)
    pub fn well_item(&self, mnemonic: &str) -> Option<&WellItem> {
        find_item(&self.well, mnemonic)
    }

    /// Well-section value by mnemonic
    pub fn well_value(&self, mnemonic: &str) -> Option<&str> {
        self.well_item(mnemonic).map(|item| item.value.as_str())
    }

    /// Well name (`WELL`) if present, possibly blank
    pub fn well_name(&self) -> Option<&str> {
        self.well_value(mnemonics::WELL)
    }

    /// LAS version string (`VERS`)
    pub fn las_version(&self) -> Option<&str> {
        self.version_value(mnemonics::VERS)
    }

    /// Curves in file order; empty when there is no curve section
    pub fn curves(&self) -> &[CurveItem] {
        self.curves.as_deref().unwrap_or_default()
    }

    pub fn curve_count(&self) -> usize {
        self.curves().len()
    }

    /// First curve, which LAS convention treats as the depth/index curve
    pub fn reference_curve(&self) -> Option<&CurveItem> {
        self.curves().first()
    }
}

fn find_item<'a>(items: &'a [HeaderItem], mnemonic: &str) -> Option<&'a HeaderItem> {
    items
        .iter()
        .find(|item| item.mnemonic.eq_ignore_ascii_case(mnemonic))
}

// =============================================================================
// OSDU Records
// =============================================================================

/// Access control list block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    pub viewers: Vec<String>,
    pub owners: Vec<String>,
}

/// Legal block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legal {
    pub legaltags: Vec<String>,
    #[serde(rename = "otherRelevantDataCountries")]
    pub other_relevant_data_countries: Vec<String>,
    pub status: String,
}

/// Alternate name of a wellbore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAlias {
    #[serde(rename = "AliasName")]
    pub alias_name: String,
    #[serde(rename = "AliasNameTypeID")]
    pub alias_name_type_id: String,
}

/// `data` block of a Wellbore record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellboreData {
    #[serde(rename = "FacilityName")]
    pub facility_name: String,
    #[serde(rename = "NameAliases")]
    pub name_aliases: Vec<NameAlias>,
}

/// One curve of a WellLog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveEntry {
    #[serde(rename = "CurveID")]
    pub curve_id: String,
    #[serde(rename = "CurveUnit")]
    pub curve_unit: String,
    #[serde(rename = "Mnemonic")]
    pub mnemonic: String,
}

/// `data` block of a WellLog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellLogData {
    #[serde(rename = "ReferenceCurveID")]
    pub reference_curve_id: String,
    #[serde(rename = "Curves")]
    pub curves: Vec<CurveEntry>,
    #[serde(rename = "WellboreID")]
    pub wellbore_id: String,
}

/// Data blocks that know which record kind they belong to
pub trait RecordData {
    const KIND: &'static str;
}

impl RecordData for WellboreData {
    const KIND: &'static str = WELLBORE_KIND;
}

impl RecordData for WellLogData {
    const KIND: &'static str = WELL_LOG_KIND;
}

/// OSDU-style record: `kind`, `acl`, `legal`, `data` and an optional `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<D> {
    pub kind: String,
    pub acl: Acl,
    pub legal: Legal,
    pub data: D,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl<D: RecordData> Record<D> {
    /// Build a record with the kind fixed by its data block
    pub fn new(acl: Acl, legal: Legal, data: D) -> Self {
        Self {
            kind: D::KIND.to_string(),
            acl,
            legal,
            data,
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

pub type WellboreRecord = Record<WellboreData>;
pub type WellLogRecord = Record<WellLogData>;

/// Both records produced by one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    pub wellbore_record: WellboreRecord,
    pub welllog_record: WellLogRecord,
}
