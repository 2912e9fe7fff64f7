//! Configuration management.
//!
//! [`Configuration`] carries the six governance fields that parameterize
//! every record. Every field is optional: absence is only an error once a
//! builder actually needs the field, so a configuration missing an unused
//! field never fails. [`ConversionOptions`] holds the knobs that change
//! parsing behaviour rather than record content.

use crate::error::{LasOsduError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Governance fields read from the conversion config payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// ACL viewer groups
    #[serde(default, alias = "data_default_viewers")]
    pub default_viewers: Option<Vec<String>>,

    /// ACL owner groups
    #[serde(default, alias = "data_default_owners")]
    pub default_owners: Option<Vec<String>>,

    /// Legal tags applied to every record
    #[serde(default, alias = "legal_tags")]
    pub legal_tags: Option<Vec<String>>,

    /// Countries relevant to the data
    #[serde(default, alias = "legal_relevant_data_countries")]
    pub legal_relevant_data_countries: Option<Vec<String>>,

    /// Legal status, e.g. "compliant"
    #[serde(default, alias = "legal_status")]
    pub legal_status: Option<String>,

    /// Data partition used to qualify reference and master data ids
    #[serde(default, alias = "data_partition_id")]
    pub data_partition_id: Option<String>,
}

impl Configuration {
    /// Build a configuration from an untyped JSON value.
    ///
    /// Missing keys and `null` values become `None`; unknown keys are
    /// ignored. A non-object payload, or a field holding the wrong JSON type,
    /// fails with a configuration error.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(LasOsduError::config(format!(
                "expected a JSON object, found {}",
                json_type_name(value)
            )));
        }

        let config = Self::deserialize(value)
            .map_err(|e| LasOsduError::config(format!("invalid configuration: {e}")))?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| LasOsduError::config(format!("Invalid JSON configuration: {e}")))?;
        Self::from_value(&value)
    }

    /// Read and parse a configuration file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Partition id as a borrowed string, if set
    pub fn partition(&self) -> Option<&str> {
        self.data_partition_id.as_deref()
    }

    /// Names of the fields that are unset, in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.default_viewers.is_none() {
            missing.push("defaultViewers");
        }
        if self.default_owners.is_none() {
            missing.push("defaultOwners");
        }
        if self.legal_tags.is_none() {
            missing.push("legalTags");
        }
        if self.legal_relevant_data_countries.is_none() {
            missing.push("legalRelevantDataCountries");
        }
        if self.legal_status.is_none() {
            missing.push("legalStatus");
        }
        if self.data_partition_id.is_none() {
            missing.push("dataPartitionId");
        }
        missing
    }

    pub fn with_default_viewers(mut self, viewers: Vec<String>) -> Self {
        self.default_viewers = Some(viewers);
        self
    }

    pub fn with_default_owners(mut self, owners: Vec<String>) -> Self {
        self.default_owners = Some(owners);
        self
    }

    pub fn with_legal_tags(mut self, tags: Vec<String>) -> Self {
        self.legal_tags = Some(tags);
        self
    }

    pub fn with_legal_relevant_data_countries(mut self, countries: Vec<String>) -> Self {
        self.legal_relevant_data_countries = Some(countries);
        self
    }

    pub fn with_legal_status(mut self, status: impl Into<String>) -> Self {
        self.legal_status = Some(status.into());
        self
    }

    pub fn with_data_partition_id(mut self, partition: impl Into<String>) -> Self {
        self.data_partition_id = Some(partition.into());
        self
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Parsing behaviour for a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Reject LAS files whose `WELL` value is absent or blank instead of
    /// logging a warning
    pub strict_well_name: bool,
}

impl ConversionOptions {
    /// Options with strict well-name validation enabled
    pub fn strict() -> Self {
        Self {
            strict_well_name: true,
        }
    }
}
