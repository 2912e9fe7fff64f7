//! Error handling for LAS to OSDU conversion.
//!
//! The four domain variants (`Parse`, `Config`, `Validation`, `Conversion`)
//! are what callers of [`crate::service::convert`] observe. `Io` and `Json`
//! only arise in the file-level helpers and the CLI host.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LasOsduError {
    #[error("LAS parse error{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Parse {
        line: Option<usize>,
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("An unexpected error occurred: {message}")]
    Conversion { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LasOsduError {
    /// Create a parse error tied to a 1-based line number
    pub fn parse_at(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a parse error that is not tied to a single line
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            line: None,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }

    /// Whether this is one of the typed domain failures that cross the
    /// service boundary unchanged.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::Config { .. } | Self::Validation { .. }
        )
    }

    /// Keep domain errors as they are and fold anything else into
    /// [`LasOsduError::Conversion`], preserving the original message.
    pub fn into_conversion(self) -> Self {
        match self {
            Self::Parse { .. } | Self::Config { .. } | Self::Validation { .. } => self,
            Self::Conversion { .. } => self,
            other => Self::Conversion {
                message: other.to_string(),
            },
        }
    }

    /// Tag used in the JSON status envelope reported by the CLI.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse_error",
            Self::Config { .. } => "configuration_error",
            Self::Validation { .. } => "validation_error",
            Self::Conversion { .. } | Self::Io(_) | Self::Json(_) => "conversion_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, LasOsduError>;
