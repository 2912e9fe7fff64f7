//! LAS (Log ASCII Standard) parser
//!
//! Turns raw LAS text into a typed [`LasDocument`](crate::models::LasDocument)
//! holding the version, well, curve and parameter sections, then runs the
//! structural validation the mapping layer relies on.
//!
//! ## Architecture
//!
//! - [`decode`] - single-byte (ISO-8859-1) decoding of raw file content
//! - [`parser`] - section splitting, header-line grammar and validation
//!
//! ## Usage
//!
//! ```rust
//! use las_osdu::las::LasParser;
//!
//! let text = "~V\nVERS. 2.0 : CWLS LOG ASCII STANDARD\n~W\nWELL. Well-A : WELL\n~C\nDEPT.M : DEPTH\n";
//! let document = LasParser::new().parse(text)?;
//!
//! assert_eq!(document.well_name(), Some("Well-A"));
//! assert_eq!(document.curve_count(), 1);
//! # Ok::<(), las_osdu::LasOsduError>(())
//! ```

pub mod decode;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use decode::{decode_latin1, read_las_file};
pub use parser::LasParser;

use crate::error::Result;
use crate::models::LasDocument;

/// Parse LAS text with default (permissive) options
pub fn parse(text: &str) -> Result<LasDocument> {
    LasParser::new().parse(text)
}

/// Decode raw bytes as ISO-8859-1 and parse them with default options
pub fn parse_bytes(raw: &[u8]) -> Result<LasDocument> {
    LasParser::new().parse_bytes(raw)
}
