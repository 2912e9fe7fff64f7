//! Single-byte decoding of LAS file content
//!
//! LAS files written by legacy logging tools routinely carry 8-bit
//! characters (degree signs, accented operator names). They are read as
//! ISO-8859-1, where every byte maps to the char with the same code point,
//! so decoding cannot fail.

use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Decode bytes as ISO-8859-1
pub fn decode_latin1(raw: &[u8]) -> String {
    raw.iter().copied().map(char::from).collect()
}

/// Read a LAS file from disk and decode it as ISO-8859-1
pub fn read_las_file(path: &Path) -> Result<String> {
    let raw = std::fs::read(path)?;
    debug!("Read {} bytes from {}", raw.len(), path.display());
    Ok(decode_latin1(&raw))
}
