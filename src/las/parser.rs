//! LAS section parsing and structural validation
//!
//! Handles the LAS 2.0 header grammar (`MNEM.UNIT  VALUE : DESCRIPTION`),
//! the LAS 1.2 well-section layout, and duplicate curve mnemonics. The
//! `~A` data block is only counted; the mapping layer never reads it.

use crate::config::ConversionOptions;
use crate::constants::{mnemonics, sections};
use crate::error::{LasOsduError, Result};
use crate::models::{CurveItem, HeaderItem, LasDocument};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

use super::decode::decode_latin1;

/// Mnemonic up to the first dot, unit up to the first whitespace or colon
static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<mnemonic>[^.]*)\.(?P<unit>[^\s:]*)(?P<rest>.*)$")
        .expect("header line pattern is valid")
});

/// Sections a LAS file may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Version,
    Well,
    Curves,
    Parameters,
    Other,
    Ascii,
    Unknown,
}

impl Section {
    fn from_marker(line: &str, line_no: usize) -> Result<Self> {
        let name = line.trim_start_matches('~').trim();
        let first = name.chars().next().ok_or_else(|| {
            LasOsduError::parse_at(line_no, "section header '~' has no section name")
        })?;

        let section = match first.to_ascii_uppercase() {
            sections::VERSION => Section::Version,
            sections::WELL => Section::Well,
            sections::CURVES => Section::Curves,
            sections::PARAMETERS => Section::Parameters,
            sections::OTHER => Section::Other,
            sections::ASCII => Section::Ascii,
            _ => {
                debug!("Skipping unknown LAS section '{}' at line {}", name, line_no);
                Section::Unknown
            }
        };
        Ok(section)
    }
}

/// LAS text parser
#[derive(Debug, Clone, Default)]
pub struct LasParser {
    options: ConversionOptions,
}

impl LasParser {
    /// Create a permissive parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit options
    pub fn with_options(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Parse and validate LAS text
    pub fn parse(&self, text: &str) -> Result<LasDocument> {
        let document = parse_sections(text)?;
        self.validate(&document)?;

        debug!(
            "Parsed LAS {}: {} well items, {} curves, {} data rows",
            document.las_version().unwrap_or("?"),
            document.well.len(),
            document.curve_count(),
            document.data_rows
        );

        Ok(document)
    }

    /// Decode raw bytes as ISO-8859-1, then parse and validate
    pub fn parse_bytes(&self, raw: &[u8]) -> Result<LasDocument> {
        self.parse(&decode_latin1(raw))
    }

    /// Structural validation of a parsed document.
    ///
    /// A blank or absent `WELL` value is logged and tolerated unless strict
    /// well-name validation is enabled.
    pub fn validate(&self, document: &LasDocument) -> Result<()> {
        let well_name = document.well_name().unwrap_or_default();
        if well_name.trim().is_empty() {
            if self.options.strict_well_name {
                return Err(LasOsduError::validation(
                    "File must have a valid Well Name (WELL) populated",
                ));
            }
            warn!("File validation: Well Name (WELL) is missing");
        }
        Ok(())
    }
}

/// Split LAS text into its sections without any domain validation
fn parse_sections(text: &str) -> Result<LasDocument> {
    let mut document = LasDocument::default();
    let mut current: Option<Section> = None;
    let mut has_version_section = false;

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = if index == 0 {
            strip_bom(raw_line).trim()
        } else {
            raw_line.trim()
        };

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('~') {
            let section = Section::from_marker(line, line_no)?;
            match section {
                Section::Version => has_version_section = true,
                Section::Curves => {
                    document.curves.get_or_insert_with(Vec::new);
                }
                _ => {}
            }
            current = Some(section);
            continue;
        }

        match current {
            None => {
                return Err(LasOsduError::parse_at(
                    line_no,
                    "content found before the first '~' section header",
                ));
            }
            Some(Section::Ascii) => document.data_rows += 1,
            Some(Section::Other | Section::Unknown) => {}
            Some(Section::Version) => document.version.push(parse_header_line(line, line_no)?),
            Some(Section::Well) => document.well.push(parse_header_line(line, line_no)?),
            Some(Section::Parameters) => {
                document.parameters.push(parse_header_line(line, line_no)?)
            }
            Some(Section::Curves) => {
                let item = parse_header_line(line, line_no)?;
                document
                    .curves
                    .get_or_insert_with(Vec::new)
                    .push(CurveItem {
                        mnemonic: item.mnemonic,
                        unit: item.unit,
                        description: item.description,
                    });
            }
        }
    }

    if !has_version_section {
        return Err(LasOsduError::parse("missing ~V (version information) section"));
    }
    if document.las_version().is_none() {
        return Err(LasOsduError::parse(
            "version section has no VERS item",
        ));
    }

    if document
        .las_version()
        .is_some_and(|version| version.trim().starts_with("1."))
    {
        swap_las12_well_values(&mut document.well);
    }

    if let Some(curves) = document.curves.as_mut() {
        number_duplicate_mnemonics(curves);
    }

    Ok(document)
}

/// Parse one `MNEM.UNIT  VALUE : DESCRIPTION` line
fn parse_header_line(line: &str, line_no: usize) -> Result<HeaderItem> {
    let captures = HEADER_LINE.captures(line).ok_or_else(|| {
        LasOsduError::parse_at(
            line_no,
            format!("header line has no '.' after the mnemonic: '{line}'"),
        )
    })?;

    let rest = &captures["rest"];
    let (value, description) = match rest.rfind(':') {
        Some(pos) => (&rest[..pos], &rest[pos + 1..]),
        None => (rest, ""),
    };

    Ok(HeaderItem {
        mnemonic: captures["mnemonic"].trim().to_string(),
        unit: captures["unit"].to_string(),
        value: value.trim().to_string(),
        description: description.trim().to_string(),
    })
}

/// LAS 1.2 well sections carry the value in the description slot, except
/// for the depth index items
fn swap_las12_well_values(well: &mut [HeaderItem]) {
    for item in well.iter_mut() {
        let is_index_item = mnemonics::LAS12_INDEX_ITEMS
            .iter()
            .any(|m| item.mnemonic.eq_ignore_ascii_case(m));
        if !is_index_item {
            std::mem::swap(&mut item.value, &mut item.description);
        }
    }
}

/// Rename repeated curve mnemonics to `MNEM:1`, `MNEM:2`, ...
fn number_duplicate_mnemonics(curves: &mut [CurveItem]) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for curve in curves.iter() {
        if !curve.mnemonic.is_empty() {
            *counts.entry(curve.mnemonic.clone()).or_default() += 1;
        }
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    for curve in curves.iter_mut() {
        if counts.get(&curve.mnemonic).copied().unwrap_or(0) > 1 {
            let n = seen.entry(curve.mnemonic.clone()).or_default();
            *n += 1;
            curve.mnemonic = format!("{}:{}", curve.mnemonic, n);
        }
    }
}

fn strip_bom(line: &str) -> &str {
    // UTF-8 BOM, either intact or as its three ISO-8859-1 characters
    line.trim_start_matches('\u{feff}')
        .trim_start_matches("\u{ef}\u{bb}\u{bf}")
}
