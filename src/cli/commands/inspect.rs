//! Validate and metadata commands: read-only inspection of a LAS file

use super::shared::{CommandStats, error_envelope, print_json, setup_logging, success_envelope};
use crate::cli::args::{MetadataArgs, OutputFormat, ValidateArgs};
use crate::error::Result;
use crate::las::{LasParser, read_las_file};
use crate::metadata::{Inspection, LasMetadata};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Validate a LAS file without converting it
pub async fn run_validate(args: ValidateArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.logging)?;
    debug!("Validate arguments: {:?}", args);

    let text = match read_las_file(&args.las_file) {
        Ok(text) => text,
        Err(e) if args.output_format == OutputFormat::Json => {
            print_json(&error_envelope(&e))?;
            return Ok(failed(start_time));
        }
        Err(e) => return Err(e),
    };

    let inspection = Inspection::from_text(&text, args.conversion_options());
    let (report, summary) = (&inspection.report, &inspection.summary);
    info!("Validation of {}: {}", args.las_file.display(), report.message);

    match args.output_format {
        OutputFormat::Json => {
            print_json(&success_envelope(serde_json::to_value(&inspection)?))?;
        }
        OutputFormat::Human => {
            let status = if report.is_valid {
                "VALID".bright_green().bold()
            } else {
                "INVALID".bright_red().bold()
            };
            println!("{} {}", status, args.las_file.display());
            println!("  {} {}", "Version:".bright_cyan(), report.version);
            println!("  {} {}", "Well name:".bright_cyan(), report.well_name);
            println!("  {} {}", "Curves:".bright_cyan(), report.curve_count);
            println!("  {} {}", "Size (chars):".bright_cyan(), summary.size_chars);
            if let Some(note) = &summary.parse_note {
                println!("  {} {}", "Parse note:".bright_yellow(), note);
            }
            println!("  {}", report.message);
        }
    }

    Ok(CommandStats {
        files_processed: usize::from(report.is_valid),
        files_failed: usize::from(!report.is_valid),
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// Print header metadata of a LAS file as a JSON envelope
pub async fn run_metadata(args: MetadataArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.logging)?;
    debug!("Metadata arguments: {:?}", args);

    let parsed = read_las_file(&args.las_file).and_then(|text| LasParser::new().parse(&text));

    match parsed {
        Ok(document) => {
            let metadata = LasMetadata::from_document(&document);
            print_json(&success_envelope(serde_json::to_value(&metadata)?))?;

            Ok(CommandStats {
                files_processed: 1,
                processing_time: start_time.elapsed(),
                ..Default::default()
            })
        }
        Err(e) => {
            print_json(&error_envelope(&e))?;
            Ok(failed(start_time))
        }
    }
}

fn failed(start_time: Instant) -> CommandStats {
    CommandStats {
        files_failed: 1,
        processing_time: start_time.elapsed(),
        ..Default::default()
    }
}
