//! Convert command: one LAS file into Wellbore and WellLog record files

use super::shared::{
    CommandStats, error_envelope, load_configuration, print_json, setup_logging,
    success_envelope,
};
use crate::cli::args::{ConvertArgs, OutputFormat};
use crate::error::Result;
use crate::service::convert_file;
use crate::writer::{WrittenRecords, write_records};
use colored::*;
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info};

pub async fn run_convert(args: ConvertArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.logging)?;
    debug!("Convert arguments: {:?}", args);

    let outcome = convert_and_write(&args);

    match args.output_format {
        OutputFormat::Json => {
            let envelope = match &outcome {
                Ok((wellbore_id, written)) => success_envelope(json!({
                    "wellbore_id": wellbore_id,
                    "wellbore_path": written.wellbore_path,
                    "welllog_path": written.welllog_path,
                })),
                Err(e) => error_envelope(e),
            };
            print_json(&envelope)?;
        }
        OutputFormat::Human => {
            if let Ok((wellbore_id, written)) = &outcome {
                println!("{}", "Conversion complete".bright_green().bold());
                println!("  {} {}", "Wellbore ID:".bright_cyan(), wellbore_id.bright_white());
                println!(
                    "  {} {}",
                    "Wellbore record:".bright_cyan(),
                    written.wellbore_path.display()
                );
                println!(
                    "  {} {}",
                    "WellLog record:".bright_cyan(),
                    written.welllog_path.display()
                );
            }
        }
    }

    match outcome {
        Ok(_) => Ok(CommandStats {
            files_processed: 1,
            records_written: 2,
            processing_time: start_time.elapsed(),
            ..Default::default()
        }),
        // The envelope already carries the failure
        Err(_) if args.output_format == OutputFormat::Json => Ok(CommandStats {
            files_failed: 1,
            processing_time: start_time.elapsed(),
            ..Default::default()
        }),
        Err(e) => Err(e),
    }
}

fn convert_and_write(args: &ConvertArgs) -> Result<(String, WrittenRecords)> {
    args.validate()?;

    let wellbore_id = args.get_wellbore_id();
    let config = load_configuration(&args.get_config_path())?;
    let output = convert_file(
        &args.las_file,
        &wellbore_id,
        &config,
        args.conversion_options(),
    )?;

    let written = write_records(&output, &args.get_output_dir(), &wellbore_id)?;
    info!(
        "Wrote records for '{}' to {}",
        wellbore_id,
        args.get_output_dir().display()
    );

    Ok((wellbore_id, written))
}
