//! Batch command: convert every LAS file under a directory
//!
//! Each file is converted on tokio's blocking pool. At most `--workers`
//! conversions run at once, and every task owns its path, id and a clone of
//! the configuration.
//!
//! Wellbore ids come from the path relative to the input directory, so
//! `a/well.las` becomes `wellbore-a_well`. Files that still map to the same
//! id are rejected rather than overwriting each other's records.

use super::shared::{CommandStats, create_progress_bar, load_configuration, setup_logging};
use crate::cli::args::BatchArgs;
use crate::config::{Configuration, ConversionOptions};
use crate::constants::{DEFAULT_WELLBORE_ID_PREFIX, LAS_EXTENSION};
use crate::error::{LasOsduError, Result};
use crate::service::convert_file;
use crate::writer::{WrittenRecords, write_records};
use colored::*;
use futures::stream::{self, StreamExt};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Outcome of converting one file in a batch
#[derive(Debug)]
pub struct FileOutcome {
    pub las_file: PathBuf,
    pub wellbore_id: String,
    pub result: Result<WrittenRecords>,
}

pub async fn run_batch(args: BatchArgs) -> Result<CommandStats> {
    let start_time = Instant::now();

    setup_logging(&args.logging)?;
    debug!("Batch arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args.get_config_path())?;
    let las_files = discover_las_files(&args.input_dir)?;

    if args.logging.show_progress() {
        println!("{}", "Starting LAS batch conversion".bright_green().bold());
        println!("  {} {}", "Input:".bright_cyan(), args.input_dir.display());
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            args.get_output_dir().display()
        );
        println!(
            "  {} {} LAS files",
            "Found".bright_green(),
            las_files.len().to_string().bright_white().bold()
        );
    }

    if las_files.is_empty() {
        warn!("No LAS files found in {}", args.input_dir.display());
        return Ok(CommandStats {
            processing_time: start_time.elapsed(),
            ..Default::default()
        });
    }

    let outcomes = convert_all(
        las_files,
        &args.input_dir,
        &config,
        &args.get_output_dir(),
        args.conversion_options(),
        args.get_workers(),
        args.logging.show_progress(),
    )
    .await;

    let mut stats = CommandStats::default();
    for outcome in &outcomes {
        match &outcome.result {
            Ok(_) => {
                stats.files_processed += 1;
                stats.records_written += 2;
            }
            Err(e) => {
                stats.files_failed += 1;
                debug!("Failed to convert {}: {}", outcome.las_file.display(), e);
            }
        }
    }
    stats.processing_time = start_time.elapsed();

    if args.logging.show_progress() {
        print_summary(&stats, &outcomes);
    }

    Ok(stats)
}

/// Find `*.las` files under `input_dir`, sorted for a stable processing order
pub fn discover_las_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut las_files = Vec::new();

    for entry in WalkDir::new(input_dir).follow_links(false) {
        let entry = entry.map_err(|e| {
            LasOsduError::conversion(format!(
                "Failed to read directory {}: {}",
                input_dir.display(),
                e
            ))
        })?;

        let path = entry.path();
        let is_las = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(LAS_EXTENSION));

        if entry.file_type().is_file() && is_las {
            las_files.push(path.to_path_buf());
        }
    }

    las_files.sort();

    debug!(
        "Discovered {} LAS files in {}",
        las_files.len(),
        input_dir.display()
    );
    Ok(las_files)
}

/// Wellbore id for a file found under `input_dir`: `wellbore-<dirs>_<stem>`
pub fn batch_wellbore_id(input_dir: &Path, las_file: &Path) -> String {
    let relative = las_file.strip_prefix(input_dir).unwrap_or(las_file);

    let mut parts: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|parent| parent.components())
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    if let Some(stem) = relative.file_stem() {
        parts.push(stem.to_string_lossy().into_owned());
    }

    format!("{DEFAULT_WELLBORE_ID_PREFIX}{}", parts.join("_"))
}

/// Convert files concurrently, at most `workers` at a time
pub async fn convert_all(
    las_files: Vec<PathBuf>,
    input_dir: &Path,
    config: &Configuration,
    output_dir: &Path,
    options: ConversionOptions,
    workers: usize,
    show_progress: bool,
) -> Vec<FileOutcome> {
    let pb = if show_progress {
        create_progress_bar(las_files.len() as u64, "Converting LAS files")
    } else {
        indicatif::ProgressBar::hidden()
    };

    let jobs: Vec<(PathBuf, String)> = las_files
        .into_iter()
        .map(|las_file| {
            let wellbore_id = batch_wellbore_id(input_dir, &las_file);
            (las_file, wellbore_id)
        })
        .collect();

    let mut id_counts: HashMap<String, usize> = HashMap::new();
    for (_, wellbore_id) in &jobs {
        *id_counts.entry(wellbore_id.clone()).or_default() += 1;
    }

    let outcomes: Vec<FileOutcome> = stream::iter(jobs)
        .map(|(las_file, wellbore_id)| {
            let config = config.clone();
            let output_dir = output_dir.to_path_buf();
            let pb = pb.clone();
            let is_duplicate = id_counts.get(&wellbore_id).is_some_and(|&n| n > 1);
            async move {
                if let Some(file_name) = las_file.file_name() {
                    pb.set_message(format!("Converting: {}", file_name.to_string_lossy()));
                }

                let result = if is_duplicate {
                    Err(LasOsduError::validation(format!(
                        "Wellbore ID '{}' is shared by more than one LAS file",
                        wellbore_id
                    )))
                } else {
                    let task_path = las_file.clone();
                    let task_id = wellbore_id.clone();
                    tokio::task::spawn_blocking(move || {
                        convert_one(&task_path, &task_id, &config, &output_dir, options)
                    })
                    .await
                    .unwrap_or_else(|e| {
                        Err(LasOsduError::conversion(format!(
                            "Conversion task failed: {}",
                            e
                        )))
                    })
                };

                pb.inc(1);
                FileOutcome {
                    las_file,
                    wellbore_id,
                    result,
                }
            }
        })
        .buffer_unordered(workers.max(1))
        .collect()
        .await;

    pb.finish_with_message("Conversion complete");
    outcomes
}

fn convert_one(
    las_file: &Path,
    wellbore_id: &str,
    config: &Configuration,
    output_dir: &Path,
    options: ConversionOptions,
) -> Result<WrittenRecords> {
    let output = convert_file(las_file, wellbore_id, config, options)?;
    let written = write_records(&output, output_dir, wellbore_id)?;
    info!("Converted {} as '{}'", las_file.display(), wellbore_id);
    Ok(written)
}

fn print_summary(stats: &CommandStats, outcomes: &[FileOutcome]) {
    println!("\n{}", "Batch Summary".bright_green().bold());
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        stats.processing_time.as_millis().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Files converted:".bright_cyan(),
        stats.files_processed.to_string().bright_white()
    );
    if stats.has_failures() {
        println!(
            "  {} {}",
            "Files failed:".bright_red(),
            stats.files_failed.to_string().bright_red().bold()
        );
        for outcome in outcomes {
            if let Err(e) = &outcome.result {
                println!("    {} {}", outcome.las_file.display(), e);
            }
        }
    }
}
