//! Command implementations for the LAS to OSDU CLI
//!
//! Each command lives in its own module:
//! - `convert`: one LAS file into record files
//! - `inspect`: `validate` and `metadata`, read-only views of a file
//! - `batch`: concurrent conversion of a directory tree

pub mod batch;
pub mod convert;
pub mod inspect;
pub mod shared;

pub use shared::CommandStats;

use crate::cli::args::{Args, Commands};
use crate::error::{LasOsduError, Result};

/// Dispatch to the handler for the parsed subcommand
pub async fn run(args: Args) -> Result<CommandStats> {
    match args.command {
        Some(Commands::Convert(convert_args)) => convert::run_convert(convert_args).await,
        Some(Commands::Validate(validate_args)) => inspect::run_validate(validate_args).await,
        Some(Commands::Metadata(metadata_args)) => inspect::run_metadata(metadata_args).await,
        Some(Commands::Batch(batch_args)) => batch::run_batch(batch_args).await,
        None => Err(LasOsduError::config("No command given")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_without_command() {
        let args = Args::try_parse_from(["las-osdu"]).unwrap();
        assert!(run(args).await.is_err());
    }

    #[tokio::test]
    async fn test_run_validate_reports_file() {
        let temp_dir = TempDir::new().unwrap();
        let las_path = temp_dir.path().join("well.las");
        fs::write(&las_path, "~V\n VERS. 2.0 :\n~W\n WELL. Well-A : WELL\n").unwrap();

        let args = Args::try_parse_from([
            "las-osdu",
            "validate",
            las_path.to_str().unwrap(),
            "--output-format",
            "json",
            "--quiet",
        ])
        .unwrap();

        let stats = run(args).await.unwrap();
        assert_eq!(stats.files_processed, 1);
        assert_eq!(stats.files_failed, 0);
    }

    #[tokio::test]
    async fn test_run_convert_missing_file_is_conversion_error() {
        let args = Args::try_parse_from(["las-osdu", "convert", "/nonexistent/well.las", "-q"])
            .unwrap();

        match run(args).await {
            Err(LasOsduError::Conversion { message }) => {
                assert!(message.contains("/nonexistent/well.las"));
            }
            other => panic!("Expected Conversion error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_convert_writes_records() {
        let temp_dir = TempDir::new().unwrap();
        let las_path = temp_dir.path().join("7_1-1.las");
        let config_path = temp_dir.path().join("config.json");
        let output_dir = temp_dir.path().join("out");

        fs::write(
            &las_path,
            "~V\n VERS. 2.0 :\n~W\n WELL. Well-A : WELL\n~C\n DEPT.M : depth\n",
        )
        .unwrap();
        fs::write(
            &config_path,
            r#"{
                "defaultViewers": ["v"],
                "defaultOwners": ["o"],
                "legalTags": ["t"],
                "legalRelevantDataCountries": ["US"],
                "legalStatus": "compliant",
                "dataPartitionId": "osdu"
            }"#,
        )
        .unwrap();

        let args = Args::try_parse_from([
            "las-osdu",
            "convert",
            las_path.to_str().unwrap(),
            "--config",
            config_path.to_str().unwrap(),
            "--output",
            output_dir.to_str().unwrap(),
            "--quiet",
        ])
        .unwrap();

        let stats = run(args).await.unwrap();

        assert_eq!(stats.files_processed, 1);
        assert_eq!(stats.records_written, 2);
        assert!(output_dir.join("wellbore-7_1-1-wellbore.json").exists());
        assert!(output_dir.join("wellbore-7_1-1-welllog.json").exists());
    }
}
