//! Command-line argument definitions for the LAS to OSDU converter
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::ConversionOptions;
use crate::constants::DEFAULT_CONFIG_PATH;
use crate::error::{LasOsduError, Result};
use crate::service::default_wellbore_id;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the LAS to OSDU converter
///
/// Converts LAS well-log files into OSDU Wellbore and WellLog JSON records.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "las-osdu",
    version,
    about = "Convert LAS well-log files into OSDU Wellbore and WellLog records",
    long_about = "Parses LAS (Log ASCII Standard) well-log files and maps their well and curve \
                  headers into OSDU-style Wellbore and WellLog JSON records. Access control, \
                  legal tags and the data partition come from a JSON configuration file."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert one LAS file into Wellbore and WellLog records
    Convert(ConvertArgs),
    /// Check that a LAS file parses and passes validation
    Validate(ValidateArgs),
    /// Print header metadata of a LAS file as JSON
    Metadata(MetadataArgs),
    /// Convert every LAS file under a directory
    Batch(BatchArgs),
}

/// Logging flags shared by all subcommands
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct LoggingArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl LoggingArgs {
    /// Get the tracing level implied by the flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON status envelope for scripting
    Json,
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// LAS file to convert
    #[arg(value_name = "LAS_FILE")]
    pub las_file: PathBuf,

    /// Wellbore identifier
    ///
    /// Defaults to `wellbore-<file stem>`.
    #[arg(short = 'w', long = "wellbore-id", value_name = "ID")]
    pub wellbore_id: Option<String>,

    /// JSON configuration with ACL, legal and partition settings
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Directory for the generated record files
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Reject files whose WELL value is blank instead of warning
    #[arg(long = "strict")]
    pub strict: bool,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl ConvertArgs {
    /// Validate the convert arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.las_file.is_file() {
            return Err(LasOsduError::conversion(format!(
                "LAS file does not exist: {}",
                self.las_file.display()
            )));
        }

        if self
            .wellbore_id
            .as_deref()
            .is_some_and(|id| id.trim().is_empty())
        {
            return Err(LasOsduError::config("Wellbore ID must not be blank"));
        }

        Ok(())
    }

    /// Explicit wellbore id, or one derived from the file name
    pub fn get_wellbore_id(&self) -> String {
        self.wellbore_id
            .clone()
            .unwrap_or_else(|| default_wellbore_id(&self.las_file))
    }

    pub fn get_config_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn get_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            strict_well_name: self.strict,
        }
    }
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// LAS file to validate
    #[arg(value_name = "LAS_FILE")]
    pub las_file: PathBuf,

    /// Treat a blank WELL value as invalid
    #[arg(long = "strict")]
    pub strict: bool,

    #[arg(long = "output-format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl ValidateArgs {
    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            strict_well_name: self.strict,
        }
    }
}

/// Arguments for the metadata command
#[derive(Debug, Clone, Parser)]
pub struct MetadataArgs {
    /// LAS file to inspect
    #[arg(value_name = "LAS_FILE")]
    pub las_file: PathBuf,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the batch command
#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Directory searched recursively for `*.las` files
    #[arg(value_name = "DIR")]
    pub input_dir: PathBuf,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Directory for the generated record files
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of files converted concurrently (defaults to the CPU count)
    #[arg(short = 'j', long = "workers", value_name = "COUNT")]
    pub workers: Option<usize>,

    /// Reject files whose WELL value is blank instead of warning
    #[arg(long = "strict")]
    pub strict: bool,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl BatchArgs {
    /// Validate the batch arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_dir.is_dir() {
            return Err(LasOsduError::config(format!(
                "Input path is not a directory: {}",
                self.input_dir.display()
            )));
        }

        if self.workers == Some(0) {
            return Err(LasOsduError::config(
                "Number of workers must be greater than 0",
            ));
        }

        Ok(())
    }

    pub fn get_workers(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    pub fn get_config_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn get_output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn conversion_options(&self) -> ConversionOptions {
        ConversionOptions {
            strict_well_name: self.strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_convert_defaults() {
        let args = parse(&["las-osdu", "convert", "test_data/7_1-1.las"]);
        let Some(Commands::Convert(convert)) = args.command else {
            panic!("Expected convert command");
        };

        assert_eq!(convert.get_wellbore_id(), "wellbore-7_1-1");
        assert_eq!(
            convert.get_config_path(),
            PathBuf::from("config/default_config.json")
        );
        assert_eq!(convert.get_output_dir(), PathBuf::from("."));
        assert!(!convert.conversion_options().strict_well_name);
        assert_eq!(convert.output_format, OutputFormat::Human);
        assert_eq!(convert.logging.get_log_level(), "warn");
    }

    #[test]
    fn test_convert_explicit_options() {
        let args = parse(&[
            "las-osdu",
            "convert",
            "well.las",
            "--wellbore-id",
            "wb-1",
            "--config",
            "cfg.json",
            "-o",
            "out",
            "--strict",
            "--output-format",
            "json",
            "-vv",
        ]);
        let Some(Commands::Convert(convert)) = args.command else {
            panic!("Expected convert command");
        };

        assert_eq!(convert.get_wellbore_id(), "wb-1");
        assert_eq!(convert.get_config_path(), PathBuf::from("cfg.json"));
        assert_eq!(convert.get_output_dir(), PathBuf::from("out"));
        assert!(convert.conversion_options().strict_well_name);
        assert_eq!(convert.output_format, OutputFormat::Json);
        assert_eq!(convert.logging.get_log_level(), "debug");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["las-osdu", "metadata", "a.las", "-q", "-v"]).is_err());

        let args = parse(&["las-osdu", "metadata", "a.las", "-q"]);
        let Some(Commands::Metadata(metadata)) = args.command else {
            panic!("Expected metadata command");
        };
        assert_eq!(metadata.logging.get_log_level(), "error");
        assert!(!metadata.logging.show_progress());
    }

    #[test]
    fn test_convert_args_validation() {
        let mut las = NamedTempFile::new().unwrap();
        writeln!(las, "~V").unwrap();

        let path = las.path().to_string_lossy().into_owned();
        let args = parse(&["las-osdu", "convert", &path]);
        let Some(Commands::Convert(convert)) = args.command else {
            panic!("Expected convert command");
        };
        assert!(convert.validate().is_ok());

        let args = parse(&["las-osdu", "convert", &path, "--wellbore-id", "  "]);
        let Some(Commands::Convert(convert)) = args.command else {
            panic!("Expected convert command");
        };
        assert!(convert.validate().is_err());

        let args = parse(&["las-osdu", "convert", "/nonexistent/well.las"]);
        let Some(Commands::Convert(convert)) = args.command else {
            panic!("Expected convert command");
        };
        let err = convert.validate().unwrap_err();
        assert!(matches!(err, LasOsduError::Conversion { .. }));
        assert_eq!(err.error_type(), "conversion_error");
    }

    #[test]
    fn test_batch_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_string_lossy().into_owned();

        let args = parse(&["las-osdu", "batch", &dir, "-j", "2"]);
        let Some(Commands::Batch(batch)) = args.command else {
            panic!("Expected batch command");
        };
        assert!(batch.validate().is_ok());
        assert_eq!(batch.get_workers(), 2);

        let args = parse(&["las-osdu", "batch", &dir, "-j", "0"]);
        let Some(Commands::Batch(batch)) = args.command else {
            panic!("Expected batch command");
        };
        assert!(batch.validate().is_err());

        let args = parse(&["las-osdu", "batch", "/nonexistent/dir"]);
        let Some(Commands::Batch(batch)) = args.command else {
            panic!("Expected batch command");
        };
        assert!(batch.validate().is_err());
    }

    #[test]
    fn test_batch_default_workers() {
        let args = parse(&["las-osdu", "batch", "."]);
        let Some(Commands::Batch(batch)) = args.command else {
            panic!("Expected batch command");
        };
        assert_eq!(batch.get_workers(), num_cpus::get());
    }
}
