//! Shared components for CLI commands
//!
//! Logging setup, run statistics, the JSON status envelope and progress bar
//! styling used by more than one command.

use crate::cli::args::LoggingArgs;
use crate::config::Configuration;
use crate::error::{LasOsduError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::{Map, Value, json};
use std::path::Path;
use tracing::{debug, info};

/// Statistics for a command run, reported back to `main`
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Number of LAS files converted or inspected successfully
    pub files_processed: usize,
    /// Number of LAS files that failed
    pub files_failed: usize,
    /// Number of record files written
    pub records_written: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl CommandStats {
    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }
}

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags. Calling this more
/// than once in a process keeps the first subscriber.
pub fn setup_logging(args: &LoggingArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("las_osdu={}", log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    let initialized = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

/// Load the JSON configuration used by `convert` and `batch`
pub fn load_configuration(path: &Path) -> Result<Configuration> {
    info!("Loading configuration from {}", path.display());

    if !path.is_file() {
        return Err(LasOsduError::config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let config = Configuration::from_path(path)?;
    let missing = config.missing_fields();
    if !missing.is_empty() {
        debug!("Configuration leaves unset: {}", missing.join(", "));
    }

    Ok(config)
}

/// Success envelope: `{"status": "success", ...payload}`
///
/// Object payloads are merged into the envelope; anything else is placed
/// under `data`.
pub fn success_envelope(payload: Value) -> Value {
    let mut envelope = Map::new();
    envelope.insert("status".to_string(), json!("success"));

    match payload {
        Value::Object(fields) => envelope.extend(fields),
        other => {
            envelope.insert("data".to_string(), other);
        }
    }

    Value::Object(envelope)
}

/// Error envelope: `{"status": "error", "error_message", "error_type"}`
pub fn error_envelope(err: &LasOsduError) -> Value {
    json!({
        "status": "error",
        "error_message": err.to_string(),
        "error_type": err.error_type(),
    })
}

/// Print a JSON value to stdout, pretty printed
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Create a progress bar with the standard styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
