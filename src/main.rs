use anyhow::Context;
use clap::Parser;
use las_osdu::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let result = run(args);

    match result {
        Ok(stats) if stats.has_failures() => process::exit(1),
        Ok(_stats) => {
            // Success - output has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<commands::CommandStats> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => Ok(result?),
            _ = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                anyhow::bail!("Processing interrupted by user")
            }
        }
    })
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("LAS to OSDU - Well-log Record Converter");
    println!("=======================================");
    println!();
    println!("Convert LAS well-log files into OSDU Wellbore and WellLog JSON records.");
    println!();
    println!("USAGE:");
    println!("    las-osdu <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert one LAS file into Wellbore and WellLog records");
    println!("    validate    Check that a LAS file parses and passes validation");
    println!("    metadata    Print header metadata of a LAS file as JSON");
    println!("    batch       Convert every LAS file under a directory");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert one file with the default configuration:");
    println!("    las-osdu convert test_data/7_1-1.las");
    println!();
    println!("    # Convert with an explicit wellbore id and output directory:");
    println!("    las-osdu convert well.las --wellbore-id wb-001 --config osdu.json -o out/");
    println!();
    println!("    # Convert a directory tree using 4 workers:");
    println!("    las-osdu batch data/las --config osdu.json -o out/ -j 4");
    println!();
    println!("For detailed help on any command, use:");
    println!("    las-osdu <COMMAND> --help");
}
