//! Sentinel CLI
//!
//! A command-line interface for running insider-threat detection over
//! user-activity logs.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

/// Sentinel: insider-threat detection over user-activity logs.
#[derive(Parser, Debug)]
#[command(name = "sentinel", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate an activity log against a policy and write the run artifacts.
    Scan(commands::scan::ScanArgs),
    /// Write a synthetic activity log to scan.
    Generate(commands::generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan(args) => commands::scan::run(&args),
        Command::Generate(args) => commands::generate::run(&args),
    }
}
