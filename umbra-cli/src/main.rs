use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Commands};
use umbra_core::{Config, UmbraError};

fn main() {
    let cli = Cli::parse();

    // Initialize logging; UMBRA_LOG overrides the -v flags
    let log_level = std::env::var("UMBRA_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string()
    });

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<UmbraError>() {
            Some(UmbraError::Configuration(_)) => 2,
            Some(UmbraError::Io(_)) => 3,
            Some(UmbraError::Serialization(_))
            | Some(UmbraError::InconsistentAnnotationShape(_)) => 4,
            Some(UmbraError::Storage(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => umbra_core::load_config(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Digest(args) => crate::cli::commands::digest::run(args, &config),
        Commands::Domains(args) => crate::cli::commands::domains::run(args, &config),
        Commands::Clusters(args) => crate::cli::commands::clusters::run(args, &config),
        Commands::Coverage(args) => crate::cli::commands::coverage::run(args, &config),
    }
}
