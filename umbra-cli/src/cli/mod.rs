pub mod commands;
pub mod io;
pub mod progress;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "umbra",
    version,
    about = "Annotation coverage and darkness profiling for protein sequence collections",
    long_about = "Umbra digests positional annotations from independent upstream sources into \
                  non-overlapping sets, computes per-category and full sequence coverage, and \
                  selects the least-dark representative for clusters of near-duplicate sequences."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Digest pre-parsed sequence entries into stored coverage records
    Digest(commands::digest::DigestArgs),

    /// Fill the domain store from an accession-sorted signature-match dump
    Domains(commands::domains::DomainsArgs),

    /// Aggregate clusters and select darkness representatives
    Clusters(commands::clusters::ClustersArgs),

    /// Compute the coverage record for a single entry and print it
    Coverage(commands::coverage::CoverageArgs),
}
