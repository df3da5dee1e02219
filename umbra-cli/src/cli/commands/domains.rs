use crate::cli::io::read_jsonl;
use crate::cli::progress::RunObserver;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use umbra_core::Config;
use umbra_pipeline::{DomainDigester, DomainRow};
use umbra_store::{CheckpointWriter, MemoryStore};

#[derive(Args)]
pub struct DomainsArgs {
    /// Accession-sorted signature matches, one JSON document per line (.gz ok)
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Checkpoint directory for snapshots and the accession index
    #[arg(short = 'o', long, value_name = "DIR")]
    pub checkpoint_dir: Option<PathBuf>,

    /// Store name used for snapshot and index files
    #[arg(long, default_value = "domains")]
    pub name: String,
}

pub fn run(args: DomainsArgs, config: &Config) -> Result<()> {
    let rows: Vec<DomainRow> = read_jsonl(&args.input)?;
    info!(count = rows.len(), "loaded signature matches");

    let store = MemoryStore::new();
    let observer = RunObserver::new("domains");
    let digester = DomainDigester::new(&store, &config.digest).with_observer(&observer);
    let summary = digester.run(rows)?;
    observer.finish();

    let checkpoint_dir = super::resolve_checkpoint_dir(args.checkpoint_dir.as_deref(), config);
    let writer = CheckpointWriter::new(&checkpoint_dir, args.name.as_str())?;
    writer.snapshot(summary.processed, &store, &store.accessions())?;

    println!(
        "{} matches processed, {} sequences stored",
        summary.processed, summary.stored
    );
    Ok(())
}
