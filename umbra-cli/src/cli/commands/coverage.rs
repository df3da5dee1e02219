use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use umbra_annot::SequenceEntry;
use umbra_core::Config;
use umbra_pipeline::SequencePipeline;
use umbra_store::MemoryStore;

#[derive(Args)]
pub struct CoverageArgs {
    /// A single pre-parsed sequence entry as a JSON document
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,
}

pub fn run(args: CoverageArgs, config: &Config) -> Result<()> {
    let content = std::fs::read_to_string(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;
    let entry: SequenceEntry = serde_json::from_str(&content)
        .with_context(|| format!("not a sequence entry: {}", args.input.display()))?;

    let scratch = MemoryStore::new();
    let pipeline = SequencePipeline::new(&scratch, config);
    let record = pipeline.digest_entry(&entry)?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
