//! CLI entry-point for one-shot prompt analysis.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{artifacts::ModelBundle, config::Settings, triage};

/// Run the prediction pipeline once.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Free-text symptom description.
    #[arg(long)]
    pub prompt: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let bundle = ModelBundle::load(&settings)?;
    let analysis = triage::predict(&args.prompt, &bundle)?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
