//! CLI entry-point for the offline training job.

use anyhow::Result;
use tracing::instrument;

use crate::{config::Settings, model};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    model::train::run(&settings)
}
