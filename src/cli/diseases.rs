//! CLI entry-point listing the known disease table.

use anyhow::Result;
use tracing::instrument;

use crate::{artifacts::ModelBundle, config::Settings};

#[instrument(skip(settings))]
pub async fn run(settings: Settings) -> Result<()> {
    let bundle = ModelBundle::load(&settings)?;
    for (name, info) in &bundle.disease_info {
        println!(
            "{name}\t{}\t{}",
            info.risk_level,
            if info.is_emergency { "emergency" } else { "-" }
        );
    }
    Ok(())
}
