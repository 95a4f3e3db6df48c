//! Command-line interface wiring for meditriage.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod analyze;
pub mod diseases;
pub mod serve;
pub mod train;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Symptom triage assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Train => train::run(settings).await,
            Commands::Analyze(args) => analyze::run(args, settings).await,
            Commands::Diseases => diseases::run(settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Train the classifier from the Disease-Symptom CSVs.
    Train,
    /// Analyse a free-text symptom description once and print the result.
    Analyze(analyze::Args),
    /// List the diseases the model knows about.
    Diseases,
    /// Serve the JSON API.
    Serve(serve::Args),
}
