//! Runtime configuration utilities for meditriage.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Folder holding the trained model artifacts.
    pub model_dir: PathBuf,
    /// Folder holding the raw training CSVs.
    pub data_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let model_dir = env::var("MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./model"));
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));

        std::fs::create_dir_all(&model_dir).context("creating model dir")?;

        Ok(Self {
            model_dir,
            data_dir,
        })
    }

    /// Convenience helper for artifact path segments.
    pub fn join_model<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.model_dir.join(path)
    }

    /// Convenience helper for training-data path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }
}
