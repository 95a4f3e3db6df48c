//! Symptom triage pipeline: free-text complaints in, ranked predictions out.

pub mod api;
pub mod artifacts;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod nlp;
pub mod triage;
