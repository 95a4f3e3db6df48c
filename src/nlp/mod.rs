//! Text normalisation and symptom feature extraction.

pub mod features;
pub mod normalize;
