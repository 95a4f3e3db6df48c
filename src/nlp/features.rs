//! Symptom matching and binary feature encoding over a fixed vocabulary.

use ndarray::Array1;
use regex::Regex;
use tracing::debug;

use crate::nlp::normalize::normalise;

/// Find which vocabulary symptoms are mentioned in the prompt.
///
/// Each entry is matched as a whole word-bounded phrase, so "pain" does not
/// fire inside "complaining". Results keep vocabulary order and contain each
/// symptom at most once.
pub fn extract_symptoms(prompt: &str, vocabulary: &[String]) -> Vec<String> {
    let norm = normalise(prompt);
    let mut found = Vec::new();
    for symptom in vocabulary {
        let sym_norm = normalise(symptom);
        let sym_norm = sym_norm.trim();
        if sym_norm.is_empty() {
            continue;
        }
        let pattern = format!(r"\b{}\b", regex::escape(sym_norm));
        // Escaped literal over a bounded alphabet; compilation cannot fail.
        let re = Regex::new(&pattern).expect("escaped pattern is valid");
        if re.is_match(&norm) {
            found.push(symptom.clone());
        }
    }
    found
}

/// Encode the prompt into a binary vector aligned to vocabulary order.
///
/// The classifier only knows positional indices, so the order here must be
/// the order the model was trained with. An all-zero vector is a valid
/// encoding; the model still produces a best-effort distribution from it.
pub fn encode_prompt(prompt: &str, vocabulary: &[String]) -> (Array1<f64>, Vec<String>) {
    let found = extract_symptoms(prompt, vocabulary);
    let vector = Array1::from_iter(
        vocabulary
            .iter()
            .map(|s| if found.contains(s) { 1.0 } else { 0.0 }),
    );
    debug!(matched = found.len(), dims = vector.len(), "encoded prompt");
    (vector, found)
}
