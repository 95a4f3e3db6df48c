//! Canonical text form shared by prompts and vocabulary entries.

/// Lowercase, map underscores/hyphens to spaces, blank out everything outside
/// `[a-z0-9\s]`. Matching is symmetric only if both sides go through here.
pub fn normalise(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            '_' | '-' => ' ',
            c if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() => c,
            _ => ' ',
        })
        .collect()
}
