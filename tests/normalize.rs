use meditriage::nlp::normalize::normalise;
use proptest::prelude::*;

#[test]
fn lowercases_and_strips_punctuation() {
    assert_eq!(normalise("Chest Pain!"), "chest pain ");
    assert_eq!(normalise("skin_rash"), "skin rash");
    assert_eq!(normalise("mild-fever"), "mild fever");
}

proptest! {
    #[test]
    fn normalisation_is_idempotent(text in ".{0,200}") {
        let once = normalise(&text);
        prop_assert_eq!(normalise(&once), once.clone());
    }

    #[test]
    fn output_stays_in_the_matching_alphabet(text in ".{0,200}") {
        let out = normalise(&text);
        prop_assert!(out
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace()));
    }
}
