use meditriage::nlp::features::encode_prompt;

fn vocabulary() -> Vec<String> {
    ["chest pain", "cough", "high fever", "nausea"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn vector_length_always_equals_vocabulary_size() {
    let vocab = vocabulary();
    for prompt in ["", "cough", "cough and nausea and everything else"] {
        let (vector, _) = encode_prompt(prompt, &vocab);
        assert_eq!(vector.len(), vocab.len());
    }
}

#[test]
fn ones_land_on_matched_slots() {
    let vocab = vocabulary();
    let (vector, found) = encode_prompt("a bad cough with nausea", &vocab);
    assert_eq!(vector.to_vec(), vec![0.0, 1.0, 0.0, 1.0]);
    assert_eq!(found, vec!["cough".to_string(), "nausea".to_string()]);
}

#[test]
fn vector_is_all_zero_iff_nothing_matched() {
    let vocab = vocabulary();
    let (zeroes, found) = encode_prompt("feeling great actually", &vocab);
    assert!(found.is_empty());
    assert!(zeroes.iter().all(|&v| v == 0.0));

    let (vector, found) = encode_prompt("nausea", &vocab);
    assert!(!found.is_empty());
    assert!(vector.iter().any(|&v| v == 1.0));
}
