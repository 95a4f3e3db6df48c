use meditriage::triage::rank_distribution;

#[test]
fn ranked_output_is_descending_and_capped_at_three() {
    let dist = [0.05, 0.40, 0.10, 0.25, 0.20];
    let ranked = rank_distribution(&dist, 3);
    assert_eq!(ranked.len(), 3);
    assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(ranked[0], (1, 0.40));
}

#[test]
fn ties_keep_class_index_order() {
    let dist = [0.2, 0.3, 0.3, 0.2];
    let ranked = rank_distribution(&dist, 3);
    assert_eq!(ranked, vec![(1, 0.3), (2, 0.3), (0, 0.2)]);
}

#[test]
fn ranking_is_deterministic_for_identical_inputs() {
    let dist = [0.25, 0.25, 0.25, 0.25];
    assert_eq!(rank_distribution(&dist, 3), rank_distribution(&dist, 3));
}

#[test]
fn shorter_distributions_rank_whole_input() {
    let dist = [0.6, 0.4];
    let ranked = rank_distribution(&dist, 3);
    assert_eq!(ranked.len(), 2);
}
