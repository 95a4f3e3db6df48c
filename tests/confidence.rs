use meditriage::triage::risk::confidence_label;
use proptest::prelude::*;

#[test]
fn tier_lower_bounds_are_inclusive() {
    assert_eq!(confidence_label(0.80), "Very High");
    assert_eq!(confidence_label(0.60), "High");
    assert_eq!(confidence_label(0.40), "Moderate");
    assert_eq!(confidence_label(0.20), "Low");
}

#[test]
fn values_below_bounds_fall_to_the_next_tier() {
    assert_eq!(confidence_label(1.0), "Very High");
    assert_eq!(confidence_label(0.7999), "High");
    assert_eq!(confidence_label(0.5999), "Moderate");
    assert_eq!(confidence_label(0.3999), "Low");
    assert_eq!(confidence_label(0.1999), "Very Low");
    assert_eq!(confidence_label(0.0), "Very Low");
}

proptest! {
    #[test]
    fn tiers_partition_the_unit_interval(p in 0.0f64..=1.0) {
        let label = confidence_label(p);
        prop_assert!(
            ["Very High", "High", "Moderate", "Low", "Very Low"].contains(&label)
        );
    }
}
