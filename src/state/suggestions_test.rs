use super::*;

// =============================================================
// Filtering
// =============================================================

#[test]
fn blank_query_returns_whole_catalog() {
    assert_eq!(filter(""), CATALOG.to_vec());
    assert_eq!(filter("   "), CATALOG.to_vec());
}

#[test]
fn filter_is_case_insensitive() {
    let upper = filter("LIVRE");
    assert!(!upper.is_empty());
    assert!(upper.iter().all(|s| s.to_lowercase().contains("livre")));
    assert_eq!(upper, filter("livre"));
}

#[test]
fn filter_matches_substrings() {
    let hits = filter("abonnement");
    assert!(hits.contains(&"Abonnement streaming (1 mois)"));
    assert!(hits.contains(&"Livre audio (abonnement 1 mois)"));
}

#[test]
fn filter_trims_the_query() {
    assert_eq!(filter("  livre "), filter("livre"));
}

#[test]
fn filter_can_match_nothing() {
    assert!(filter("zzzzzz").is_empty());
}

// =============================================================
// Random pick
// =============================================================

#[test]
fn pick_stays_within_the_filtered_set() {
    let filtered = filter("livre");
    for roll in [0.0, 0.25, 0.5, 0.999_999] {
        let choice = pick(&filtered, roll).unwrap();
        assert!(filtered.contains(&choice));
    }
}

#[test]
fn pick_falls_back_to_catalog_when_filter_is_empty() {
    let choice = pick(&[], 0.5).unwrap();
    assert!(CATALOG.contains(&choice));
}

#[test]
fn pick_never_overruns_on_extreme_rolls() {
    let filtered = filter("livre");
    assert!(pick(&filtered, 1.0).is_some());
    assert!(pick(&filtered, -0.5).is_some());
}

#[test]
fn pick_is_deterministic_for_a_given_roll() {
    let filtered = filter("montre");
    assert_eq!(pick(&filtered, 0.0), Some(filtered[0]));
    assert_eq!(pick(&filtered, 0.999_999), Some(filtered[filtered.len() - 1]));
}
