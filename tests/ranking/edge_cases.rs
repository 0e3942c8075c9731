//! Degenerate inputs: empty queries, empty candidates, punctuation-only text.

use resrank::{rank, rank_with_config, RankError, RankerConfig};

#[test]
fn zero_candidates_is_an_error() {
    let none: Vec<String> = Vec::new();
    let err = rank("python developer", &none).unwrap_err();
    assert!(matches!(err, RankError::EmptyCandidateSet));
}

#[test]
fn empty_query_scores_everything_zero() {
    let scores = rank("", &["python developer", "java engineer"]).unwrap();
    assert_eq!(scores, vec![0.0, 0.0]);
}

#[test]
fn query_of_single_characters_scores_zero() {
    // Single characters never become terms
    let scores = rank("C R", &["C developer", "R statistician"]).unwrap();
    assert_eq!(scores, vec![0.0, 0.0]);
}

#[test]
fn empty_candidate_scores_zero_without_affecting_others() {
    let scores = rank("rust developer", &["", "rust developer"]).unwrap();
    assert_eq!(scores[0], 0.0);
    assert!(scores[1] > 0.99);
}

#[test]
fn single_candidate_identical_to_query() {
    let scores = rank("rust", &["rust"]).unwrap();
    assert!((scores[0] - 1.0).abs() < 1e-12);
}

#[test]
fn longer_min_token_drops_short_terms() {
    let config = RankerConfig {
        min_token_chars: 4,
        ..Default::default()
    };
    // "go" and "sql" fall below the minimum, leaving no shared terms
    let scores = rank_with_config("go sql", &["go sql"], &config).unwrap();
    assert_eq!(scores, vec![0.0]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn accent_folding_matches_plain_spelling() {
    let plain = rank("resume cafe", &["résumé café"]).unwrap();
    assert_eq!(plain, vec![0.0]);

    let config = RankerConfig {
        strip_accents: true,
        ..Default::default()
    };
    let folded = rank_with_config("resume cafe", &["résumé café"], &config).unwrap();
    assert!((folded[0] - 1.0).abs() < 1e-12);
}

#[cfg(not(feature = "unicode-normalization"))]
#[test]
fn accent_folding_needs_the_feature() {
    let config = RankerConfig {
        strip_accents: true,
        ..Default::default()
    };
    let err = rank_with_config("resume", &["résumé"], &config).unwrap_err();
    assert!(matches!(err, RankError::Config(_)));
}
