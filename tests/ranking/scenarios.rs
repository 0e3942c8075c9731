//! Realistic screening scenarios: the right resume should come out on top.

use crate::common::{assert_score_eq, JOB_PYTHON, RESUMES};
use resrank::{rank, rank_candidates, Candidate, RankerConfig};

#[test]
fn python_resume_beats_java_resume() {
    let scores = rank(
        JOB_PYTHON,
        &["expert python and django developer", "java backend engineer"],
    )
    .unwrap();

    assert_eq!(scores.len(), 2);
    assert!(
        scores[0] > scores[1],
        "python resume {} should beat java resume {}",
        scores[0],
        scores[1]
    );
}

#[test]
fn identical_candidate_scores_one() {
    let scores = rank(JOB_PYTHON, &[JOB_PYTHON, "java backend engineer"]).unwrap();
    assert_score_eq(scores[0], 1.0);
}

#[test]
fn disjoint_vocabulary_scores_zero() {
    let scores = rank(JOB_PYTHON, &["gardening landscaping horticulture"]).unwrap();
    assert_eq!(scores, vec![0.0]);
}

#[test]
fn scores_align_with_input_order() {
    let texts: Vec<&str> = RESUMES.iter().map(|(_, text)| *text).collect();
    let forward = rank(JOB_PYTHON, &texts).unwrap();

    let reversed_texts: Vec<&str> = texts.iter().rev().copied().collect();
    let reversed = rank(JOB_PYTHON, &reversed_texts).unwrap();

    assert_eq!(forward.len(), texts.len());
    for (i, score) in forward.iter().enumerate() {
        assert_score_eq(*score, reversed[texts.len() - 1 - i]);
    }
}

#[test]
fn ranked_candidates_best_first() {
    let candidates: Vec<Candidate> = RESUMES
        .iter()
        .rev()
        .map(|(id, text)| Candidate::new(*id, *text))
        .collect();

    let ranked = rank_candidates(JOB_PYTHON, &candidates, &RankerConfig::default()).unwrap();
    let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();

    assert_eq!(ids, vec!["priya.pdf", "marco.pdf", "lena.pdf"]);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn query_case_does_not_matter() {
    let texts: Vec<&str> = RESUMES.iter().map(|(_, text)| *text).collect();
    let lower = rank(JOB_PYTHON, &texts).unwrap();
    let upper = rank(&JOB_PYTHON.to_uppercase(), &texts).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn repeated_distinctive_term_raises_score() {
    let scores = rank(
        "kubernetes engineer",
        &[
            "engineer with kubernetes",
            "engineer with kubernetes kubernetes kubernetes",
        ],
    )
    .unwrap();
    assert!(scores[1] > scores[0]);
}
