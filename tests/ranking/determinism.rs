//! Identical input must give bit-identical scores.

use crate::common::{JOB_PYTHON, RESUMES};
use resrank::{rank, rank_with_config, RankerConfig};

#[test]
fn repeated_calls_are_bit_identical() {
    let texts: Vec<&str> = RESUMES.iter().map(|(_, text)| *text).collect();

    let first = rank(JOB_PYTHON, &texts).unwrap();
    for _ in 0..5 {
        let again = rank(JOB_PYTHON, &texts).unwrap();
        let first_bits: Vec<u64> = first.iter().map(|s| s.to_bits()).collect();
        let again_bits: Vec<u64> = again.iter().map(|s| s.to_bits()).collect();
        assert_eq!(first_bits, again_bits);
    }
}

#[test]
fn every_config_is_deterministic() {
    let texts: Vec<&str> = RESUMES.iter().map(|(_, text)| *text).collect();

    for smooth_idf in [true, false] {
        for sublinear_tf in [true, false] {
            let config = RankerConfig {
                smooth_idf,
                sublinear_tf,
                ..Default::default()
            };
            let a = rank_with_config(JOB_PYTHON, &texts, &config).unwrap();
            let b = rank_with_config(JOB_PYTHON, &texts, &config).unwrap();
            assert_eq!(a, b, "smooth_idf={} sublinear_tf={}", smooth_idf, sublinear_tf);
        }
    }
}
