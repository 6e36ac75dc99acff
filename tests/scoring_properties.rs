//! Property-based tests for the public scoring surface
//!
//! These verify invariants that should hold for all inputs:
//! - Every complete base vector scores, in [0.0, 10.0], at one decimal
//! - Scoring is deterministic across constructions
//! - A duplicated metric always invalidates
//! - Severity always agrees with the overall score's bucket

use cvsscore::{Cvss2, Cvss31, Severity};
use proptest::prelude::*;

fn v31_base_vector() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["N", "A", "L", "P"]),
        prop::sample::select(vec!["L", "H"]),
        prop::sample::select(vec!["N", "L", "H"]),
        prop::sample::select(vec!["N", "R"]),
        prop::sample::select(vec!["U", "C"]),
        prop::sample::select(vec!["H", "L", "N"]),
        prop::sample::select(vec!["H", "L", "N"]),
        prop::sample::select(vec!["H", "L", "N"]),
    )
        .prop_map(|(av, ac, pr, ui, s, c, i, a)| {
            format!("AV:{av}/AC:{ac}/PR:{pr}/UI:{ui}/S:{s}/C:{c}/I:{i}/A:{a}")
        })
}

fn v2_base_vector() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["L", "A", "N"]),
        prop::sample::select(vec!["H", "M", "L"]),
        prop::sample::select(vec!["M", "S", "N"]),
        prop::sample::select(vec!["N", "P", "C"]),
        prop::sample::select(vec!["N", "P", "C"]),
        prop::sample::select(vec!["N", "P", "C"]),
    )
        .prop_map(|(av, ac, au, c, i, a)| {
            format!("AV:{av}/AC:{ac}/Au:{au}/C:{c}/I:{i}/A:{a}")
        })
}

fn is_one_decimal(score: f64) -> bool {
    let tenths = score * 10.0;
    (tenths - tenths.round()).abs() < 1e-9
}

proptest! {
    #[test]
    fn prop_v31_base_vectors_score_in_range(vector in v31_base_vector()) {
        let cvss = Cvss31::new(&vector);
        prop_assert!(cvss.is_valid());
        let score = cvss.base_score().unwrap();
        prop_assert!((0.0..=10.0).contains(&score), "score {score} out of range");
        prop_assert!(is_one_decimal(score), "score {score} not at one decimal");
    }

    #[test]
    fn prop_v2_base_vectors_score_in_range(vector in v2_base_vector()) {
        let cvss = Cvss2::new(&vector);
        prop_assert!(cvss.is_valid());
        let score = cvss.base_score().unwrap();
        prop_assert!((0.0..=10.0).contains(&score), "score {score} out of range");
        prop_assert!(is_one_decimal(score), "score {score} not at one decimal");
    }

    #[test]
    fn prop_base_only_overall_equals_base(vector in v31_base_vector()) {
        let cvss = Cvss31::new(&vector);
        prop_assert_eq!(
            cvss.overall_score().unwrap(),
            cvss.base_score().unwrap()
        );
    }

    #[test]
    fn prop_scoring_is_deterministic(vector in v31_base_vector()) {
        let first = Cvss31::new(&vector);
        let second = Cvss31::new(&vector);
        prop_assert_eq!(first.base_score().unwrap(), second.base_score().unwrap());
        prop_assert_eq!(first.severity().unwrap(), second.severity().unwrap());
    }

    #[test]
    fn prop_duplicate_metric_always_invalidates(vector in v31_base_vector()) {
        let cvss = Cvss31::new(&format!("{vector}/AV:N"));
        prop_assert!(!cvss.is_valid());
        prop_assert!(cvss.overall_score().is_err());
    }

    #[test]
    fn prop_severity_agrees_with_overall_score(vector in v31_base_vector()) {
        let cvss = Cvss31::new(&vector);
        let expected = Severity::from_score(cvss.overall_score().unwrap());
        prop_assert_eq!(cvss.severity().unwrap(), expected);
    }
}
