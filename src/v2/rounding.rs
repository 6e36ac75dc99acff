//! Score rounding per the CVSS v2 guide
//!
//! v2 predates the upward-biased rules of v3.x: scores round to the nearest
//! tenth, ties away from zero.

/// Round to the nearest tenth, ties away from zero.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_tenth() {
        assert_eq!(round_to_tenth(7.786393), 7.8);
        assert_eq!(round_to_tenth(6.4467), 6.4);
        assert_eq!(round_to_tenth(9.995091206), 10.0);
    }

    #[test]
    fn exact_tenths_are_preserved() {
        assert_eq!(round_to_tenth(0.0), 0.0);
        assert_eq!(round_to_tenth(8.3), 8.3);
        assert_eq!(round_to_tenth(10.0), 10.0);
    }

    proptest::proptest! {
        #[test]
        fn is_idempotent_for_all_scores(raw in 0.0f64..=10.0) {
            let once = round_to_tenth(raw);
            proptest::prop_assert_eq!(round_to_tenth(once), once);
        }
    }
}
