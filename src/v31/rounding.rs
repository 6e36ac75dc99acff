//! Score rounding per the CVSS v3.1 specification
//!
//! v3.1 replaced v3.0's ceiling-at-one-decimal with an integer algorithm
//! (specification appendix A) so scores stop absorbing binary floating-point
//! representation error. The two rules diverge on inputs that sit a hair
//! above an exact tenth, so each version pins its own implementation.

/// Round up to one decimal place using the published v3.1 integer algorithm.
///
/// Scale by 100000 and round to the nearest integer; an integer exactly
/// divisible by 10000 is already on a tenth, anything else rounds to the
/// next tenth up.
pub(crate) fn round_up(value: f64) -> f64 {
    let scaled = (value * 100_000.0).round() as i64;
    if scaled % 10_000 == 0 {
        scaled as f64 / 100_000.0
    } else {
        (scaled / 10_000 + 1) as f64 / 10.0
    }
}
