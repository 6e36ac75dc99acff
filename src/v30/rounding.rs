//! Score rounding per the CVSS v3.0 specification
//!
//! v3.0 rounds up with a plain ceiling at one decimal. Binary floating-point
//! noise can therefore bump a score to the next tenth — behavior v3.1 fixed
//! with its integer algorithm. The flaw is part of the published v3.0
//! scores, so it is reproduced here, not repaired.

/// Round up to one decimal place, v3.0 style: always toward the ceiling.
pub(crate) fn round_up(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}
