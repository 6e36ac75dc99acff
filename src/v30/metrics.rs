//! CVSS v3.0 metric tables
//!
//! Weights follow the CVSS v3.0 specification (first.org, table 16); v3.0
//! and v3.1 publish identical tables, kept separately so each version stays
//! auditable against its own document. Modified metrics set to X inherit the
//! corresponding base metric before weighting, so the neutral weights listed
//! for X are never consulted; CR/IR/AR are the exception, where X genuinely
//! weighs 1.0.

use crate::metrics::MetricDef;

/// Metrics a vector must carry for its base group to be valid.
pub(crate) const BASE_METRIC_COUNT: usize = 8;

pub(crate) const ATTACK_VECTOR: MetricDef = MetricDef {
    abbreviation: "AV",
    weights: &[("N", 0.85), ("A", 0.62), ("L", 0.55), ("P", 0.2)],
};

pub(crate) const ATTACK_COMPLEXITY: MetricDef = MetricDef {
    abbreviation: "AC",
    weights: &[("L", 0.77), ("H", 0.44)],
};

pub(crate) const PRIVILEGES_REQUIRED: MetricDef = MetricDef {
    abbreviation: "PR",
    weights: &[("N", 0.85), ("L", 0.62), ("H", 0.27)],
};

// Scope selects the impact equation and the Privileges Required weights; it
// carries no weight of its own.
pub(crate) const SCOPE: MetricDef = MetricDef {
    abbreviation: "S",
    weights: &[("U", 0.0), ("C", 0.0)],
};

pub(crate) const USER_INTERACTION: MetricDef = MetricDef {
    abbreviation: "UI",
    weights: &[("N", 0.85), ("R", 0.62)],
};

pub(crate) const CONFIDENTIALITY: MetricDef = MetricDef {
    abbreviation: "C",
    weights: &[("H", 0.56), ("L", 0.22), ("N", 0.0)],
};

pub(crate) const INTEGRITY: MetricDef = MetricDef {
    abbreviation: "I",
    weights: &[("H", 0.56), ("L", 0.22), ("N", 0.0)],
};

pub(crate) const AVAILABILITY: MetricDef = MetricDef {
    abbreviation: "A",
    weights: &[("H", 0.56), ("L", 0.22), ("N", 0.0)],
};

/// Privileges Required weight, resolved against the effective scope.
pub(crate) fn privileges_required_weight(code: &str, scope_changed: bool) -> Option<f64> {
    let weight = match (code, scope_changed) {
        ("N", _) => 0.85,
        ("L", false) => 0.62,
        ("L", true) => 0.68,
        ("H", false) => 0.27,
        ("H", true) => 0.5,
        _ => return None,
    };
    Some(weight)
}

pub(crate) const EXPLOIT_CODE_MATURITY: MetricDef = MetricDef {
    abbreviation: "E",
    weights: &[("X", 1.0), ("H", 1.0), ("F", 0.97), ("P", 0.94), ("U", 0.91)],
};

pub(crate) const REMEDIATION_LEVEL: MetricDef = MetricDef {
    abbreviation: "RL",
    weights: &[("X", 1.0), ("U", 1.0), ("W", 0.97), ("T", 0.96), ("O", 0.95)],
};

pub(crate) const REPORT_CONFIDENCE: MetricDef = MetricDef {
    abbreviation: "RC",
    weights: &[("X", 1.0), ("C", 1.0), ("R", 0.96), ("U", 0.92)],
};

pub(crate) const CONFIDENTIALITY_REQUIREMENT: MetricDef = MetricDef {
    abbreviation: "CR",
    weights: &[("X", 1.0), ("H", 1.5), ("M", 1.0), ("L", 0.5)],
};

pub(crate) const INTEGRITY_REQUIREMENT: MetricDef = MetricDef {
    abbreviation: "IR",
    weights: &[("X", 1.0), ("H", 1.5), ("M", 1.0), ("L", 0.5)],
};

pub(crate) const AVAILABILITY_REQUIREMENT: MetricDef = MetricDef {
    abbreviation: "AR",
    weights: &[("X", 1.0), ("H", 1.5), ("M", 1.0), ("L", 0.5)],
};

pub(crate) const MODIFIED_ATTACK_VECTOR: MetricDef = MetricDef {
    abbreviation: "MAV",
    weights: &[("X", 1.0), ("N", 0.85), ("A", 0.62), ("L", 0.55), ("P", 0.2)],
};

pub(crate) const MODIFIED_ATTACK_COMPLEXITY: MetricDef = MetricDef {
    abbreviation: "MAC",
    weights: &[("X", 1.0), ("L", 0.77), ("H", 0.44)],
};

pub(crate) const MODIFIED_PRIVILEGES_REQUIRED: MetricDef = MetricDef {
    abbreviation: "MPR",
    weights: &[("X", 1.0), ("N", 0.85), ("L", 0.62), ("H", 0.27)],
};

pub(crate) const MODIFIED_USER_INTERACTION: MetricDef = MetricDef {
    abbreviation: "MUI",
    weights: &[("X", 1.0), ("N", 0.85), ("R", 0.62)],
};

pub(crate) const MODIFIED_SCOPE: MetricDef = MetricDef {
    abbreviation: "MS",
    weights: &[("X", 0.0), ("U", 0.0), ("C", 0.0)],
};

pub(crate) const MODIFIED_CONFIDENTIALITY: MetricDef = MetricDef {
    abbreviation: "MC",
    weights: &[("X", 1.0), ("H", 0.56), ("L", 0.22), ("N", 0.0)],
};

pub(crate) const MODIFIED_INTEGRITY: MetricDef = MetricDef {
    abbreviation: "MI",
    weights: &[("X", 1.0), ("H", 0.56), ("L", 0.22), ("N", 0.0)],
};

pub(crate) const MODIFIED_AVAILABILITY: MetricDef = MetricDef {
    abbreviation: "MA",
    weights: &[("X", 1.0), ("H", 0.56), ("L", 0.22), ("N", 0.0)],
};
