//! CVSS v2.0 metric tables
//!
//! Weights are taken verbatim from the CVSS v2 guide (first.org, section
//! 3.2.1). v2 spells its Not Defined sentinel ND; for the temporal and
//! requirement metrics it weighs the neutral 1.0, for Collateral Damage
//! Potential it weighs 0.

use crate::metrics::MetricDef;

/// Metrics a vector must carry for its base group to be valid.
pub(crate) const BASE_METRIC_COUNT: usize = 6;

pub(crate) const ACCESS_VECTOR: MetricDef = MetricDef {
    abbreviation: "AV",
    weights: &[("L", 0.395), ("A", 0.646), ("N", 1.0)],
};

pub(crate) const ACCESS_COMPLEXITY: MetricDef = MetricDef {
    abbreviation: "AC",
    weights: &[("H", 0.35), ("M", 0.61), ("L", 0.71)],
};

pub(crate) const AUTHENTICATION: MetricDef = MetricDef {
    abbreviation: "Au",
    weights: &[("M", 0.45), ("S", 0.56), ("N", 0.704)],
};

pub(crate) const CONFIDENTIALITY: MetricDef = MetricDef {
    abbreviation: "C",
    weights: &[("N", 0.0), ("P", 0.275), ("C", 0.660)],
};

pub(crate) const INTEGRITY: MetricDef = MetricDef {
    abbreviation: "I",
    weights: &[("N", 0.0), ("P", 0.275), ("C", 0.660)],
};

pub(crate) const AVAILABILITY: MetricDef = MetricDef {
    abbreviation: "A",
    weights: &[("N", 0.0), ("P", 0.275), ("C", 0.660)],
};

pub(crate) const EXPLOITABILITY: MetricDef = MetricDef {
    abbreviation: "E",
    weights: &[
        ("ND", 1.0),
        ("U", 0.85),
        ("POC", 0.9),
        ("F", 0.95),
        ("H", 1.0),
    ],
};

pub(crate) const REMEDIATION_LEVEL: MetricDef = MetricDef {
    abbreviation: "RL",
    weights: &[
        ("ND", 1.0),
        ("OF", 0.87),
        ("TF", 0.9),
        ("W", 0.95),
        ("U", 1.0),
    ],
};

pub(crate) const REPORT_CONFIDENCE: MetricDef = MetricDef {
    abbreviation: "RC",
    weights: &[("ND", 1.0), ("UC", 0.9), ("UR", 0.95), ("C", 1.0)],
};

pub(crate) const COLLATERAL_DAMAGE_POTENTIAL: MetricDef = MetricDef {
    abbreviation: "CDP",
    weights: &[
        ("ND", 0.0),
        ("N", 0.0),
        ("L", 0.1),
        ("LM", 0.3),
        ("MH", 0.4),
        ("H", 0.5),
    ],
};

pub(crate) const TARGET_DISTRIBUTION: MetricDef = MetricDef {
    abbreviation: "TD",
    weights: &[
        ("ND", 1.0),
        ("N", 0.0),
        ("L", 0.25),
        ("M", 0.75),
        ("H", 1.0),
    ],
};

pub(crate) const CONFIDENTIALITY_REQUIREMENT: MetricDef = MetricDef {
    abbreviation: "CR",
    weights: &[("ND", 1.0), ("L", 0.5), ("M", 1.0), ("H", 1.51)],
};

pub(crate) const INTEGRITY_REQUIREMENT: MetricDef = MetricDef {
    abbreviation: "IR",
    weights: &[("ND", 1.0), ("L", 0.5), ("M", 1.0), ("H", 1.51)],
};

pub(crate) const AVAILABILITY_REQUIREMENT: MetricDef = MetricDef {
    abbreviation: "AR",
    weights: &[("ND", 1.0), ("L", 0.5), ("M", 1.0), ("H", 1.51)],
};
