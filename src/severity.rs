//! Qualitative severity buckets
//!
//! The score-to-bucket mapping is the one piece of scoring logic shared by
//! every CVSS version: all engines rate on the same 0.0-10.0 scale and use
//! the same published bucket boundaries.

use serde::{Deserialize, Serialize};

/// Qualitative severity rating derived from a numeric CVSS score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Map a numeric score to its severity bucket.
    ///
    /// Boundaries follow the published qualitative rating scale: None for
    /// 0.0, Low up to 3.9, Medium up to 6.9, High up to 8.9, Critical up to
    /// 10.0. Scores outside [0.0, 10.0] are unreachable from the scoring
    /// engines and map to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cvsscore::Severity;
    ///
    /// assert_eq!(Severity::from_score(9.8), Severity::Critical);
    /// assert_eq!(Severity::from_score(0.0), Severity::None);
    /// ```
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s <= 0.0 => Severity::None,
            s if s < 4.0 => Severity::Low,
            s if s < 7.0 => Severity::Medium,
            s if s < 9.0 => Severity::High,
            s if s <= 10.0 => Severity::Critical,
            _ => Severity::None,
        }
    }

    /// Get display label
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
