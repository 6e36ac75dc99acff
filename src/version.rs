//! Supported CVSS specification versions

use serde::{Deserialize, Serialize};

/// The closed set of CVSS versions this crate scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CvssVersion {
    #[serde(rename = "2.0")]
    V2,
    #[serde(rename = "3.0")]
    V30,
    #[serde(rename = "3.1")]
    V31,
}

impl CvssVersion {
    /// Numeric form of the version, e.g. `3.1`
    pub fn as_f64(&self) -> f64 {
        match self {
            CvssVersion::V2 => 2.0,
            CvssVersion::V30 => 3.0,
            CvssVersion::V31 => 3.1,
        }
    }

    /// String form of the version as it appears in vector prefixes
    pub fn as_str(&self) -> &'static str {
        match self {
            CvssVersion::V2 => "2.0",
            CvssVersion::V30 => "3.0",
            CvssVersion::V31 => "3.1",
        }
    }
}

impl std::fmt::Display for CvssVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
