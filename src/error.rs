//! Shared error types for the crate

use thiserror::Error;

/// Main error type for cvsscore operations
///
/// Malformed tokens, unknown metrics, and duplicate metric names are never
/// surfaced here; they make the vector fail validation instead. Scoring and
/// severity queries on an invalid vector are the only library operations
/// that return `InvalidVector`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvssError {
    /// The vector failed validation and cannot be scored
    #[error("vector is not valid")]
    InvalidVector,

    /// The vector carries a `CVSS:<version>/` prefix with no matching engine
    #[error("unsupported CVSS version: {version}")]
    UnsupportedVersion { version: String },
}
