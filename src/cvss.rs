//! Version-dispatched scoring
//!
//! Callers that know the version construct `Cvss2`/`Cvss3`/`Cvss31`
//! directly; callers holding a raw string use [`Cvss::from_vector`], which
//! keys on the `CVSS:<version>/` prefix. The enum is the closed set of
//! supported engines and only dispatches — every formula stays inside its
//! version's module.

use crate::error::CvssError;
use crate::severity::Severity;
use crate::v2::Cvss2;
use crate::v30::Cvss3;
use crate::v31::Cvss31;
use crate::version::CvssVersion;
use log::debug;

/// A CVSS vector scored by whichever engine its prefix selects.
///
/// # Examples
///
/// ```rust
/// use cvsscore::{Cvss, Severity};
///
/// let cvss = Cvss::from_vector("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H")?;
/// assert_eq!(cvss.version().as_str(), "3.1");
/// assert_eq!(cvss.overall_score()?, 9.8);
/// assert_eq!(cvss.severity()?, Severity::Critical);
/// # Ok::<(), cvsscore::CvssError>(())
/// ```
#[derive(Debug, Clone)]
pub enum Cvss {
    V2(Cvss2),
    V30(Cvss3),
    V31(Cvss31),
}

impl Cvss {
    /// Construct the engine matching the vector's `CVSS:<version>/` prefix.
    ///
    /// `3.0` and `3.1` prefixes select their engines; a `2.0` prefix or no
    /// prefix selects v2, since v2 vectors are published unprefixed. Any
    /// other prefixed version is refused — version inference beyond the
    /// explicit prefix is out of scope. The prefix token itself stays in
    /// the vector as an inert property belonging to no metric group.
    pub fn from_vector(vector: &str) -> Result<Self, CvssError> {
        let engine = match prefixed_version(vector) {
            Some("3.1") => Cvss::V31(Cvss31::new(vector)),
            Some("3.0") => Cvss::V30(Cvss3::new(vector)),
            Some("2.0") | None => Cvss::V2(Cvss2::new(vector)),
            Some(other) => {
                debug!("refusing vector with unsupported version prefix {other}");
                return Err(CvssError::UnsupportedVersion {
                    version: other.to_string(),
                });
            }
        };
        Ok(engine)
    }

    /// The original vector string.
    pub fn vector(&self) -> &str {
        match self {
            Cvss::V2(cvss) => cvss.vector(),
            Cvss::V30(cvss) => cvss.vector(),
            Cvss::V31(cvss) => cvss.vector(),
        }
    }

    pub fn version(&self) -> CvssVersion {
        match self {
            Cvss::V2(cvss) => cvss.version(),
            Cvss::V30(cvss) => cvss.version(),
            Cvss::V31(cvss) => cvss.version(),
        }
    }

    /// Whether the vector can be scored.
    pub fn is_valid(&self) -> bool {
        match self {
            Cvss::V2(cvss) => cvss.is_valid(),
            Cvss::V30(cvss) => cvss.is_valid(),
            Cvss::V31(cvss) => cvss.is_valid(),
        }
    }

    /// Base score, rounded to one decimal.
    pub fn base_score(&self) -> Result<f64, CvssError> {
        match self {
            Cvss::V2(cvss) => cvss.base_score(),
            Cvss::V30(cvss) => cvss.base_score(),
            Cvss::V31(cvss) => cvss.base_score(),
        }
    }

    /// Temporal score.
    pub fn temporal_score(&self) -> Result<f64, CvssError> {
        match self {
            Cvss::V2(cvss) => cvss.temporal_score(),
            Cvss::V30(cvss) => cvss.temporal_score(),
            Cvss::V31(cvss) => cvss.temporal_score(),
        }
    }

    /// Environmental score.
    pub fn environmental_score(&self) -> Result<f64, CvssError> {
        match self {
            Cvss::V2(cvss) => cvss.environmental_score(),
            Cvss::V30(cvss) => cvss.environmental_score(),
            Cvss::V31(cvss) => cvss.environmental_score(),
        }
    }

    /// The score a consumer should report: environmental when present, else
    /// temporal, else base.
    pub fn overall_score(&self) -> Result<f64, CvssError> {
        match self {
            Cvss::V2(cvss) => cvss.overall_score(),
            Cvss::V30(cvss) => cvss.overall_score(),
            Cvss::V31(cvss) => cvss.overall_score(),
        }
    }

    /// Severity bucket of the overall score.
    pub fn severity(&self) -> Result<Severity, CvssError> {
        match self {
            Cvss::V2(cvss) => cvss.severity(),
            Cvss::V30(cvss) => cvss.severity(),
            Cvss::V31(cvss) => cvss.severity(),
        }
    }
}

/// The version named by a `CVSS:<version>/` prefix, if any.
fn prefixed_version(vector: &str) -> Option<&str> {
    let rest = vector.strip_prefix("CVSS:")?;
    rest.split('/').next()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_selects_the_engine() {
        let cvss = Cvss::from_vector("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
        assert_eq!(cvss.version(), CvssVersion::V31);

        let cvss = Cvss::from_vector("CVSS:3.0/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
        assert_eq!(cvss.version(), CvssVersion::V30);
    }

    #[test]
    fn unprefixed_vectors_go_to_v2() {
        let cvss = Cvss::from_vector("AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
        assert_eq!(cvss.version(), CvssVersion::V2);
    }

    #[test]
    fn explicit_v2_prefix_is_accepted() {
        let cvss = Cvss::from_vector("CVSS:2.0/AV:N/AC:L/Au:N/C:C/I:C/A:C").unwrap();
        assert_eq!(cvss.version(), CvssVersion::V2);
        assert!(cvss.is_valid());
    }

    #[test]
    fn unknown_prefixed_versions_are_refused() {
        let err = Cvss::from_vector("CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N").unwrap_err();
        assert_eq!(
            err,
            CvssError::UnsupportedVersion {
                version: "4.0".to_string()
            }
        );
    }
}
