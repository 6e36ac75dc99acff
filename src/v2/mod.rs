//! CVSS v2.0 scoring engine

mod base;
mod environmental;
mod metrics;
mod rounding;
mod temporal;

use crate::error::CvssError;
use crate::severity::Severity;
use crate::vector::PropertySet;
use crate::version::CvssVersion;
use base::BaseMetrics;
use environmental::EnvironmentalMetrics;
use temporal::TemporalMetrics;

/// A CVSS v2.0 vector and its scoring engine.
///
/// v2 vectors carry no `CVSS:` prefix and are often published wrapped in
/// parentheses (`(AV:N/AC:L/Au:N/C:N/I:N/A:C)`); one surrounding pair is
/// stripped before extraction. Construction never fails; an unparseable
/// vector produces an engine that reports `is_valid() == false` and returns
/// [`CvssError::InvalidVector`] from every scoring query.
#[derive(Debug, Clone)]
pub struct Cvss2 {
    vector: String,
    properties: PropertySet,
    base: BaseMetrics,
    temporal: TemporalMetrics,
    environmental: EnvironmentalMetrics,
}

impl Cvss2 {
    /// Parse a vector string into a scoring engine.
    pub fn new(vector: &str) -> Self {
        let payload = vector
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(vector);
        let properties = PropertySet::extract(payload);
        let base = BaseMetrics::from_properties(&properties);
        let temporal = TemporalMetrics::from_properties(&properties);
        let environmental = EnvironmentalMetrics::from_properties(&properties);
        Self {
            vector: vector.to_string(),
            properties,
            base,
            temporal,
            environmental,
        }
    }

    /// The original vector string, parentheses included if given.
    pub fn vector(&self) -> &str {
        &self.vector
    }

    pub fn version(&self) -> CvssVersion {
        CvssVersion::V2
    }

    /// Whether the vector can be scored: enough tokens for the six base
    /// metrics, and a complete base group.
    pub fn is_valid(&self) -> bool {
        self.properties.token_count() >= metrics::BASE_METRIC_COUNT && self.base.is_valid()
    }

    /// Base score, rounded to one decimal.
    pub fn base_score(&self) -> Result<f64, CvssError> {
        Ok(rounding::round_to_tenth(self.raw_base_score()?))
    }

    /// Temporal score: the rounded base score scaled by the temporal
    /// multiplier, rounded again.
    pub fn temporal_score(&self) -> Result<f64, CvssError> {
        let base_score = rounding::round_to_tenth(self.raw_base_score()?);
        Ok(rounding::round_to_tenth(
            base_score * self.temporal.multiplier(),
        ))
    }

    /// Environmental score, falling back to the temporal score when the
    /// environmental group is not fully specified.
    pub fn environmental_score(&self) -> Result<f64, CvssError> {
        self.check_validity()?;
        if !self.environmental.is_valid() {
            return self.temporal_score();
        }
        let score = self
            .environmental
            .score(&self.base, &self.temporal)
            .ok_or(CvssError::InvalidVector)?;
        Ok(rounding::round_to_tenth(score))
    }

    /// The score a consumer should report: environmental when present, else
    /// temporal, else base.
    pub fn overall_score(&self) -> Result<f64, CvssError> {
        self.check_validity()?;
        if self.environmental.is_valid() {
            return self.environmental_score();
        }
        if self.temporal.is_valid() {
            return self.temporal_score();
        }
        self.base_score()
    }

    /// Severity bucket of the overall score.
    pub fn severity(&self) -> Result<Severity, CvssError> {
        Ok(Severity::from_score(self.overall_score()?))
    }

    fn raw_base_score(&self) -> Result<f64, CvssError> {
        self.check_validity()?;
        self.base.score().ok_or(CvssError::InvalidVector)
    }

    fn check_validity(&self) -> Result<(), CvssError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CvssError::InvalidVector)
        }
    }
}
