//! Temporal metric group for v2.0 vectors

use super::metrics;
use crate::metrics::MetricDef;
use crate::vector::PropertySet;

/// The three temporal metrics of a v2.0 vector.
#[derive(Debug, Clone)]
pub(crate) struct TemporalMetrics {
    exploitability: Option<&'static str>,
    remediation_level: Option<&'static str>,
    report_confidence: Option<&'static str>,
}

impl TemporalMetrics {
    pub(crate) fn from_properties(properties: &PropertySet) -> Self {
        Self {
            exploitability: metrics::EXPLOITABILITY.recognize(properties),
            remediation_level: metrics::REMEDIATION_LEVEL.recognize(properties),
            report_confidence: metrics::REPORT_CONFIDENCE.recognize(properties),
        }
    }

    /// All three metrics present with recognized codes (ND counts).
    pub(crate) fn is_valid(&self) -> bool {
        self.exploitability.is_some()
            && self.remediation_level.is_some()
            && self.report_confidence.is_some()
    }

    /// Product of the temporal weights; absent or unrecognized metrics
    /// resolve to the neutral Not Defined weight.
    pub(crate) fn multiplier(&self) -> f64 {
        weight_or_neutral(&metrics::EXPLOITABILITY, self.exploitability)
            * weight_or_neutral(&metrics::REMEDIATION_LEVEL, self.remediation_level)
            * weight_or_neutral(&metrics::REPORT_CONFIDENCE, self.report_confidence)
    }
}

fn weight_or_neutral(def: &MetricDef, code: Option<&'static str>) -> f64 {
    code.and_then(|c| def.weight_of(c)).unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temporal(vector: &str) -> TemporalMetrics {
        TemporalMetrics::from_properties(&PropertySet::extract(vector))
    }

    #[test]
    fn multi_letter_codes_are_recognized() {
        let group = temporal("E:POC/RL:OF/RC:UC");
        assert!(group.is_valid());
        assert!((group.multiplier() - 0.9 * 0.87 * 0.9).abs() < 1e-12);
    }

    #[test]
    fn partial_group_is_invalid() {
        assert!(!temporal("E:F").is_valid());
    }
}
