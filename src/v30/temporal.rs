//! Temporal metric group for v3.0 vectors

use super::metrics;
use crate::metrics::MetricDef;
use crate::vector::PropertySet;

/// The three temporal metrics of a v3.0 vector.
#[derive(Debug, Clone)]
pub(crate) struct TemporalMetrics {
    exploit_code_maturity: Option<&'static str>,
    remediation_level: Option<&'static str>,
    report_confidence: Option<&'static str>,
}

impl TemporalMetrics {
    pub(crate) fn from_properties(properties: &PropertySet) -> Self {
        Self {
            exploit_code_maturity: metrics::EXPLOIT_CODE_MATURITY.recognize(properties),
            remediation_level: metrics::REMEDIATION_LEVEL.recognize(properties),
            report_confidence: metrics::REPORT_CONFIDENCE.recognize(properties),
        }
    }

    /// All three metrics present with recognized codes (X counts).
    pub(crate) fn is_valid(&self) -> bool {
        self.exploit_code_maturity.is_some()
            && self.remediation_level.is_some()
            && self.report_confidence.is_some()
    }

    /// Product of the temporal weights; absent or unrecognized metrics
    /// resolve to the neutral Not Defined weight.
    pub(crate) fn multiplier(&self) -> f64 {
        weight_or_neutral(&metrics::EXPLOIT_CODE_MATURITY, self.exploit_code_maturity)
            * weight_or_neutral(&metrics::REMEDIATION_LEVEL, self.remediation_level)
            * weight_or_neutral(&metrics::REPORT_CONFIDENCE, self.report_confidence)
    }
}

fn weight_or_neutral(def: &MetricDef, code: Option<&'static str>) -> f64 {
    code.and_then(|c| def.weight_of(c)).unwrap_or(1.0)
}
