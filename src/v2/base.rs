//! Base metric group for v2.0 vectors

use super::metrics;
use crate::vector::PropertySet;

/// The six required base metrics of a v2.0 vector.
#[derive(Debug, Clone)]
pub(crate) struct BaseMetrics {
    access_vector: Option<&'static str>,
    access_complexity: Option<&'static str>,
    authentication: Option<&'static str>,
    confidentiality: Option<&'static str>,
    integrity: Option<&'static str>,
    availability: Option<&'static str>,
}

impl BaseMetrics {
    pub(crate) fn from_properties(properties: &PropertySet) -> Self {
        Self {
            access_vector: metrics::ACCESS_VECTOR.recognize(properties),
            access_complexity: metrics::ACCESS_COMPLEXITY.recognize(properties),
            authentication: metrics::AUTHENTICATION.recognize(properties),
            confidentiality: metrics::CONFIDENTIALITY.recognize(properties),
            integrity: metrics::INTEGRITY.recognize(properties),
            availability: metrics::AVAILABILITY.recognize(properties),
        }
    }

    /// All six metrics present with recognized codes.
    pub(crate) fn is_valid(&self) -> bool {
        self.access_vector.is_some()
            && self.access_complexity.is_some()
            && self.authentication.is_some()
            && self.confidentiality.is_some()
            && self.integrity.is_some()
            && self.availability.is_some()
    }

    /// Unrounded base score per the v2 equations:
    /// `((0.6 * Impact) + (0.4 * Exploitability) - 1.5) * f(Impact)`.
    pub(crate) fn score(&self) -> Option<f64> {
        let impact = self.impact()?;
        let exploitability = self.exploitability()?;
        Some((0.6 * impact + 0.4 * exploitability - 1.5) * f_impact(impact))
    }

    /// `10.41 * (1 - (1-C)(1-I)(1-A))`
    pub(crate) fn impact(&self) -> Option<f64> {
        let c = self.confidentiality_weight()?;
        let i = self.integrity_weight()?;
        let a = self.availability_weight()?;
        Some(10.41 * (1.0 - (1.0 - c) * (1.0 - i) * (1.0 - a)))
    }

    /// `20 * AccessVector * AccessComplexity * Authentication`
    pub(crate) fn exploitability(&self) -> Option<f64> {
        let av = metrics::ACCESS_VECTOR.weight_of(self.access_vector?)?;
        let ac = metrics::ACCESS_COMPLEXITY.weight_of(self.access_complexity?)?;
        let au = metrics::AUTHENTICATION.weight_of(self.authentication?)?;
        Some(20.0 * av * ac * au)
    }

    // Impact weights the environmental group rescales with the security
    // requirements.
    pub(crate) fn confidentiality_weight(&self) -> Option<f64> {
        metrics::CONFIDENTIALITY.weight_of(self.confidentiality?)
    }

    pub(crate) fn integrity_weight(&self) -> Option<f64> {
        metrics::INTEGRITY.weight_of(self.integrity?)
    }

    pub(crate) fn availability_weight(&self) -> Option<f64> {
        metrics::AVAILABILITY.weight_of(self.availability?)
    }
}

/// The v2 impact factor: zero impact zeroes the whole base equation.
pub(crate) fn f_impact(impact: f64) -> f64 {
    if impact <= 0.0 {
        0.0
    } else {
        1.176
    }
}
