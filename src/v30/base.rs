//! Base metric group for v3.0 vectors

use super::metrics;
use crate::vector::PropertySet;

/// The eight required base metrics of a v3.0 vector.
#[derive(Debug, Clone)]
pub(crate) struct BaseMetrics {
    attack_vector: Option<&'static str>,
    attack_complexity: Option<&'static str>,
    privileges_required: Option<&'static str>,
    user_interaction: Option<&'static str>,
    scope: Option<&'static str>,
    confidentiality: Option<&'static str>,
    integrity: Option<&'static str>,
    availability: Option<&'static str>,
}

impl BaseMetrics {
    pub(crate) fn from_properties(properties: &PropertySet) -> Self {
        Self {
            attack_vector: metrics::ATTACK_VECTOR.recognize(properties),
            attack_complexity: metrics::ATTACK_COMPLEXITY.recognize(properties),
            privileges_required: metrics::PRIVILEGES_REQUIRED.recognize(properties),
            user_interaction: metrics::USER_INTERACTION.recognize(properties),
            scope: metrics::SCOPE.recognize(properties),
            confidentiality: metrics::CONFIDENTIALITY.recognize(properties),
            integrity: metrics::INTEGRITY.recognize(properties),
            availability: metrics::AVAILABILITY.recognize(properties),
        }
    }

    /// All eight metrics present with recognized codes.
    pub(crate) fn is_valid(&self) -> bool {
        self.attack_vector.is_some()
            && self.attack_complexity.is_some()
            && self.privileges_required.is_some()
            && self.user_interaction.is_some()
            && self.scope.is_some()
            && self.confidentiality.is_some()
            && self.integrity.is_some()
            && self.availability.is_some()
    }

    /// Unrounded base score per the v3.0 equations.
    pub(crate) fn score(&self) -> Option<f64> {
        let scope_changed = self.scope? == "C";
        let impact = self.impact(scope_changed)?;
        if impact <= 0.0 {
            return Some(0.0);
        }
        let combined = impact + self.exploitability(scope_changed)?;
        Some(if scope_changed {
            (1.08 * combined).min(10.0)
        } else {
            combined.min(10.0)
        })
    }

    fn impact(&self, scope_changed: bool) -> Option<f64> {
        let iss = self.impact_subscore()?;
        Some(if scope_changed {
            7.52 * (iss - 0.029) - 3.25 * (iss - 0.02).powi(15)
        } else {
            6.42 * iss
        })
    }

    fn impact_subscore(&self) -> Option<f64> {
        let c = metrics::CONFIDENTIALITY.weight_of(self.confidentiality?)?;
        let i = metrics::INTEGRITY.weight_of(self.integrity?)?;
        let a = metrics::AVAILABILITY.weight_of(self.availability?)?;
        Some(1.0 - (1.0 - c) * (1.0 - i) * (1.0 - a))
    }

    fn exploitability(&self, scope_changed: bool) -> Option<f64> {
        let av = metrics::ATTACK_VECTOR.weight_of(self.attack_vector?)?;
        let ac = metrics::ATTACK_COMPLEXITY.weight_of(self.attack_complexity?)?;
        let pr = metrics::privileges_required_weight(self.privileges_required?, scope_changed)?;
        let ui = metrics::USER_INTERACTION.weight_of(self.user_interaction?)?;
        Some(8.22 * av * ac * pr * ui)
    }

    // Base codes the environmental group inherits for metrics left X.
    pub(crate) fn attack_vector(&self) -> Option<&'static str> {
        self.attack_vector
    }

    pub(crate) fn attack_complexity(&self) -> Option<&'static str> {
        self.attack_complexity
    }

    pub(crate) fn privileges_required(&self) -> Option<&'static str> {
        self.privileges_required
    }

    pub(crate) fn user_interaction(&self) -> Option<&'static str> {
        self.user_interaction
    }

    pub(crate) fn scope(&self) -> Option<&'static str> {
        self.scope
    }

    pub(crate) fn confidentiality(&self) -> Option<&'static str> {
        self.confidentiality
    }

    pub(crate) fn integrity(&self) -> Option<&'static str> {
        self.integrity
    }

    pub(crate) fn availability(&self) -> Option<&'static str> {
        self.availability
    }
}
