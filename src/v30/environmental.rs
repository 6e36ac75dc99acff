//! Environmental metric group for v3.0 vectors

use super::base::BaseMetrics;
use super::metrics;
use super::rounding;
use super::temporal::TemporalMetrics;
use crate::vector::PropertySet;

/// The eleven environmental metrics of a v3.0 vector.
#[derive(Debug, Clone)]
pub(crate) struct EnvironmentalMetrics {
    confidentiality_requirement: Option<&'static str>,
    integrity_requirement: Option<&'static str>,
    availability_requirement: Option<&'static str>,
    modified_attack_vector: Option<&'static str>,
    modified_attack_complexity: Option<&'static str>,
    modified_privileges_required: Option<&'static str>,
    modified_user_interaction: Option<&'static str>,
    modified_scope: Option<&'static str>,
    modified_confidentiality: Option<&'static str>,
    modified_integrity: Option<&'static str>,
    modified_availability: Option<&'static str>,
}

impl EnvironmentalMetrics {
    pub(crate) fn from_properties(properties: &PropertySet) -> Self {
        Self {
            confidentiality_requirement: metrics::CONFIDENTIALITY_REQUIREMENT
                .recognize(properties),
            integrity_requirement: metrics::INTEGRITY_REQUIREMENT.recognize(properties),
            availability_requirement: metrics::AVAILABILITY_REQUIREMENT.recognize(properties),
            modified_attack_vector: metrics::MODIFIED_ATTACK_VECTOR.recognize(properties),
            modified_attack_complexity: metrics::MODIFIED_ATTACK_COMPLEXITY
                .recognize(properties),
            modified_privileges_required: metrics::MODIFIED_PRIVILEGES_REQUIRED
                .recognize(properties),
            modified_user_interaction: metrics::MODIFIED_USER_INTERACTION.recognize(properties),
            modified_scope: metrics::MODIFIED_SCOPE.recognize(properties),
            modified_confidentiality: metrics::MODIFIED_CONFIDENTIALITY.recognize(properties),
            modified_integrity: metrics::MODIFIED_INTEGRITY.recognize(properties),
            modified_availability: metrics::MODIFIED_AVAILABILITY.recognize(properties),
        }
    }

    /// All eleven metrics present with recognized codes (X counts).
    pub(crate) fn is_valid(&self) -> bool {
        self.confidentiality_requirement.is_some()
            && self.integrity_requirement.is_some()
            && self.availability_requirement.is_some()
            && self.modified_attack_vector.is_some()
            && self.modified_attack_complexity.is_some()
            && self.modified_privileges_required.is_some()
            && self.modified_user_interaction.is_some()
            && self.modified_scope.is_some()
            && self.modified_confidentiality.is_some()
            && self.modified_integrity.is_some()
            && self.modified_availability.is_some()
    }

    /// Unrounded environmental score per the v3.0 equations.
    ///
    /// The changed-scope Modified Impact keeps the base equation's exponent
    /// 15 form; v3.1 later retuned it. Overrides left X inherit the base
    /// metric, and Modified Privileges Required is weighted against the
    /// *modified* scope.
    pub(crate) fn score(
        &self,
        base: &BaseMetrics,
        temporal: &TemporalMetrics,
    ) -> Option<f64> {
        let scope_changed = resolve(self.modified_scope, base.scope())? == "C";

        let cr = metrics::CONFIDENTIALITY_REQUIREMENT
            .weight_of(self.confidentiality_requirement?)?;
        let ir = metrics::INTEGRITY_REQUIREMENT.weight_of(self.integrity_requirement?)?;
        let ar = metrics::AVAILABILITY_REQUIREMENT.weight_of(self.availability_requirement?)?;
        let mc = metrics::CONFIDENTIALITY
            .weight_of(resolve(self.modified_confidentiality, base.confidentiality())?)?;
        let mi = metrics::INTEGRITY.weight_of(resolve(self.modified_integrity, base.integrity())?)?;
        let ma = metrics::AVAILABILITY
            .weight_of(resolve(self.modified_availability, base.availability())?)?;

        let miss =
            (1.0 - (1.0 - cr * mc) * (1.0 - ir * mi) * (1.0 - ar * ma)).min(0.915);
        let modified_impact = if scope_changed {
            7.52 * (miss - 0.029) - 3.25 * (miss - 0.02).powi(15)
        } else {
            6.42 * miss
        };
        if modified_impact <= 0.0 {
            return Some(0.0);
        }

        let mav = metrics::ATTACK_VECTOR
            .weight_of(resolve(self.modified_attack_vector, base.attack_vector())?)?;
        let mac = metrics::ATTACK_COMPLEXITY
            .weight_of(resolve(self.modified_attack_complexity, base.attack_complexity())?)?;
        let mpr = metrics::privileges_required_weight(
            resolve(self.modified_privileges_required, base.privileges_required())?,
            scope_changed,
        )?;
        let mui = metrics::USER_INTERACTION
            .weight_of(resolve(self.modified_user_interaction, base.user_interaction())?)?;
        let modified_exploitability = 8.22 * mav * mac * mpr * mui;

        let combined = modified_impact + modified_exploitability;
        let combined = if scope_changed {
            (1.08 * combined).min(10.0)
        } else {
            combined.min(10.0)
        };
        Some(rounding::round_up(combined) * temporal.multiplier())
    }
}

/// An override left X inherits the base metric's code.
fn resolve(
    modified: Option<&'static str>,
    base: Option<&'static str>,
) -> Option<&'static str> {
    match modified? {
        "X" => base,
        code => Some(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(vector: &str) -> (BaseMetrics, TemporalMetrics, EnvironmentalMetrics) {
        let props = PropertySet::extract(vector);
        (
            BaseMetrics::from_properties(&props),
            TemporalMetrics::from_properties(&props),
            EnvironmentalMetrics::from_properties(&props),
        )
    }

    #[test]
    fn all_not_defined_reproduces_the_base_score() {
        let vector = "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/\
                      CR:X/IR:X/AR:X/MAV:X/MAC:X/MPR:X/MUI:X/MS:X/MC:X/MI:X/MA:X";
        let (base, temporal, env) = groups(vector);
        let score = env.score(&base, &temporal).unwrap();
        assert_eq!(rounding::round_up(score), 9.8);
    }

    #[test]
    fn zeroed_modified_impact_scores_zero() {
        let vector = "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/\
                      CR:X/IR:X/AR:X/MAV:X/MAC:X/MPR:X/MUI:X/MS:X/MC:N/MI:N/MA:N";
        let (base, temporal, env) = groups(vector);
        assert_eq!(env.score(&base, &temporal), Some(0.0));
    }

    #[test]
    fn partial_group_is_invalid() {
        let (_, _, env) = groups("CR:H/IR:M");
        assert!(!env.is_valid());
    }
}
