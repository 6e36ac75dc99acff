//! Environmental metric group for v2.0 vectors

use super::base::{f_impact, BaseMetrics};
use super::metrics;
use super::rounding::round_to_tenth;
use super::temporal::TemporalMetrics;
use crate::vector::PropertySet;

/// The five environmental metrics of a v2.0 vector.
#[derive(Debug, Clone)]
pub(crate) struct EnvironmentalMetrics {
    collateral_damage_potential: Option<&'static str>,
    target_distribution: Option<&'static str>,
    confidentiality_requirement: Option<&'static str>,
    integrity_requirement: Option<&'static str>,
    availability_requirement: Option<&'static str>,
}

impl EnvironmentalMetrics {
    pub(crate) fn from_properties(properties: &PropertySet) -> Self {
        Self {
            collateral_damage_potential: metrics::COLLATERAL_DAMAGE_POTENTIAL
                .recognize(properties),
            target_distribution: metrics::TARGET_DISTRIBUTION.recognize(properties),
            confidentiality_requirement: metrics::CONFIDENTIALITY_REQUIREMENT
                .recognize(properties),
            integrity_requirement: metrics::INTEGRITY_REQUIREMENT.recognize(properties),
            availability_requirement: metrics::AVAILABILITY_REQUIREMENT.recognize(properties),
        }
    }

    /// All five metrics present with recognized codes (ND counts).
    pub(crate) fn is_valid(&self) -> bool {
        self.collateral_damage_potential.is_some()
            && self.target_distribution.is_some()
            && self.confidentiality_requirement.is_some()
            && self.integrity_requirement.is_some()
            && self.availability_requirement.is_some()
    }

    /// Unrounded environmental score per the v2 guide:
    /// `(AdjustedTemporal + (10 - AdjustedTemporal) * CDP) * TD`, where
    /// AdjustedTemporal is the temporal score recomputed from a base score
    /// whose impact is rescaled by the security requirements and capped at
    /// 10.
    pub(crate) fn score(
        &self,
        base: &BaseMetrics,
        temporal: &TemporalMetrics,
    ) -> Option<f64> {
        let cdp = metrics::COLLATERAL_DAMAGE_POTENTIAL
            .weight_of(self.collateral_damage_potential?)?;
        let td = metrics::TARGET_DISTRIBUTION.weight_of(self.target_distribution?)?;
        let cr = metrics::CONFIDENTIALITY_REQUIREMENT
            .weight_of(self.confidentiality_requirement?)?;
        let ir = metrics::INTEGRITY_REQUIREMENT.weight_of(self.integrity_requirement?)?;
        let ar = metrics::AVAILABILITY_REQUIREMENT.weight_of(self.availability_requirement?)?;

        let c = base.confidentiality_weight()?;
        let i = base.integrity_weight()?;
        let a = base.availability_weight()?;
        let adjusted_impact =
            (10.41 * (1.0 - (1.0 - c * cr) * (1.0 - i * ir) * (1.0 - a * ar))).min(10.0);

        let exploitability = base.exploitability()?;
        let adjusted_base = round_to_tenth(
            (0.6 * adjusted_impact + 0.4 * exploitability - 1.5) * f_impact(adjusted_impact),
        );
        let adjusted_temporal = round_to_tenth(adjusted_base * temporal.multiplier());

        Some((adjusted_temporal + (10.0 - adjusted_temporal) * cdp) * td)
    }
}
