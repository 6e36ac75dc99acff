//! Metric table primitives
//!
//! Each CVSS version owns `const` tables of [`MetricDef`] entries: one per
//! metric abbreviation, each listing the finite set of value codes the
//! version recognizes and the numeric weight published for each code. The
//! lookups here are shared; the tables themselves live with their version.

use crate::vector::PropertySet;

/// Allowed value codes and their weights for one metric abbreviation
#[derive(Debug, Clone, Copy)]
pub(crate) struct MetricDef {
    pub abbreviation: &'static str,
    pub weights: &'static [(&'static str, f64)],
}

impl MetricDef {
    /// Resolve the vector's value for this metric to its canonical code.
    ///
    /// Returns `None` when the metric is absent from the vector or carries a
    /// code outside the allowed set — both count as "not recognized" and feed
    /// group invalidity, never a crash or a default weight.
    pub fn recognize(&self, properties: &PropertySet) -> Option<&'static str> {
        let value = properties.value_of(self.abbreviation)?;
        self.weights
            .iter()
            .find(|(code, _)| *code == value)
            .map(|(code, _)| *code)
    }

    /// The weight published for a recognized code.
    pub fn weight_of(&self, code: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, weight)| *weight)
    }
}
