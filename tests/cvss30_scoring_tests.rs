//! CVSS v3.0 reference-vector tests
//!
//! v3.0 shares the v3.1 base and temporal equations; the suites overlap on
//! purpose so a drift in either sibling engine shows up on its own vectors.
//! The divergence tests pin the cases where the two versions disagree.

use cvsscore::{Cvss3, Cvss31, Severity};

#[test]
fn network_critical_base_vector_scores_9_8() {
    let cvss = Cvss3::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H");
    assert!(cvss.is_valid());
    assert_eq!(cvss.base_score().unwrap(), 9.8);
    assert_eq!(cvss.severity().unwrap(), Severity::Critical);
}

#[test]
fn changed_scope_low_privileges_scores_9_9() {
    let cvss = Cvss3::new("AV:N/AC:L/PR:L/UI:N/S:C/C:H/I:H/A:H");
    assert_eq!(cvss.base_score().unwrap(), 9.9);
}

#[test]
fn temporal_vector_scores_9_4() {
    let cvss = Cvss3::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:H/RL:O/RC:C");
    assert_eq!(cvss.temporal_score().unwrap(), 9.4);
    assert_eq!(cvss.overall_score().unwrap(), 9.4);
}

#[test]
fn zero_impact_vector_scores_0_0() {
    let cvss = Cvss3::new("AV:N/AC:L/PR:N/UI:N/S:C/C:N/I:N/A:N");
    assert_eq!(cvss.base_score().unwrap(), 0.0);
    assert_eq!(cvss.severity().unwrap(), Severity::None);
}

#[test]
fn version_reports_3_0() {
    let cvss = Cvss3::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H");
    assert_eq!(cvss.version().as_f64(), 3.0);
}

// A changed modified scope with weak exploitability keeps the environmental
// score under the 10.0 cap, where the v3.0 exponent-15 Modified Impact and
// the v3.1 retuned form land on different tenths.
const DIVERGENT_ENVIRONMENTAL: &str = "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/\
                                       CR:H/IR:H/AR:H/MAV:P/MAC:H/MPR:H/MUI:R/MS:C/MC:H/MI:H/MA:H";

#[test]
fn environmental_uses_the_v30_modified_impact() {
    let cvss = Cvss3::new(DIVERGENT_ENVIRONMENTAL);
    assert_eq!(cvss.environmental_score().unwrap(), 6.8);
    assert_eq!(cvss.overall_score().unwrap(), 6.8);
}

#[test]
fn sibling_engines_diverge_on_the_same_vector() {
    let v30 = Cvss3::new(DIVERGENT_ENVIRONMENTAL);
    let v31 = Cvss31::new(DIVERGENT_ENVIRONMENTAL);
    assert_eq!(v30.environmental_score().unwrap(), 6.8);
    assert_eq!(v31.environmental_score().unwrap(), 6.9);
}
