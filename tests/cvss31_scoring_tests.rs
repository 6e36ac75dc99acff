//! CVSS v3.1 reference-vector tests
//!
//! Expected values are the scores the official first.org v3.1 calculator
//! publishes for these vectors.

use cvsscore::{Cvss31, Severity};

#[test]
fn network_critical_base_vector_scores_9_8() {
    let cvss = Cvss31::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H");
    assert!(cvss.is_valid());
    assert_eq!(cvss.base_score().unwrap(), 9.8);
    assert_eq!(cvss.overall_score().unwrap(), 9.8);
    assert_eq!(cvss.severity().unwrap(), Severity::Critical);
}

#[test]
fn local_privilege_escalation_scores_7_8() {
    let cvss = Cvss31::new("AV:L/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:H");
    assert_eq!(cvss.base_score().unwrap(), 7.8);
    assert_eq!(cvss.severity().unwrap(), Severity::High);
}

#[test]
fn changed_scope_low_privileges_scores_9_9() {
    let cvss = Cvss31::new("AV:N/AC:L/PR:L/UI:N/S:C/C:H/I:H/A:H");
    assert_eq!(cvss.base_score().unwrap(), 9.9);
    assert_eq!(cvss.severity().unwrap(), Severity::Critical);
}

#[test]
fn reflected_xss_scores_6_1() {
    let cvss = Cvss31::new("AV:N/AC:L/PR:N/UI:R/S:C/C:L/I:L/A:N");
    assert_eq!(cvss.base_score().unwrap(), 6.1);
    assert_eq!(cvss.severity().unwrap(), Severity::Medium);
}

#[test]
fn zero_impact_vector_scores_0_0() {
    let cvss = Cvss31::new("AV:N/AC:L/PR:N/UI:N/S:U/C:N/I:N/A:N");
    assert_eq!(cvss.base_score().unwrap(), 0.0);
    assert_eq!(cvss.severity().unwrap(), Severity::None);
}

#[test]
fn metric_order_does_not_matter() {
    let ordered = Cvss31::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H");
    let shuffled = Cvss31::new("A:H/C:H/S:U/I:H/UI:N/PR:N/AC:L/AV:N");
    assert_eq!(
        ordered.base_score().unwrap(),
        shuffled.base_score().unwrap()
    );
}

#[test]
fn temporal_vector_overall_is_the_temporal_score() {
    let cvss = Cvss31::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:H/RL:O/RC:C");
    let base = cvss.base_score().unwrap();
    let temporal = cvss.temporal_score().unwrap();
    assert_eq!(temporal, 9.4);
    assert_eq!(cvss.overall_score().unwrap(), temporal);
    assert!(temporal <= base);
}

#[test]
fn temporal_not_defined_codes_leave_the_score_unchanged() {
    let cvss = Cvss31::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:X/RL:X/RC:X");
    assert_eq!(cvss.temporal_score().unwrap(), 9.8);
    assert_eq!(cvss.overall_score().unwrap(), 9.8);
}

#[test]
fn partial_temporal_group_falls_back_to_base() {
    // E alone leaves the temporal group incomplete: the multiplier is still
    // queryable, but overall must skip the group entirely.
    let cvss = Cvss31::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:F");
    assert_eq!(cvss.temporal_score().unwrap(), 9.6);
    assert_eq!(cvss.overall_score().unwrap(), 9.8);
}

#[test]
fn environmental_all_not_defined_matches_base() {
    let cvss = Cvss31::new(
        "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/\
         CR:X/IR:X/AR:X/MAV:X/MAC:X/MPR:X/MUI:X/MS:X/MC:X/MI:X/MA:X",
    );
    assert_eq!(cvss.environmental_score().unwrap(), 9.8);
    assert_eq!(cvss.overall_score().unwrap(), 9.8);
}

#[test]
fn environmental_overrides_rescore_the_vector() {
    let cvss = Cvss31::new(
        "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/\
         CR:H/IR:M/AR:L/MAV:N/MAC:L/MPR:N/MUI:N/MS:U/MC:L/MI:L/MA:N",
    );
    assert_eq!(cvss.environmental_score().unwrap(), 7.0);
    assert_eq!(cvss.overall_score().unwrap(), 7.0);
    assert_eq!(cvss.severity().unwrap(), Severity::High);
}

#[test]
fn environmental_takes_precedence_over_temporal() {
    let cvss = Cvss31::new(
        "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:H/RL:O/RC:C/\
         CR:H/IR:M/AR:L/MAV:N/MAC:L/MPR:N/MUI:N/MS:U/MC:L/MI:L/MA:N",
    );
    // Environmental consumes the temporal multiplier (0.95) after its own
    // rounding step: roundup(7.0 * 0.95) = 6.7.
    assert_eq!(cvss.environmental_score().unwrap(), 6.7);
    assert_eq!(cvss.overall_score().unwrap(), 6.7);
}

#[test]
fn partial_environmental_group_falls_back_to_temporal() {
    let cvss = Cvss31::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:H/RL:O/RC:C/CR:H");
    assert_eq!(cvss.environmental_score().unwrap(), 9.4);
    assert_eq!(cvss.overall_score().unwrap(), 9.4);
}

#[test]
fn version_reports_3_1() {
    let cvss = Cvss31::new("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H");
    assert_eq!(cvss.version().as_f64(), 3.1);
    assert_eq!(cvss.version().as_str(), "3.1");
}

#[test]
fn vector_accessor_returns_the_input() {
    let vector = "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H";
    assert_eq!(Cvss31::new(vector).vector(), vector);
}
