//! CLI integration tests

use assert_cmd::Command;

fn cvsscore() -> Command {
    Command::cargo_bin("cvsscore").expect("binary builds")
}

#[test]
fn scores_a_vector_argument() {
    let output = cvsscore()
        .args(["score", "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H"])
        .output()
        .expect("command runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("9.8"), "stdout was: {stdout}");
    assert!(stdout.contains("Critical"), "stdout was: {stdout}");
}

#[test]
fn json_format_emits_score_reports() {
    let output = cvsscore()
        .args([
            "score",
            "--format",
            "json",
            "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
        ])
        .output()
        .expect("command runs");
    assert!(output.status.success());

    let reports: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let report = &reports[0];
    assert_eq!(report["version"], "3.1");
    assert_eq!(report["valid"], true);
    assert_eq!(report["overall_score"], 9.8);
    assert_eq!(report["severity"], "Critical");
}

#[test]
fn reads_vectors_from_stdin() {
    let output = cvsscore()
        .arg("score")
        .write_stdin("AV:N/AC:L/Au:N/C:N/I:N/A:C\n")
        .output()
        .expect("command runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("7.8"), "stdout was: {stdout}");
}

#[test]
fn invalid_vectors_exit_nonzero() {
    let output = cvsscore()
        .args(["score", "AV:N"])
        .output()
        .expect("command runs");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid"), "stdout was: {stdout}");
}

#[test]
fn unsupported_versions_exit_nonzero() {
    let output = cvsscore()
        .args(["score", "CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N"])
        .output()
        .expect("command runs");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unsupported CVSS version"),
        "stderr was: {stderr}"
    );
}

#[test]
fn scores_multiple_vectors_in_one_run() {
    let output = cvsscore()
        .args([
            "score",
            "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H",
            "CVSS:3.0/AV:L/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:H",
        ])
        .output()
        .expect("command runs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("9.8"), "stdout was: {stdout}");
    assert!(stdout.contains("7.8"), "stdout was: {stdout}");
}
