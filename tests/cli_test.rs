//! Command-line validation tests run against the compiled binary.

use std::process::Command;

// ── Threshold Flag Tests ──────────────────────────────────────────

#[test]
fn test_high_threshold_over_100_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_slewmeter"))
        .args(["capture.csv", "--high-threshold", "150"])
        .output()
        .expect("failed to run slewmeter");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--high-threshold"), "stderr was: {stderr}");
    assert!(stderr.contains("150"), "stderr was: {stderr}");
}

#[test]
fn test_low_threshold_over_100_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_slewmeter"))
        .args(["capture.csv", "--low-threshold", "101"])
        .output()
        .expect("failed to run slewmeter");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--low-threshold"), "stderr was: {stderr}");
}

#[test]
fn test_threshold_bounds_accepted() {
    let output = Command::new(env!("CARGO_BIN_EXE_slewmeter"))
        .args([
            "tests/fixtures/switching_capture.csv",
            "--high-threshold",
            "100",
            "--low-threshold",
            "0",
        ])
        .output()
        .expect("failed to run slewmeter");

    assert!(
        output.status.success(),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Turn-off Parameters"), "stdout was: {stdout}");
}
