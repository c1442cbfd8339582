//! Reverse-recovery extraction over a full diode recovery waveform.

use approx::assert_abs_diff_eq;
use slewmeter::analysis::{self, Metric, Mode, ParameterSet};
use slewmeter::parser;
use slewmeter::window::AnalysisConfig;

/// Helper: a 29-sample recovery event on a 10 ns grid.
///
/// Current falls 10 A -> -1.9 A in 0.7 A steps, bottoms out at the
/// -2 A reverse peak, recovers in 0.3 A steps to 0.1 A, then settles
/// at zero. The zero crossings land at 140 ns and 240 ns.
fn recovery_capture_csv() -> String {
    let mut csv = String::from("Time,Vgs,Vds,Is\n");
    for i in 0..29i32 {
        let is = if i <= 17 {
            f64::from(100 - 7 * i) / 10.0
        } else if i <= 25 {
            f64::from(3 * i - 74) / 10.0
        } else {
            0.0
        };
        csv.push_str(&format!("{},0,0,{}\n", f64::from(i) * 1e-8, is));
    }
    csv
}

fn run_recovery(config: &AnalysisConfig) -> slewmeter::analysis::RecoveryParams {
    let csv = recovery_capture_csv();
    let trace = parser::parse(&csv).expect("load failed");
    match analysis::run(&trace, Mode::ReverseRecovery, config) {
        ParameterSet::ReverseRecovery(p) => p,
        other => panic!("expected recovery params, got {:?}", other),
    }
}

// ── Recovery Tests ────────────────────────────────────────────────

#[test]
fn test_recovery_peaks() {
    let params = run_recovery(&AnalysisConfig::default());
    assert_abs_diff_eq!(params.forward_current, 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(params.reverse_peak, -2.0, epsilon = 1e-12);
}

#[test]
fn test_recovery_slew() {
    let params = run_recovery(&AnalysisConfig::default());
    // span 12: the 5.2 A point sits in pair (5.8, 5.1) at 60 ns and the
    // 2.8 A point in pair (3.0, 2.3) at 100 ns: -2.4 A over 40 ns
    assert_abs_diff_eq!(params.di_dt.value().unwrap(), -6.0e7, epsilon = 1.0);
}

#[test]
fn test_recovery_interval() {
    let params = run_recovery(&AnalysisConfig::default());
    // zero crossings in pairs (0.2, -0.5) at 140 ns and (-0.2, 0.1) at 240 ns
    assert_abs_diff_eq!(params.trr.value().unwrap(), 1.0e-7, epsilon = 1e-15);
    assert_eq!(params.ts, params.trr);
    // the fall measures from the If crossing at t = 0
    assert_abs_diff_eq!(params.tf.value().unwrap(), 1.4e-7, epsilon = 1e-15);
}

#[test]
fn test_recovered_charge() {
    let params = run_recovery(&AnalysisConfig::default());
    // trapezoid sum over the ten pairs between the zero crossings is
    // -11.1 A * 10 ns
    assert_abs_diff_eq!(params.qrr.value().unwrap(), 1.11e-7, epsilon = 1e-12);
}

#[test]
fn test_window_excluding_forward_crossing() {
    let config = AnalysisConfig {
        start_time: 5e-8,
        end_time: 1e-6,
        auto_calculate: false,
        ..AnalysisConfig::default()
    };
    let params = run_recovery(&config);
    // the window starts below If, so the fall reference is gone; the peak
    // itself still comes from the whole capture
    assert_eq!(params.tf, Metric::Indeterminate);
    assert_abs_diff_eq!(params.forward_current, 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(params.trr.value().unwrap(), 1.0e-7, epsilon = 1e-15);
}
