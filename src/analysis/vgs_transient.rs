//! Gate-voltage transient extraction.
//!
//! Splits the gate swing into a static part (the distance between the two
//! steady-state plateaus of a smoothed Vgs) and a dynamic part (the raw
//! peak-to-peak swing including overshoot and ringing).

use super::{Metric, VgsTransientParams};
use crate::signal::{self, Level};
use crate::trace::Trace;
use crate::window::{self, AnalysisConfig};

/// Largest smoothing window applied to the gate signal.
const MAX_SMOOTHING_WINDOW: usize = 50;

/// Extract gate-voltage transient parameters.
pub fn run(trace: &Trace, config: &AnalysisConfig) -> VgsTransientParams {
    let _span = tracing::debug_span!("vgs_transient", samples = trace.len()).entered();
    let win = window::select(trace, config);
    let vgs = win.slice(&trace.vgs);

    let smoothing = (vgs.len() / 10).min(MAX_SMOOTHING_WINDOW);
    let smoothed = signal::moving_average(vgs, smoothing);

    let static_high = signal::steady_state_level(&smoothed, Level::High);
    let static_low = signal::steady_state_level(&smoothed, Level::Low);
    // a flat or empty signal has no two plateaus to span
    let degenerate =
        smoothed.is_empty() || signal::max_value(&smoothed) <= signal::min_value(&smoothed);
    let vgs_static = if degenerate {
        Metric::Indeterminate
    } else {
        Metric::Value(static_high - static_low)
    };

    let dynamic_high = signal::max_value(&trace.vgs);
    let dynamic_low = signal::min_value(&trace.vgs);

    VgsTransientParams {
        vgs_static,
        static_high,
        static_low,
        vgs_dynamic: dynamic_high - dynamic_low,
        dynamic_high,
        dynamic_low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Gate sits at 0V, steps to 5V halfway, with one overshoot spike.
    fn gate_capture() -> Trace {
        let mut vgs = vec![0.0; 50];
        vgs.extend(vec![5.0; 50]);
        vgs[50] = 7.0; // overshoot at the edge
        let times: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let flat = vec![0.0; 100];
        Trace::new(times, vgs, flat.clone(), flat).unwrap()
    }

    #[test]
    fn test_static_levels_from_plateaus() {
        let params = run(&gate_capture(), &AnalysisConfig::default());
        // 100 bins over the smoothed range put each plateau within one bin
        assert_abs_diff_eq!(params.static_high, 5.0, epsilon = 0.1);
        assert_abs_diff_eq!(params.static_low, 0.0, epsilon = 0.1);
        assert_abs_diff_eq!(params.vgs_static.value().unwrap(), 5.0, epsilon = 0.2);
    }

    #[test]
    fn test_dynamic_swing_includes_overshoot() {
        let params = run(&gate_capture(), &AnalysisConfig::default());
        assert_abs_diff_eq!(params.dynamic_high, 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(params.dynamic_low, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(params.vgs_dynamic, 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_gate_is_degenerate() {
        let times: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let vgs = vec![3.3; 30];
        let flat = vec![0.0; 30];
        let trace = Trace::new(times, vgs, flat.clone(), flat).unwrap();
        let params = run(&trace, &AnalysisConfig::default());
        assert_eq!(params.vgs_static, Metric::Indeterminate);
        assert_eq!(params.static_high, 0.0);
        assert_eq!(params.static_low, 0.0);
        assert_abs_diff_eq!(params.vgs_dynamic, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_smoothing_suppresses_single_spike() {
        let mut vgs = vec![1.0; 100];
        vgs[40] = 100.0;
        let times: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let flat = vec![0.0; 100];
        let trace = Trace::new(times, vgs, flat.clone(), flat).unwrap();
        let params = run(&trace, &AnalysisConfig::default());
        // the spike widens to ~10 samples of 10.9V after averaging; the
        // low plateau stays near 1V
        assert_abs_diff_eq!(params.static_low, 1.0, epsilon = 0.1);
        // the raw swing still sees the spike
        assert_abs_diff_eq!(params.vgs_dynamic, 99.0, epsilon = 1e-12);
    }
}
