//! Reverse recovery extraction.
//!
//! Characterizes the body-diode recovery of the current waveform: forward
//! current, peak reverse current, slew between the 60%/40% points of the
//! If-Irrm span, the recovery interval between the zero crossings, and
//! the recovered charge.

use super::{Metric, RecoveryParams};
use crate::signal::{self, Direction};
use crate::trace::Trace;
use crate::window::{self, AnalysisConfig};

/// Extract reverse-recovery parameters from the current waveform.
pub fn run(trace: &Trace, config: &AnalysisConfig) -> RecoveryParams {
    let _span = tracing::debug_span!("reverse_recovery", samples = trace.len()).entered();
    let win = window::select(trace, config);
    let times = win.slice(&trace.times);
    let is = win.slice(&trace.is);

    let forward_current = signal::max_value(&trace.is);
    let reverse_peak = signal::min_value(&trace.is);

    let span = forward_current - reverse_peak;
    let sixty = forward_current - 0.6 * span;
    let forty = forward_current - 0.4 * span;

    let t60 = signal::crossing_time(times, is, sixty, Direction::Falling);
    let t40 = signal::crossing_time(times, is, forty, Direction::Falling);
    let di_dt = match (t60, t40) {
        (Some(t60), Some(t40)) if t60 != t40 => Metric::Value((sixty - forty) / (t60 - t40)),
        _ => Metric::Indeterminate,
    };

    let t1 = signal::crossing_time(times, is, 0.0, Direction::Falling);
    let t2 = signal::crossing_time(times, is, 0.0, Direction::Rising);
    let trr = match (t1, t2) {
        (Some(t1), Some(t2)) => Metric::Value(t2 - t1),
        _ => Metric::Indeterminate,
    };

    let t_forward = signal::crossing_time(times, is, forward_current, Direction::Falling);
    let tf = match (t1, t_forward) {
        (Some(t1), Some(tfwd)) => Metric::Value(t1 - tfwd),
        _ => Metric::Indeterminate,
    };
    // the storage component spans the same zero-crossing interval as trr
    let ts = trr;

    let qrr = match (t1, t2) {
        (Some(t1), Some(t2)) => Metric::Value(signal::area_under_curve(times, is, t1, t2)),
        _ => Metric::Indeterminate,
    };

    RecoveryParams {
        forward_current,
        reverse_peak,
        di_dt,
        trr,
        tf,
        ts,
        qrr,
    }
}
