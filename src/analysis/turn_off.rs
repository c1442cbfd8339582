//! Turn-off transient extraction.
//!
//! At turn-off the gate voltage collapses, the drain voltage rises to the
//! bus level, and the channel current falls. Timings and slews key off
//! fractional levels of each signal's whole-capture peak.

use super::{Metric, TurnOffParams};
use crate::signal::{self, Direction};
use crate::trace::Trace;
use crate::window::{self, AnalysisConfig};

/// Extract turn-off switching parameters.
pub fn run(trace: &Trace, config: &AnalysisConfig) -> TurnOffParams {
    let _span = tracing::debug_span!("turn_off", samples = trace.len()).entered();
    let win = window::select(trace, config);
    let times = win.slice(&trace.times);
    let vgs = win.slice(&trace.vgs);
    let vds = win.slice(&trace.vds);
    let is = win.slice(&trace.is);

    let vgs_peak = signal::max_value(&trace.vgs);
    let vds_peak = signal::max_value(&trace.vds);
    let is_peak = signal::max_value(&trace.is);

    let high = config.high_fraction();
    let low = config.low_fraction();

    // gate falls from its high level through its low level
    let t_off = signal::interval_between(
        times,
        vgs,
        high * vgs_peak,
        low * vgs_peak,
        Direction::Falling,
    );
    // drain climbs through 40% then 60% of its peak
    let td_off = signal::interval_between(
        times,
        vds,
        0.4 * vds_peak,
        0.6 * vds_peak,
        Direction::Rising,
    );
    let dv_dt_off = signal::slew_between(
        times,
        vds,
        low * vds_peak,
        high * vds_peak,
        Direction::Rising,
    );
    let di_dt_off = signal::slew_between(
        times,
        is,
        high * is_peak,
        low * is_peak,
        Direction::Falling,
    );

    let power: Vec<f64> = vds.iter().zip(is).map(|(v, i)| v * i).collect();
    let e_off = match (times.first(), times.last()) {
        (Some(&t0), Some(&t1)) => {
            Metric::Value(signal::area_under_curve(times, &power, t0, t1))
        }
        _ => Metric::Indeterminate,
    };

    TurnOffParams {
        high_pct: config.high_threshold,
        low_pct: config.low_threshold,
        vgs_high: high * vgs_peak,
        vds_low: low * vds_peak,
        is_low: low * is_peak,
        t_off: t_off.into(),
        td_off: td_off.into(),
        dv_dt_off: dv_dt_off.into(),
        di_dt_off: di_dt_off.into(),
        e_off,
    }
}
