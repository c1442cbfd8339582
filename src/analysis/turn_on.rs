//! Turn-on transient extraction.
//!
//! Mirror of the turn-off analysis: the gate voltage rises, the drain
//! voltage collapses, and the channel current climbs.

use super::{Metric, TurnOnParams};
use crate::signal::{self, Direction};
use crate::trace::Trace;
use crate::window::{self, AnalysisConfig};

/// Extract turn-on switching parameters.
pub fn run(trace: &Trace, config: &AnalysisConfig) -> TurnOnParams {
    let _span = tracing::debug_span!("turn_on", samples = trace.len()).entered();
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

    // gate climbs from its low level through its high level
    let t_on = signal::interval_between(
        times,
        vgs,
        low * vgs_peak,
        high * vgs_peak,
        Direction::Rising,
    );
    // drain drops through 60% then 40% of its peak
    let td_on = signal::interval_between(
        times,
        vds,
        0.6 * vds_peak,
        0.4 * vds_peak,
        Direction::Falling,
    );
    let dv_dt_on = signal::slew_between(
        times,
        vds,
        high * vds_peak,
        low * vds_peak,
        Direction::Falling,
    );
    let di_dt_on = signal::slew_between(
        times,
        is,
        low * is_peak,
        high * is_peak,
        Direction::Rising,
    );

    let power: Vec<f64> = vds.iter().zip(is).map(|(v, i)| v * i).collect();
    let e_on = match (times.first(), times.last()) {
        (Some(&t0), Some(&t1)) => {
            Metric::Value(signal::area_under_curve(times, &power, t0, t1))
        }
        _ => Metric::Indeterminate,
    };

    TurnOnParams {
        high_pct: config.high_threshold,
        low_pct: config.low_threshold,
        vgs_low: low * vgs_peak,
        vds_high: high * vds_peak,
        is_high: high * is_peak,
        t_on: t_on.into(),
        td_on: td_on.into(),
        dv_dt_on: dv_dt_on.into(),
        di_dt_on: di_dt_on.into(),
        e_on,
    }
}
