//! Parameter extraction — orchestrates the four analysis modes.

pub mod reverse_recovery;
pub mod turn_off;
pub mod turn_on;
pub mod vgs_transient;

use crate::trace::Trace;
use crate::window::AnalysisConfig;
use rayon::prelude::*;

/// The four switching analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    TurnOff,
    TurnOn,
    ReverseRecovery,
    VgsTransient,
}

impl Mode {
    /// Every mode, in report order.
    pub const ALL: [Mode; 4] = [
        Mode::TurnOff,
        Mode::TurnOn,
        Mode::ReverseRecovery,
        Mode::VgsTransient,
    ];

    /// Display name used in report headings.
    pub fn label(self) -> &'static str {
        match self {
            Mode::TurnOff => "Turn-off",
            Mode::TurnOn => "Turn-on",
            Mode::ReverseRecovery => "Reverse Recovery",
            Mode::VgsTransient => "VGS Transient",
        }
    }

    /// File stem used for per-mode exports.
    pub fn stem(self) -> &'static str {
        match self {
            Mode::TurnOff => "turn_off",
            Mode::TurnOn => "turn_on",
            Mode::ReverseRecovery => "reverse_recovery",
            Mode::VgsTransient => "vgs_transient",
        }
    }
}

/// A single extracted quantity.
///
/// `Indeterminate` marks a metric whose defining crossings were not found
/// or whose denominator vanished. It is distinct from a genuine zero, so a
/// real crossing at t = 0 stays distinguishable from "no crossing".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    Indeterminate,
}

impl Metric {
    /// The contained value, if defined.
    pub fn value(self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::Indeterminate => None,
        }
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) => Metric::Value(v),
            None => Metric::Indeterminate,
        }
    }
}

/// Turn-off switching parameters.
///
/// Levels are fractions of whole-capture peaks; timings, slews, and the
/// energy integral are confined to the analysis window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnOffParams {
    /// High threshold percentage the gate level was taken at.
    pub high_pct: u8,
    /// Low threshold percentage the drain/current levels were taken at.
    pub low_pct: u8,
    /// Gate level at the high threshold (V).
    pub vgs_high: f64,
    /// Drain level at the low threshold (V).
    pub vds_low: f64,
    /// Current level at the low threshold (A).
    pub is_low: f64,
    /// Gate fall time between the high and low levels (s).
    pub t_off: Metric,
    /// Drain voltage delay between 40% and 60% of peak (s).
    pub td_off: Metric,
    /// Drain voltage slew rate between the low and high levels (V/s).
    pub dv_dt_off: Metric,
    /// Current slew rate between the high and low levels (A/s).
    pub di_dt_off: Metric,
    /// Switching energy over the window (J).
    pub e_off: Metric,
}

/// Turn-on switching parameters, mirroring [`TurnOffParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnOnParams {
    pub high_pct: u8,
    pub low_pct: u8,
    /// Gate level at the low threshold (V).
    pub vgs_low: f64,
    /// Drain level at the high threshold (V).
    pub vds_high: f64,
    /// Current level at the high threshold (A).
    pub is_high: f64,
    /// Gate rise time between the low and high levels (s).
    pub t_on: Metric,
    /// Drain voltage delay between 60% and 40% of peak (s).
    pub td_on: Metric,
    /// Drain voltage slew rate between the high and low levels (V/s).
    pub dv_dt_on: Metric,
    /// Current slew rate between the low and high levels (A/s).
    pub di_dt_on: Metric,
    /// Switching energy over the window (J).
    pub e_on: Metric,
}

/// Diode reverse-recovery parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryParams {
    /// Forward current, the whole-capture current peak (A).
    pub forward_current: f64,
    /// Peak reverse recovery current, the whole-capture minimum (A).
    pub reverse_peak: f64,
    /// Current slew between the 60% and 40% points of the If-Irrm span (A/s).
    pub di_dt: Metric,
    /// Reverse recovery time between the zero crossings (s).
    pub trr: Metric,
    /// Fall component: falling zero crossing minus the If crossing (s).
    pub tf: Metric,
    /// Storage component, reported over the same interval as `trr` (s).
    pub ts: Metric,
    /// Reverse recovery charge between the zero crossings (C).
    pub qrr: Metric,
}

/// Gate-voltage transient parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VgsTransientParams {
    /// Steady-state swing between the histogram plateau levels (V).
    pub vgs_static: Metric,
    /// Histogram plateau above the mean of the smoothed gate signal (V).
    pub static_high: f64,
    /// Histogram plateau below the mean of the smoothed gate signal (V).
    pub static_low: f64,
    /// Raw peak-to-peak gate swing over the whole capture (V).
    pub vgs_dynamic: f64,
    /// Whole-capture gate maximum (V).
    pub dynamic_high: f64,
    /// Whole-capture gate minimum (V).
    pub dynamic_low: f64,
}

/// One mode's extracted parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterSet {
    TurnOff(TurnOffParams),
    TurnOn(TurnOnParams),
    ReverseRecovery(RecoveryParams),
    VgsTransient(VgsTransientParams),
}

/// Run one analysis mode over the capture.
pub fn run(trace: &Trace, mode: Mode, config: &AnalysisConfig) -> ParameterSet {
    match mode {
        Mode::TurnOff => ParameterSet::TurnOff(turn_off::run(trace, config)),
        Mode::TurnOn => ParameterSet::TurnOn(turn_on::run(trace, config)),
        Mode::ReverseRecovery => {
            ParameterSet::ReverseRecovery(reverse_recovery::run(trace, config))
        }
        Mode::VgsTransient => ParameterSet::VgsTransient(vgs_transient::run(trace, config)),
    }
}

/// Run several modes, fanning out across threads.
///
/// The modes only read the shared trace, so they evaluate in parallel;
/// results come back in the order of `modes`.
pub fn run_all(trace: &Trace, modes: &[Mode], config: &AnalysisConfig) -> Vec<ParameterSet> {
    modes
        .par_iter()
        .map(|&mode| run(trace, mode, config))
        .collect()
}
