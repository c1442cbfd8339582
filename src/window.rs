//! Analysis window selection.
//!
//! Maps a mode's time-range settings onto index bounds of the capture.
//! Auto ranging spans the whole trace; explicit bounds snap to the first
//! sample at or past each requested time.

use crate::trace::Trace;
use tracing::debug;

/// Per-mode analysis settings.
///
/// `high_threshold` and `low_threshold` are percentages of a signal's peak
/// used as crossing levels. When `auto_calculate` is set the time bounds
/// are ignored and the window spans the whole capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Window start time (s), ignored under auto ranging.
    pub start_time: f64,
    /// Window end time (s), ignored under auto ranging.
    pub end_time: f64,
    /// High crossing level as a percentage of peak.
    pub high_threshold: u8,
    /// Low crossing level as a percentage of peak.
    pub low_threshold: u8,
    /// Span the whole capture instead of the explicit bounds.
    pub auto_calculate: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            end_time: 0.0,
            high_threshold: 90,
            low_threshold: 10,
            auto_calculate: true,
        }
    }
}

impl AnalysisConfig {
    /// High threshold as a fraction of peak (90 -> 0.9).
    pub fn high_fraction(&self) -> f64 {
        f64::from(self.high_threshold) / 100.0
    }

    /// Low threshold as a fraction of peak (10 -> 0.1).
    pub fn low_fraction(&self) -> f64 {
        f64::from(self.low_threshold) / 100.0
    }
}

/// Index bounds of the samples under analysis, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisWindow {
    pub start: usize,
    pub end: usize,
}

impl AnalysisWindow {
    /// The window's view of one parallel sample array.
    ///
    /// Returns the empty slice for an empty array, so the degenerate
    /// window of an empty trace never indexes out of bounds.
    pub fn slice<'a>(&self, samples: &'a [f64]) -> &'a [f64] {
        if samples.is_empty() {
            &[]
        } else {
            &samples[self.start..=self.end]
        }
    }
}

/// Select the index range to analyze.
///
/// Explicit mode picks the first sample with `time >= start_time`, then
/// the first sample at or after it with `time >= end_time`; a bound past
/// the capture falls back to the trace edge, and the end never precedes
/// the start. An empty trace yields the degenerate window `(0, 0)`;
/// metrics over it are undefined and callers report them as such.
pub fn select(trace: &Trace, config: &AnalysisConfig) -> AnalysisWindow {
    if trace.is_empty() {
        return AnalysisWindow { start: 0, end: 0 };
    }
    let last = trace.len() - 1;
    if config.auto_calculate {
        return AnalysisWindow { start: 0, end: last };
    }

    let start = trace
        .times
        .iter()
        .position(|&t| t >= config.start_time)
        .unwrap_or(0);
    let end = trace.times[start..]
        .iter()
        .position(|&t| t >= config.end_time)
        .map(|offset| start + offset)
        .unwrap_or(last);

    let window = AnalysisWindow {
        start,
        end: end.max(start),
    };
    debug!(start = window.start, end = window.end, "explicit window");
    window
}
