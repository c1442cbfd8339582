//! Waveform primitives shared by the analysis modes.
//!
//! Threshold crossing detection, symmetric moving-average smoothing,
//! histogram-based steady-state level detection, and trapezoidal
//! integration over `(time, value)` sample pairs.

/// Scan direction for a threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
}

/// Which plateau of a two-level signal to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    High,
    Low,
}

/// Bin count of the steady-state histogram.
const NUM_BINS: usize = 100;

/// Locate the first consecutive sample pair straddling `target`.
///
/// Falling: `series[i] >= target >= series[i + 1]`; rising is the mirror
/// test. Returns the time of the earlier sample of the pair, a coarse
/// marker rather than an interpolated crossing, and `None` when the
/// series never straddles the target.
pub fn crossing_time(
    times: &[f64],
    series: &[f64],
    target: f64,
    direction: Direction,
) -> Option<f64> {
    for (pair, &t) in series.windows(2).zip(times) {
        let hit = match direction {
            Direction::Falling => pair[0] >= target && target >= pair[1],
            Direction::Rising => pair[0] <= target && target <= pair[1],
        };
        if hit {
            return Some(t);
        }
    }
    None
}

/// Time between the crossings of two levels of one series, scanned in one
/// direction. Negative when the `to` crossing precedes the `from` one;
/// `None` when either crossing is missing.
pub fn interval_between(
    times: &[f64],
    series: &[f64],
    from_level: f64,
    to_level: f64,
    direction: Direction,
) -> Option<f64> {
    let t_from = crossing_time(times, series, from_level, direction)?;
    let t_to = crossing_time(times, series, to_level, direction)?;
    Some(t_to - t_from)
}

/// Slew rate between two level crossings of one series (signed).
///
/// `None` when either crossing is missing or the crossing times coincide.
pub fn slew_between(
    times: &[f64],
    series: &[f64],
    from_level: f64,
    to_level: f64,
    direction: Direction,
) -> Option<f64> {
    let dt = interval_between(times, series, from_level, to_level, direction)?;
    if dt == 0.0 {
        return None;
    }
    Some((to_level - from_level) / dt)
}

/// Smooth a series with a symmetric moving average.
///
/// Each output sample averages the raw samples in
/// `[i - window / 2, i + window / 2)`, truncated at the array ends. A
/// window under two samples leaves the series unchanged.
pub fn moving_average(series: &[f64], window: usize) -> Vec<f64> {
    let n = series.len();
    let half = window / 2;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let lo = i.saturating_sub(half);
        let hi = (i + half).min(n);
        if lo < hi {
            let sum: f64 = series[lo..hi].iter().sum();
            out.push(sum / (hi - lo) as f64);
        } else {
            out.push(series[i]);
        }
    }
    out
}

/// Estimate a plateau level of a mostly-flat signal.
///
/// Builds a 100-bin histogram over the data range and returns the center
/// of the most populated bin strictly above (`High`) or strictly below
/// (`Low`) the arithmetic mean; the first such bin wins a population tie.
/// Returns 0.0 for empty input, for a flat signal (zero bin width), and
/// when no populated bin sits on the requested side of the mean.
pub fn steady_state_level(series: &[f64], level: Level) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let min = min_value(series);
    let max = max_value(series);
    let bin_width = (max - min) / NUM_BINS as f64;
    if bin_width <= 0.0 {
        return 0.0;
    }

    let mut counts = [0u32; NUM_BINS];
    for &v in series {
        let bin = (((v - min) / bin_width) as usize).min(NUM_BINS - 1);
        counts[bin] += 1;
    }
    let mean = mean(series);

    let mut best_value = 0.0;
    let mut best_count = 0u32;
    for (i, &count) in counts.iter().enumerate() {
        let center = min + (i as f64 + 0.5) * bin_width;
        let on_side = match level {
            Level::High => center > mean,
            Level::Low => center < mean,
        };
        if on_side && count > best_count {
            best_count = count;
            best_value = center;
        }
    }
    best_value
}

/// Trapezoidal area under `(times, values)` restricted to `[t1, t2]`.
///
/// A sample pair contributes when its midpoint time lies inside the
/// range. Returns the absolute value of the accumulated area.
pub fn area_under_curve(times: &[f64], values: &[f64], t1: f64, t2: f64) -> f64 {
    let mut area = 0.0;
    for (ts, vs) in times.windows(2).zip(values.windows(2)) {
        let midpoint = 0.5 * (ts[0] + ts[1]);
        if midpoint >= t1 && midpoint <= t2 {
            area += 0.5 * (vs[0] + vs[1]) * (ts[1] - ts[0]);
        }
    }
    area.abs()
}

/// Largest sample in the series, 0.0 when empty.
pub fn max_value(series: &[f64]) -> f64 {
    series.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Smallest sample in the series, 0.0 when empty.
pub fn min_value(series: &[f64]) -> f64 {
    series.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Arithmetic mean of the series, 0.0 when empty.
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}
