//! Capture data model.
//!
//! A [`Trace`] holds one oscilloscope capture of a switching event: gate
//! voltage, drain voltage, and source current sampled over a shared time
//! base. Traces are immutable once built; the analysis modes borrow them
//! read-only.

use crate::error::{Result, SlewmeterError};

/// A switching capture: parallel sample arrays over one time base.
///
/// Invariants (enforced by [`Trace::new`]): all four arrays share one
/// length of at least 2, and `times` is strictly increasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    /// Sample times (s).
    pub times: Vec<f64>,
    /// Gate-source voltage per sample (V).
    pub vgs: Vec<f64>,
    /// Drain-source voltage per sample (V).
    pub vds: Vec<f64>,
    /// Drain/source current per sample (A).
    pub is: Vec<f64>,
}

impl Trace {
    /// Build a trace from parallel sample arrays, validating the capture.
    pub fn new(times: Vec<f64>, vgs: Vec<f64>, vds: Vec<f64>, is: Vec<f64>) -> Result<Self> {
        let n = times.len();
        if vgs.len() != n || vds.len() != n || is.len() != n {
            return Err(SlewmeterError::Load(format!(
                "column lengths differ: Time={}, Vgs={}, Vds={}, Is={}",
                n,
                vgs.len(),
                vds.len(),
                is.len()
            )));
        }
        if n < 2 {
            return Err(SlewmeterError::Load(format!(
                "capture needs at least 2 samples, got {}",
                n
            )));
        }
        for i in 1..n {
            // negated form: a NaN time is unordered and must fail here too
            if !(times[i] > times[i - 1]) {
                return Err(SlewmeterError::Load(format!(
                    "time must be strictly increasing (sample {}: {} after {})",
                    i,
                    times[i],
                    times[i - 1]
                )));
            }
        }
        Ok(Self {
            times,
            vgs,
            vds,
            is,
        })
    }

    /// Number of samples in the capture.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
