//! Switching transient parameter extraction for power MOSFET captures.
//!
//! Takes a four-column oscilloscope capture (time, gate voltage, drain
//! voltage, source current) and extracts datasheet-style switching
//! parameters: turn-off and turn-on timings, slew rates and energies,
//! reverse-recovery figures, and gate plateau levels.

pub mod analysis;
pub mod error;
pub mod output;
pub mod parser;
pub mod signal;
pub mod stats;
pub mod trace;
pub mod window;
