//! Results output formatting (reports and CSV export).
//!
//! Levels in volts and amps render as fixed two-decimal values; times,
//! slew rates, energy, and charge render in scientific notation with two
//! decimals. A metric without a defined value renders as `n/a`.

use crate::analysis::{
    Metric, Mode, ParameterSet, RecoveryParams, TurnOffParams, TurnOnParams, VgsTransientParams,
};
use crate::error::Result;
use crate::trace::Trace;
use crate::window::AnalysisWindow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Fixed two-decimal level (V or A).
fn fmt_level(value: f64) -> String {
    format!("{:.2}", value)
}

/// Scientific two-decimal metric (s, V/s, A/s, J, C).
fn fmt_sci(metric: Metric) -> String {
    match metric.value() {
        Some(v) => format!("{:.2e}", v),
        None => "n/a".to_string(),
    }
}

/// Fixed two-decimal metric, for level-valued metrics.
fn fmt_level_metric(metric: Metric) -> String {
    match metric.value() {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

/// Write the turn-off parameter block.
///
/// Format:
/// ```text
/// Turn-off Parameters
/// 90% VGS: 10.80 V
/// toff: 1.50e-6 s
/// ...
/// ```
pub fn write_turn_off_report<W: Write>(params: &TurnOffParams, writer: &mut W) -> Result<()> {
    writeln!(writer, "Turn-off Parameters")?;
    writeln!(writer, "{}% VGS: {} V", params.high_pct, fmt_level(params.vgs_high))?;
    writeln!(writer, "toff: {} s", fmt_sci(params.t_off))?;
    writeln!(writer, "td(off): {} s", fmt_sci(params.td_off))?;
    writeln!(writer, "dV/dt_off: {} V/s", fmt_sci(params.dv_dt_off))?;
    writeln!(writer, "dI/dt_off: {} A/s", fmt_sci(params.di_dt_off))?;
    writeln!(writer, "{}% VDS: {} V", params.low_pct, fmt_level(params.vds_low))?;
    writeln!(writer, "{}% IS: {} A", params.low_pct, fmt_level(params.is_low))?;
    writeln!(writer, "Eoff: {} J", fmt_sci(params.e_off))?;
    Ok(())
}

/// Write the turn-on parameter block.
pub fn write_turn_on_report<W: Write>(params: &TurnOnParams, writer: &mut W) -> Result<()> {
    writeln!(writer, "Turn-on Parameters")?;
    writeln!(writer, "{}% VGS: {} V", params.low_pct, fmt_level(params.vgs_low))?;
    writeln!(writer, "ton: {} s", fmt_sci(params.t_on))?;
    writeln!(writer, "td(on): {} s", fmt_sci(params.td_on))?;
    writeln!(writer, "dV/dt_on: {} V/s", fmt_sci(params.dv_dt_on))?;
    writeln!(writer, "dI/dt_on: {} A/s", fmt_sci(params.di_dt_on))?;
    writeln!(writer, "{}% VDS: {} V", params.high_pct, fmt_level(params.vds_high))?;
    writeln!(writer, "{}% IS: {} A", params.high_pct, fmt_level(params.is_high))?;
    writeln!(writer, "Eon: {} J", fmt_sci(params.e_on))?;
    Ok(())
}

/// Write the reverse-recovery parameter block.
pub fn write_recovery_report<W: Write>(params: &RecoveryParams, writer: &mut W) -> Result<()> {
    writeln!(writer, "Reverse Recovery Parameters")?;
    writeln!(writer, "IF: {} A", fmt_level(params.forward_current))?;
    writeln!(writer, "IRRM: {} A", fmt_level(params.reverse_peak))?;
    writeln!(writer, "dI/dt: {} A/s", fmt_sci(params.di_dt))?;
    writeln!(writer, "trr: {} s", fmt_sci(params.trr))?;
    writeln!(writer, "tf: {} s", fmt_sci(params.tf))?;
    writeln!(writer, "ts: {} s", fmt_sci(params.ts))?;
    writeln!(writer, "Qrr: {} C", fmt_sci(params.qrr))?;
    Ok(())
}

/// Write the gate-voltage transient parameter block.
pub fn write_vgs_transient_report<W: Write>(
    params: &VgsTransientParams,
    writer: &mut W,
) -> Result<()> {
    writeln!(writer, "VGS Transient Parameters")?;
    writeln!(writer, "VGS-static: {} V", fmt_level_metric(params.vgs_static))?;
    writeln!(writer, "  Static High: {} V", fmt_level(params.static_high))?;
    writeln!(writer, "  Static Low: {} V", fmt_level(params.static_low))?;
    writeln!(writer, "VGS-dynamic: {} V", fmt_level(params.vgs_dynamic))?;
    writeln!(writer, "  Dynamic High: {} V", fmt_level(params.dynamic_high))?;
    writeln!(writer, "  Dynamic Low: {} V", fmt_level(params.dynamic_low))?;
    Ok(())
}

/// Write one mode's labeled parameter block.
pub fn write_report<W: Write>(params: &ParameterSet, writer: &mut W) -> Result<()> {
    match params {
        ParameterSet::TurnOff(p) => write_turn_off_report(p, writer),
        ParameterSet::TurnOn(p) => write_turn_on_report(p, writer),
        ParameterSet::ReverseRecovery(p) => write_recovery_report(p, writer),
        ParameterSet::VgsTransient(p) => write_vgs_transient_report(p, writer),
    }
}

/// Write every parameter block, separated by blank lines.
pub fn write_reports<W: Write>(results: &[ParameterSet], writer: &mut W) -> Result<()> {
    for (i, params) in results.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        write_report(params, writer)?;
    }
    Ok(())
}

/// Write the windowed samples as CSV.
///
/// Format:
/// ```csv
/// Time,VGS,VDS,IS
/// 1e-9,12,0.4,21
/// ```
///
/// Values print with full round-trip precision, so loading the output
/// reproduces the windowed columns exactly.
pub fn write_window_csv<W: Write>(
    trace: &Trace,
    window: &AnalysisWindow,
    writer: &mut W,
) -> Result<()> {
    writeln!(writer, "Time,VGS,VDS,IS")?;
    let times = window.slice(&trace.times);
    let vgs = window.slice(&trace.vgs);
    let vds = window.slice(&trace.vds);
    let is = window.slice(&trace.is);
    for i in 0..times.len() {
        writeln!(writer, "{},{},{},{}", times[i], vgs[i], vds[i], is[i])?;
    }
    Ok(())
}

/// Export one mode: the windowed data table plus the parameter block.
///
/// Writes `<dir>/<stem>.csv` and `<dir>/<stem>_params.txt`, creating the
/// directory if needed.
pub fn export_mode(
    dir: &Path,
    mode: Mode,
    trace: &Trace,
    window: &AnalysisWindow,
    params: &ParameterSet,
) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let data_path = dir.join(format!("{}.csv", mode.stem()));
    let mut data = BufWriter::new(File::create(&data_path)?);
    write_window_csv(trace, window, &mut data)?;
    data.flush()?;

    let params_path = dir.join(format!("{}_params.txt", mode.stem()));
    let mut text = BufWriter::new(File::create(&params_path)?);
    write_report(params, &mut text)?;
    text.flush()?;

    debug!(mode = mode.label(), path = %data_path.display(), "exported");
    Ok(())
}
