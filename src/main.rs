use clap::Parser;
use slewmeter::analysis::{self, Mode};
use slewmeter::output;
use slewmeter::parser;
use slewmeter::window::{self, AnalysisConfig};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

/// MOSFET switching transient parameter extractor
#[derive(Parser)]
#[command(name = "slewmeter", version)]
struct Cli {
    /// Oscilloscope capture CSV (Time, Vgs, Vds, Is columns)
    capture: String,

    /// Analysis mode to run; all four when omitted
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Window start time in seconds; capture start when omitted
    #[arg(long)]
    start_time: Option<f64>,

    /// Window end time in seconds; capture end when omitted
    #[arg(long)]
    end_time: Option<f64>,

    /// High crossing level as a percentage of peak
    #[arg(long, default_value_t = 90, value_parser = clap::value_parser!(u8).range(0..=100))]
    high_threshold: u8,

    /// Low crossing level as a percentage of peak
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(0..=100))]
    low_threshold: u8,

    /// Directory to export windowed data and parameters into
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print performance stats to stderr
    #[arg(long)]
    stats: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ModeArg {
    TurnOff,
    TurnOn,
    ReverseRecovery,
    VgsTransient,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TurnOff => Mode::TurnOff,
            ModeArg::TurnOn => Mode::TurnOn,
            ModeArg::ReverseRecovery => Mode::ReverseRecovery,
            ModeArg::VgsTransient => Mode::VgsTransient,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut stats = if cli.stats { Some(slewmeter::stats::Stats::new()) } else { None };

    let load_start = Instant::now();
    let input = std::fs::read_to_string(&cli.capture).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", cli.capture, e);
        std::process::exit(1);
    });

    let trace = parser::parse(&input).unwrap_or_else(|e| {
        eprintln!("Load error: {}", e);
        std::process::exit(1);
    });
    if let Some(ref mut s) = stats {
        s.add_phase("Load:", load_start.elapsed());
        s.samples_loaded = trace.len();
    }

    // Explicit on either bound; the other defaults to the capture edge.
    let auto_calculate = cli.start_time.is_none() && cli.end_time.is_none();
    let config = AnalysisConfig {
        start_time: cli
            .start_time
            .unwrap_or_else(|| trace.times.first().copied().unwrap_or(0.0)),
        end_time: cli
            .end_time
            .unwrap_or_else(|| trace.times.last().copied().unwrap_or(0.0)),
        high_threshold: cli.high_threshold,
        low_threshold: cli.low_threshold,
        auto_calculate,
    };

    let modes: Vec<Mode> = match cli.mode {
        Some(arg) => vec![arg.into()],
        None => Mode::ALL.to_vec(),
    };

    let analysis_start = Instant::now();
    let results = analysis::run_all(&trace, &modes, &config);
    if let Some(ref mut s) = stats {
        s.add_phase("Analysis:", analysis_start.elapsed());
        s.modes_run = modes.len();
    }

    let mut stdout = io::stdout();
    output::write_reports(&results, &mut stdout).unwrap_or_else(|e| {
        eprintln!("Output error: {}", e);
        std::process::exit(1);
    });

    if let Some(ref dir) = cli.export {
        let export_start = Instant::now();
        let win = window::select(&trace, &config);
        for (mode, params) in modes.iter().zip(&results) {
            output::export_mode(dir, *mode, &trace, &win, params).unwrap_or_else(|e| {
                eprintln!("Export error: {}", e);
                std::process::exit(1);
            });
        }
        if let Some(ref mut s) = stats {
            s.add_phase("Export:", export_start.elapsed());
        }
    }

    if let Some(ref stats) = stats {
        stats.display();
    }
}
