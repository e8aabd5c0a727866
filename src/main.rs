//! pagesim CLI: compare page replacement policies on a reference trace.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{info, warn, LevelFilter};

use pagesim::common::config::{
    DEFAULT_FRAMES, DEFAULT_POLICIES, DEFAULT_RESULTS_FILE, DEFAULT_TRACE,
};
use pagesim::logging::init_logger;
use pagesim::report::{self, FileSink};
use pagesim::{
    PolicyKind, Result, SimulationConfig, SimulationResult, Simulator, Trace,
};

#[derive(Parser)]
#[command(name = "pagesim")]
#[command(about = "Simulate FIFO, LRU and Optimal page replacement on a reference trace")]
#[command(version)]
struct Cli {
    /// Number of physical frames
    #[arg(short, long, default_value_t = DEFAULT_FRAMES, allow_negative_numbers = true)]
    frames: i64,

    /// Reference string, e.g. "7, 0, 1, 2, 0, 3"
    #[arg(short, long, conflicts_with = "trace_file")]
    trace: Option<String>,

    /// Read the reference string from a file (stdin when neither is given,
    /// the sample trace when stdin is a terminal)
    #[arg(long)]
    trace_file: Option<PathBuf>,

    /// Policy to run; repeat for several (default: FIFO, LRU, Optimal)
    #[arg(short, long = "policy")]
    policies: Vec<PolicyKind>,

    /// File receiving one `NAME FAULTS` line per policy
    #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
    output: PathBuf,

    /// Do not write the results file
    #[arg(long)]
    no_save: bool,

    /// Output format on stdout
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print every reference with its outcome and the resident frames
    /// (text format; JSON always carries them, CSV has no room for them)
    #[arg(short, long)]
    events: bool,

    /// Run each policy on its own thread
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

/// Pick the trace source: `--trace`, then `--trace-file`, then `stdin`.
/// An interactive stdin falls back to the sample trace.
fn read_trace<R: Read>(cli: &Cli, mut stdin: R, interactive: bool) -> Result<Trace> {
    let input = match (&cli.trace, &cli.trace_file) {
        (Some(trace), _) => trace.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) if interactive => {
            info!("No trace given, using sample trace {:?}", DEFAULT_TRACE);
            DEFAULT_TRACE.to_string()
        }
        (None, None) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    Trace::parse(&input)
}

fn simulator(cli: &Cli) -> Result<Simulator> {
    let policies = if cli.policies.is_empty() {
        DEFAULT_POLICIES.to_vec()
    } else {
        cli.policies.clone()
    };
    let config = SimulationConfig::new(cli.frames, policies)?;
    let snapshots = match cli.format {
        Format::Text => cli.events,
        Format::Json => true,
        Format::Csv => false,
    };
    Ok(Simulator::new(config).with_frame_snapshots(snapshots))
}

/// Write `results` to `out` in the requested format. Event tables only go
/// with the text format so JSON and CSV output stays machine-readable.
fn render<W: Write>(
    mut out: W,
    format: Format,
    events: bool,
    results: &[SimulationResult],
) -> Result<()> {
    match format {
        Format::Text => {
            report::write_summary(&mut out, results)?;
            if events {
                for result in results {
                    report::write_events(&mut out, result)?;
                }
            }
        }
        Format::Csv => {
            if events {
                warn!("--events has no effect with --format csv");
            }
            report::write_metrics_csv(&mut out, results)?;
        }
        Format::Json => report::write_json(&mut out, results)?,
    }
    Ok(())
}

fn save(cli: &Cli, results: &[SimulationResult]) -> Result<()> {
    if cli.no_save {
        return Ok(());
    }
    let sink = FileSink::create(&cli.output)?;
    report::record_all(&sink, results)
}

fn run(cli: &Cli) -> Result<()> {
    let simulator = simulator(cli)?;
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let trace = read_trace(cli, stdin.lock(), interactive)?;

    let results = if cli.parallel {
        simulator.run_parallel(&trace)
    } else {
        simulator.run(&trace)
    };

    render(io::stdout().lock(), cli.format, cli.events, &results)?;
    save(cli, &results)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_logger(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
