//! Parcel Track CLI Application
//!
//! Command-line front end for the parcel-timeline library. It loads a JSON
//! tracking file, positions the cursor at a chosen event, and prints one of
//! the before/from/all range descriptions verbatim to stdout.
//!
//! Exit codes: 0 on success, 1 on any usage error, load error, or
//! out-of-range index. Error text and logs go to stderr; stdout carries only
//! the selected description.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use parcel_timeline::{timeline_from_json, Timeline};
use std::path::PathBuf;
use std::process::ExitCode;

/// Parcel Track - print tracking history for a shipped parcel
#[derive(Parser, Debug)]
#[command(name = "track")]
#[command(about = "Print tracking history for a shipped parcel", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a .json file containing tracking info
    #[arg(value_name = "FILENAME")]
    filename: PathBuf,

    /// Which range of events to print, relative to INDEX
    #[arg(value_name = "HOW", value_enum)]
    how: How,

    /// Zero-based index of the cursor event (ignored when HOW is "all")
    #[arg(value_name = "INDEX", allow_hyphen_values = true)]
    index: i64,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Methods of selecting events relative to the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum How {
    /// Events strictly before the cursor
    Previous,
    /// The cursor event and everything after it
    Following,
    /// Every event, regardless of the cursor
    All,
}

fn main() -> ExitCode {
    // Parsed by hand instead of Args::parse() so that usage errors exit
    // with code 1 (clap's default is 2); --help and --version stay 0.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(args.verbose, args.quiet);

    log::debug!("Parcel Track CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using timeline library v{}", parcel_timeline::VERSION);

    match run(&args) {
        Ok(output) => {
            // verbatim, no trailing framing
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Load the tracking file and produce the selected range description
fn run(args: &Args) -> Result<String> {
    let mut timeline = timeline_from_json(&args.filename)
        .with_context(|| format!("failed to load {:?}", args.filename))?;

    if let (Some(first), Some(last)) = (timeline.events().first(), timeline.events().last()) {
        log::debug!(
            "history for {:?} spans {:?} to {:?}",
            timeline.tracking_number(),
            first.datetime(),
            last.datetime()
        );
    }

    select_range(&mut timeline, args.how, args.index)
}

/// Validate the index, walk the cursor there, and describe the chosen range
///
/// The index is range-checked for every HOW, including `all` where it is
/// otherwise ignored.
fn select_range(timeline: &mut Timeline, how: How, index: i64) -> Result<String> {
    if index < 0 || index as usize >= timeline.len() {
        bail!(
            "index {} out of range for {} event(s)",
            index,
            timeline.len()
        );
    }

    // cursor starts on the first event after loading
    for _ in 0..index {
        timeline.move_cursor_forward();
    }

    let output = match how {
        How::Previous => timeline.describe_previous()?,
        How::Following => timeline.describe_following()?,
        How::All => timeline.describe_all(),
    };
    Ok(output)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
