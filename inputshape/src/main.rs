//! # inputshape
//!
//! A CLI tool that prints the shape of daily puzzle inputs.
//!
//! ## Overview
//!
//! inputshape is built on top of inputshapelib. Run from a project root, it
//! reads every registered `src/days/data/day<NN>.txt` in day order and
//! prints one block per day: line counts, widest records, section sizes.
//!
//! ## Usage
//!
//! ```bash
//! # Report on every day
//! inputshape
//!
//! # One JSON object per day
//! inputshape --output json
//!
//! # See which files are read and what each metric computed
//! inputshape --log-level debug
//! ```
//!
//! Any missing or malformed input aborts the run with a non-zero exit code.
//! Blocks for earlier days have already been printed at that point; nothing
//! is printed for the failing day or any later one.

mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use inputshapelib::{run_all, Registry};

use render::{OutputMode, Renderer};

/// Project root the data directory is resolved against
const PROJECT_ROOT: &str = ".";

/// Diagnostic logging verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    None,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "error" => Some(Self::Error),
            "warn" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("inputshape")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Print line, field and section statistics for daily puzzle inputs")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_parser(["none", "error", "warn", "info", "debug", "trace"])
                .default_value("none")
                .help("Diagnostic logging written to stderr"),
        )
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let mode = matches
        .get_one::<String>("output")
        .and_then(|s| OutputMode::from_name(s))
        .unwrap_or_default();

    let registry = Registry::default();
    let stdout = std::io::stdout();
    let mut renderer = Renderer::new(stdout.lock(), mode);

    run_all(&registry, PROJECT_ROOT, |block| {
        renderer.render(block)?;
        Ok(())
    })
    .context("probe run aborted")
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    let log_level = matches
        .get_one::<String>("log-level")
        .and_then(|s| LogLevel::from_name(s))
        .unwrap_or(LogLevel::None);
    init_logging(log_level);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
