//! BV-CLI: Bloom Visualizer command console
//!
//! Reads commands from a script file or stdin, one per line, and prints one
//! JSON result per command on stdout. Logs go to stderr.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{info, warn};

use bv_03_session::{SessionConfig, VisualizerSession};
use bv_cli::{execute, parse_line};
use bv_telemetry::{init_logging, TelemetryConfig};

/// BV-CLI: drive a Bloom filter session from the command line
#[derive(Parser, Debug)]
#[command(name = "bv-cli")]
#[command(about = "Insert, check and remove words in a Bloom filter and inspect its history")]
struct Args {
    /// Filter size in bits (clamped to 8..=128)
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Number of hash functions (clamped to 1..=5)
    #[arg(short = 'k', long)]
    hash_count: Option<usize>,

    /// History entries kept before the oldest is dropped
    #[arg(long)]
    max_history: Option<usize>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.json_logs {
        telemetry = telemetry.with_json_logs(true);
    }
    init_logging(&telemetry)?;

    let mut config = SessionConfig::from_env();
    if let Some(capacity) = args.capacity {
        config.initial_capacity = capacity;
    }
    if let Some(hash_count) = args.hash_count {
        config.initial_hash_count = hash_count;
    }
    if let Some(max_history) = args.max_history {
        config.max_history = max_history;
    }

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut session = VisualizerSession::new(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (index, line) in input.lines().enumerate() {
        let line = line.context("reading command input")?;
        let line_no = index + 1;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = line_no, error = %e, "Skipping command");
                writeln!(out, "{}", json!({ "line": line_no, "error": e.to_string() }))?;
                continue;
            }
        };

        let value = match execute(&mut session, command) {
            Ok(value) => value,
            Err(e) => {
                warn!(line = line_no, error = %e, "Command failed");
                json!({ "line": line_no, "error": e.to_string() })
            }
        };
        writeln!(out, "{}", serde_json::to_string(&value)?)?;
    }

    info!(
        history = session.history_log().len(),
        members = session.filter().len(),
        "Input finished"
    );
    Ok(())
}
