//! Command-line front-end: build a ring buffer from arguments and report its
//! state.

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use crate::array::{RingBuffer, RingBufferSnapshot};
use crate::config::Config;
use crate::errors::CollectionError;
use crate::observability::telemetry::{init_tracing, init_tracing_verbose, sanitize_for_log};

#[derive(Parser, Debug)]
#[command(name = "linear-collections")]
#[command(about = "Exercise the linear collections from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Log resize and prepend events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepend VALUES (in order) onto a ring buffer and print the result
    Ring(RingArgs),
}

#[derive(Args, Debug)]
pub struct RingArgs {
    /// Initial capacity (overrides ring.initial_capacity from the config)
    #[arg(long, value_name = "N")]
    pub capacity: Option<usize>,

    /// Grow the buffer to N slots after all values are prepended
    #[arg(long, value_name = "N")]
    pub resize: Option<usize>,

    /// Look up the element at a logical index (repeatable)
    #[arg(long = "get", value_name = "INDEX", allow_negative_numbers = true)]
    pub get: Vec<isize>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Values to prepend, first argument first
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Lookup {
    index: isize,
    value: String,
}

#[derive(Debug, Serialize)]
struct RingReport {
    #[serde(flatten)]
    state: RingBufferSnapshot<String>,
    lookups: Vec<Lookup>,
}

/// Parse the process arguments and run the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    if cli.verbose {
        init_tracing_verbose();
    } else {
        init_tracing(&config.logging.filter);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &config, &mut out)
}

/// Run `command` against `config`, writing the report to `out`.
pub fn execute(command: Commands, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Ring(args) => run_ring(args, config, out),
    }
}

fn run_ring(args: RingArgs, config: &Config, out: &mut dyn Write) -> Result<()> {
    let mut ring = match args.capacity {
        Some(capacity) => RingBuffer::new(capacity),
        None => RingBuffer::from_config(&config.ring),
    };
    info!(
        capacity = ring.capacity(),
        values = args.values.len(),
        "building ring buffer"
    );

    for value in args.values {
        debug!(value = %sanitize_for_log(&value), "prepend");
        ring.prepend(value);
    }

    if let Some(new_capacity) = args.resize {
        ring.resize(new_capacity).map_err(CollectionError::from)?;
    }

    let mut lookups = Vec::with_capacity(args.get.len());
    for index in args.get {
        let value = ring.get(index).map_err(CollectionError::from)?;
        lookups.push(Lookup {
            index,
            value: value.clone(),
        });
    }

    let report = RingReport {
        state: ring.snapshot(),
        lookups,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        writeln!(out, "{}", json)?;
    } else {
        write_text_report(&report, out)?;
    }
    Ok(())
}

fn write_text_report(report: &RingReport, out: &mut dyn Write) -> Result<()> {
    let state = &report.state;
    let position = |p: Option<usize>| p.map_or_else(|| "-".to_string(), |i| i.to_string());

    writeln!(out, "capacity: {}", state.capacity)?;
    writeln!(out, "len: {}", state.len)?;
    writeln!(out, "front: {}", position(state.front))?;
    writeln!(out, "end: {}", position(state.end))?;
    writeln!(out, "elements: [{}]", state.elements.join(", "))?;
    for lookup in &report.lookups {
        writeln!(out, "get {}: {}", lookup.index, lookup.value)?;
    }
    Ok(())
}
