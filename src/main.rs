// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: read n, count partitions of every size up to n, print.

use anyhow::{bail, Context, Result};
use clap::Parser;
use partition_search::driver::{enumerate, EnumerationConfig, OutputFormat, Report};
use partition_search::StorageKind;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "partitions")]
#[command(author, version, about = "Count 4-dimensional partitions of every size up to n")]
struct Cli {
    /// Largest partition size to count (0..=63). Read from stdin if omitted.
    n: Option<usize>,

    /// Membership table: `dense` (128 MiB bitset) or `sparse` (hash set)
    #[arg(long, env = "PARTITIONS_STORAGE", default_value_t = StorageKind::Dense)]
    storage: StorageKind,

    /// Output format: `text` or `json`
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Stop after this many seconds and report partial counts
    #[arg(long, value_name = "SECONDS")]
    time_limit: Option<f64>,

    /// Also print search statistics
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    let n = match cli.n {
        Some(n) => n,
        None => read_n(io::stdin().lock(), &mut io::stdout())?,
    };
    let time_limit = cli.time_limit.map(parse_time_limit).transpose()?;

    let config = EnumerationConfig::new(n)
        .with_storage(cli.storage)
        .with_time_limit(time_limit);

    let start = Instant::now();
    let enumeration = enumerate(&config).context("cannot enumerate partitions")?;
    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Report::new(&enumeration, elapsed, cli.stats)
        .write_to(&mut out, cli.format)
        .context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(())
}

/// Log filter from `RUST_LOG` directives, defaulting to `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Convert `--time-limit` seconds into a duration, rejecting what cannot be one.
fn parse_time_limit(seconds: f64) -> Result<Duration> {
    if !(seconds.is_finite() && seconds > 0.0) {
        bail!("--time-limit must be a positive number of seconds, got {}", seconds);
    }
    Duration::try_from_secs_f64(seconds)
        .with_context(|| format!("--time-limit of {} seconds is too large", seconds))
}

/// Prompt for n and parse the first token of the input.
fn read_n<R: BufRead, W: Write>(input: R, prompt: &mut W) -> Result<usize> {
    writeln!(prompt, "Enter n")?;
    prompt.flush()?;
    for line in input.lines() {
        let line = line.context("failed to read n from stdin")?;
        if let Some(token) = line.split_whitespace().next() {
            return token
                .parse()
                .with_context(|| format!("invalid input: expected a non-negative integer, got '{}'", token));
        }
    }
    bail!("invalid input: no value for n on stdin")
}
