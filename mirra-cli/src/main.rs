//! mirra — one-way periodic directory mirroring.
//!
//! # Usage
//!
//! ```text
//! mirra <interval-seconds> <source> <replica> [--once] [--json] [--log-file <path>]
//! ```
//!
//! Every `interval` seconds the replica is made structurally and
//! byte-for-byte identical to the source: new and changed entries are
//! copied, entries absent from the source are removed. Ctrl-C exits cleanly
//! between file operations.

mod console;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use mirra_core::PathMapper;
use mirra_sync::{run_pass, SyncScheduler};

use console::ConsoleReporter;

#[derive(Parser, Debug)]
#[command(
    name = "mirra",
    version,
    about = "Mirror a source directory into a replica at a fixed interval",
    long_about = None,
)]
struct Cli {
    /// Seconds between synchronization passes.
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Authoritative source directory.
    source: PathBuf,

    /// Replica directory, made identical to the source on every pass.
    replica: PathBuf,

    /// Run exactly one pass and exit.
    #[arg(long)]
    once: bool,

    /// With --once, print the final pass summary as JSON on stdout.
    #[arg(long, requires = "once")]
    json: bool,

    /// Append the structured log to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    // Startup validation: the scheduler never enters Running on bad roots.
    validate_root(&cli.source, "source")?;
    validate_root(&cli.replica, "replica")?;

    let mapper = PathMapper::new(&cli.source, &cli.replica);
    // With --json the summary owns stdout; echo lines move to stderr.
    let reporter = if cli.json {
        ConsoleReporter::stderr_echo()
    } else {
        ConsoleReporter::new()
    };

    if cli.once {
        let summary = run_pass(&mapper, &reporter).context("synchronization pass failed")?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        return Ok(());
    }

    let scheduler = SyncScheduler::new(Duration::from_secs(cli.interval));
    let shutdown = scheduler.shutdown_handle();
    ctrlc::set_handler(move || shutdown.store(true, Ordering::SeqCst))
        .context("failed to install ctrl-c handler")?;

    println!(
        "Mirroring {} -> {} every {}s (ctrl-c to stop)",
        cli.source.display(),
        cli.replica.display(),
        cli.interval
    );
    tracing::info!(
        interval_s = cli.interval,
        source = %cli.source.display(),
        replica = %cli.replica.display(),
        "scheduler started"
    );

    scheduler.run(&mapper, &reporter);

    tracing::info!("scheduler terminated by interruption");
    println!("Interrupted — exiting cleanly.");
    Ok(())
}

fn validate_root(path: &Path, role: &str) -> Result<()> {
    if !path.exists() {
        bail!("{role} path {} does not exist", path.display());
    }
    if !path.is_dir() {
        bail!("{role} path {} is not a directory", path.display());
    }
    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
