//! `codelock`: guess the combination, and be shown the way if wrong.
//!
//! # Exit codes
//!
//! - 0: session finished (granted, denied, or left without an attempt)
//! - 1: runtime failure (terminal I/O, run directory, engine invariant)
//! - 2: invalid configuration

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

use codelock_harness::config::{LockConfig, LockConfigInput};
use codelock_harness::run_dir::write_run_dir;
use codelock_harness::session::{run_session, SessionError};

/// Combination lock with shortest-path hints.
#[derive(Parser, Debug)]
#[command(name = "codelock", version, about)]
struct Cli {
    /// First attempt; prompts on stdin when omitted.
    attempt: Option<String>,

    /// Code that opens the lock.
    #[arg(long, env = "CODELOCK_TARGET")]
    target: Option<String>,

    /// Number of dials.
    #[arg(long, env = "CODELOCK_DIGITS")]
    digits: Option<usize>,

    /// Write the run directory (subgraph, result record, digest).
    #[arg(long)]
    save: bool,

    /// Run directory `--save` writes; it may only hold an earlier run.
    #[arg(long, default_value = "codelock-run")]
    out_dir: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match LockConfig::build(&LockConfigInput {
        digits: cli.digits,
        target: cli.target.clone(),
    }) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let report = match run_session(&config, cli.attempt.as_deref(), stdin.lock(), stdout.lock()) {
        Ok(report) => report,
        Err(SessionError::Search(e)) if e.is_invariant_violation() => {
            error!(error = %e, "search engine invariant violated");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!(error = %e, "session failed");
            return ExitCode::FAILURE;
        }
    };

    if let (true, Some(report)) = (cli.save, report.as_ref()) {
        match write_run_dir(&cli.out_dir, &config, report) {
            Ok(manifest) => {
                let mut out = stdout.lock();
                if let Err(e) = writeln!(
                    out,
                    "Run saved to {} ({})",
                    cli.out_dir.display(),
                    manifest.result_digest
                ) {
                    error!(error = %e, "failed to report saved run");
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                error!(error = %e, dir = %cli.out_dir.display(), "failed to write run directory");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
