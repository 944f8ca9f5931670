//! Interactive session: prompt, validate, judge, explain.
//!
//! The session is generic over its reader and writer so the whole dialogue
//! can be driven from tests with in-memory buffers.
//!
//! # Flow
//!
//! 1. Print the banner.
//! 2. Take the attempt from the command-line argument if one was given,
//!    otherwise prompt for a line.
//! 3. Blank line or end of input: leave with no report.
//! 4. Malformed input: print the format hint and prompt again.
//! 5. Otherwise judge the attempt, print the verdict (and on a wrong code
//!    the shortest path to the right one), and return the report.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use codelock_kernel::carrier::code::Code;
use codelock_search::error::SearchError;
use codelock_search::search::{search, SearchResult};

use crate::config::LockConfig;
use crate::input::{normalize_attempt, Attempt};

/// Whether an attempt opened the lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Granted,
    Denied,
}

impl Verdict {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }
}

/// Outcome of one judged attempt.
///
/// A granted attempt still carries a (trivial) search result so that every
/// report has the same shape for rendering and persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptReport {
    pub attempt: Code,
    pub verdict: Verdict,
    pub result: SearchResult,
}

/// Error running a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Judge `attempt` against the configured target.
///
/// # Errors
///
/// Propagates [`SearchError`]; with a validated config and attempt only an
/// engine invariant violation can fail here.
pub fn evaluate(config: &LockConfig, attempt: &Code) -> Result<AttemptReport, SearchError> {
    let verdict = if attempt == config.target() {
        Verdict::Granted
    } else {
        Verdict::Denied
    };
    let result = search(attempt, config.target())?;
    info!(
        %attempt,
        verdict = verdict.as_str(),
        cost = result.cost,
        expansions = result.expansions,
        "attempt judged"
    );
    Ok(AttemptReport {
        attempt: attempt.clone(),
        verdict,
        result,
    })
}

/// `a -> b -> c`.
#[must_use]
pub fn format_path(path: &[Code]) -> String {
    path.iter()
        .map(Code::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Print the verdict block for a report.
///
/// # Errors
///
/// Returns any error from `output`.
pub fn write_report<W: Write>(output: &mut W, report: &AttemptReport) -> std::io::Result<()> {
    match report.verdict {
        Verdict::Granted => writeln!(output, "\n -- ACCESS GRANTED!\n"),
        Verdict::Denied => {
            writeln!(output, "\n ACCESS DENIED\n")?;
            writeln!(output, "Shortest path ({} moves):", report.result.cost)?;
            writeln!(output, "{}", format_path(&report.result.path))?;
            writeln!(output, "(Nodes expanded: {})\n", report.result.expansions)
        }
    }
}

/// Run one session.
///
/// `initial` is the attempt passed on the command line, if any; it is used
/// before the first prompt. Returns `None` when the user leaves without a
/// valid attempt.
///
/// # Errors
///
/// [`SessionError::Io`] on terminal failures, [`SessionError::Search`] on
/// an engine invariant violation.
pub fn run_session<R: BufRead, W: Write>(
    config: &LockConfig,
    initial: Option<&str>,
    mut input: R,
    mut output: W,
) -> Result<Option<AttemptReport>, SessionError> {
    writeln!(output, "- WELCOME HOME -\nEnter your access code:\n")?;

    let mut pending = initial
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned);

    loop {
        let from_argument = pending.is_some();
        let raw = if let Some(arg) = pending.take() {
            arg
        } else {
            write!(output, "Your code: ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output, "Exiting.")?;
                return Ok(None);
            }
            line
        };

        let normalized = normalize_attempt(&raw, config.digits());
        if from_argument {
            match &normalized {
                Ok(Attempt::Code(code)) => writeln!(output, "Attempt from argument: {code}")?,
                _ => writeln!(output, "Attempt from argument: {}", raw.trim())?,
            }
        }

        let attempt = match normalized {
            Ok(Attempt::Quit) => {
                writeln!(output, "Exiting.")?;
                return Ok(None);
            }
            Ok(Attempt::Code(code)) => code,
            Err(e) => {
                warn!(input = raw.trim(), cause = %e.cause, "rejected attempt");
                writeln!(output, "{e}")?;
                continue;
            }
        };

        let report = evaluate(config, &attempt)?;
        write_report(&mut output, &report)?;
        output.flush()?;
        return Ok(Some(report));
    }
}
