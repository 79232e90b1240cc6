//! Console and JSON rendering over a computed outcome list.
//!
//! Reporting is pure formatting: a [`RunReport`] captures the verdict, the
//! flattened outcomes, and the wall-clock duration measured around `run()`,
//! and the [`Reporter`] renders that snapshot without ever mutating it.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::outcome::{Outcome, State};
use crate::suite::Runnable;

/// Pass/fail/skip partition of one run's outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn of(outcomes: &[Outcome]) -> Self {
        let mut summary = Summary {
            total: outcomes.len(),
            passed: 0,
            failed: 0,
            skipped: 0,
        };
        for outcome in outcomes {
            match outcome.state() {
                State::Pass => summary.passed += 1,
                State::Fail => summary.failed += 1,
                State::Skip => summary.skipped += 1,
                State::None => {}
            }
        }
        summary
    }
}

/// A completed run: overall verdict, outcomes, wall-clock duration.
#[derive(Debug)]
pub struct RunReport {
    pub ok: bool,
    pub outcomes: Vec<Outcome>,
    pub duration: Duration,
}

impl RunReport {
    /// Runs the container, measuring wall-clock duration around the call.
    pub fn capture(target: &mut dyn Runnable) -> Self {
        let started = Instant::now();
        let ok = target.run();
        let duration = started.elapsed();
        Self {
            ok,
            outcomes: target.results(),
            duration,
        }
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.outcomes)
    }
}

/// Renders a [`RunReport`] to a colored console stream or to JSON.
pub struct Reporter {
    color: ColorChoice,
}

impl Default for Reporter {
    fn default() -> Self {
        let color = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self { color }
    }
}

impl Reporter {
    pub fn with_color(color: ColorChoice) -> Self {
        Self { color }
    }

    /// Prints one line per outcome plus a summary line to stdout.
    pub fn print(&self, report: &RunReport) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color);
        self.write(&mut stdout, report)
    }

    /// Same as [`Reporter::print`], into any [`WriteColor`] sink.
    pub fn write<W: WriteColor>(&self, out: &mut W, report: &RunReport) -> io::Result<()> {
        for outcome in &report.outcomes {
            let (label, color) = match outcome.state() {
                State::Pass => ("PASS", Color::Green),
                State::Fail => ("FAIL", Color::Red),
                State::Skip => ("SKIP", Color::Yellow),
                State::None => ("NONE", Color::White),
            };
            out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
            write!(out, "{}", label)?;
            out.reset()?;
            write!(out, ": {}", outcome.path())?;
            if let Some(message) = outcome.message() {
                write!(out, " ({})", message)?;
            }
            writeln!(out)?;
        }

        let summary = report.summary();
        writeln!(
            out,
            "\nTest summary: total {}, passed {}, failed {}, skipped {}, in {:.2?}",
            summary.total, summary.passed, summary.failed, summary.skipped, report.duration
        )?;
        Ok(())
    }

    /// Serializes the report; persisting it anywhere is the caller's
    /// concern.
    pub fn to_json(&self, report: &RunReport) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            ok: bool,
            duration_ms: u128,
            summary: Summary,
            outcomes: &'a [Outcome],
        }

        serde_json::to_string_pretty(&JsonReport {
            ok: report.ok,
            duration_ms: report.duration.as_millis(),
            summary: report.summary(),
            outcomes: &report.outcomes,
        })
    }
}
