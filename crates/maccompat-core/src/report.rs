//! Human-readable rendering of the evidence trail.
//!
//! Purely presentational: one line per rule in a fixed column layout, no
//! decision logic.

use std::io;

use crate::rules::{Evidence, Verdict};

/// Renders a [`Verdict`]'s evidence for a human.
#[derive(Debug, Clone, Copy)]
pub struct EvidenceReporter {
    quiet: bool,
}

impl EvidenceReporter {
    /// `quiet` suppresses all output; callers still get the exit code.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Render a single evidence line: `{label:>14}: {status:<40} [{outcome}]`.
    pub fn render_line(entry: &Evidence) -> String {
        format!(
            "{:>14}: {:<40} [{}]",
            entry.rule.label(),
            entry.status,
            entry.outcome
        )
    }

    /// Write every evidence line to `out`.
    pub fn write_to<W: io::Write>(&self, out: &mut W, verdict: &Verdict) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        for entry in &verdict.evidence {
            writeln!(out, "{}", Self::render_line(entry))?;
        }
        Ok(())
    }

    /// Print the evidence trail to stdout. Output errors are ignored; the
    /// trail is advisory and must not affect the verdict.
    pub fn print(&self, verdict: &Verdict) {
        let stdout = io::stdout();
        let _ = self.write_to(&mut stdout.lock(), verdict);
    }
}
