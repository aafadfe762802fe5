//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::Verdict;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of screening a batch of entry records
#[derive(Debug, Serialize)]
pub struct DecisionReport {
    /// Date the visas were aged against
    pub as_of: NaiveDate,
    /// Number of records screened
    pub total: usize,
    /// Records granted entry
    pub accepted: usize,
    /// Records denied entry
    pub rejected: usize,
    /// Records referred for secondary inspection
    pub secondary: usize,
    /// Records detained for quarantine
    pub quarantined: usize,
    /// Per-record decisions, in input order
    pub decisions: Vec<Decision>,
}

/// One record's decision
#[derive(Debug, Serialize)]
pub struct Decision {
    /// Traveler name as it appeared on the record
    pub traveler: String,
    /// Passport number as it appeared on the record
    pub passport: String,
    /// The verdict issued
    pub verdict: Verdict,
}

/// Result of a validate-only pass over a batch
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    /// Number of records examined
    pub total: usize,
    /// Records passing every completeness check
    pub complete: usize,
    /// Records with at least one failed check
    pub incomplete: Vec<IncompleteRecord>,
}

/// A record that failed completeness checks
#[derive(Debug, Serialize)]
pub struct IncompleteRecord {
    /// Zero-based position in the input batch
    pub index: usize,
    /// Traveler name as it appeared on the record
    pub traveler: String,
    /// Labels of the fields that failed
    pub failed: Vec<&'static str>,
}

impl DecisionReport {
    /// Assemble a report from per-record decisions, tallying the counts
    #[must_use]
    pub fn new(as_of: NaiveDate, decisions: Vec<Decision>) -> Self {
        let count = |verdict: Verdict| decisions.iter().filter(|d| d.verdict == verdict).count();
        Self {
            as_of,
            total: decisions.len(),
            accepted: count(Verdict::Accept),
            rejected: count(Verdict::Reject),
            secondary: count(Verdict::Secondary),
            quarantined: count(Verdict::Quarantine),
            decisions,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.decisions.is_empty() {
            println!("No records to screen.");
            return;
        }

        println!("Screening {} record(s) as of {}...\n", self.total, self.as_of);

        for decision in &self.decisions {
            let tag = format!("{:<10}", decision.verdict.to_string());
            println!(
                "  {} {} ({})",
                paint(&tag, decision.verdict),
                decision.traveler,
                decision.passport
            );
        }

        println!(
            "\n{} accepted, {} rejected, {} secondary, {} quarantined",
            self.accepted, self.rejected, self.secondary, self.quarantined
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ValidationReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.total == 0 {
            println!("No records to validate.");
            return;
        }

        println!(
            "Validated {} record(s): {} complete, {} incomplete.",
            self.total,
            self.complete,
            self.incomplete.len()
        );

        if self.incomplete.is_empty() {
            return;
        }

        println!("\nIncomplete:");
        for record in &self.incomplete {
            println!("  [{}] {}", record.index, record.traveler);
            println!("      failed: {}", record.failed.join(", "));
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Color a verdict tag for terminal output
fn paint(text: &str, verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Accept => text.green(),
        Verdict::Reject => text.red(),
        Verdict::Secondary => text.yellow(),
        Verdict::Quarantine => text.magenta(),
    }
}
