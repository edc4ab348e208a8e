//! Reporting of removal results.
//!
//! This module provides reporters for telling the user what was removed:
//! plain text for interactive use and JSON for scripts.

pub mod json;
pub mod text;

use serde::Serialize;
use std::io::{self, Write};

use crate::remover::RemovalOutcome;

/// Report format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable messages
    #[default]
    Text,
    /// A single JSON object, written once the run is over
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown report format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Final state of the requested package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalStatus {
    Removed,
    Declined,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalReport {
    /// The package the run was started for
    pub package: String,
    /// Whether it was removed
    pub status: RemovalStatus,
    /// Orphaned dependencies removed along with it
    pub dependencies: Vec<String>,
}

impl From<&RemovalOutcome> for RemovalReport {
    fn from(outcome: &RemovalOutcome) -> Self {
        let status = match outcome {
            RemovalOutcome::Declined { .. } => RemovalStatus::Declined,
            RemovalOutcome::Removed { .. } => RemovalStatus::Removed,
        };
        Self {
            package: outcome.package().to_string(),
            status,
            dependencies: outcome.dependencies().to_vec(),
        }
    }
}

/// Trait for reporters.
pub trait Reporter {
    /// Announce the orphaned dependencies that are about to be removed.
    fn announce_orphans<W: Write>(&self, orphans: &[String], writer: &mut W) -> io::Result<()>;

    /// Write the summary of a finished run.
    fn report<W: Write>(&self, report: &RemovalReport, writer: &mut W) -> io::Result<()>;
}

/// Announce orphans in the specified format.
pub fn announce_orphans<W: Write>(
    format: ReportFormat,
    orphans: &[String],
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => text::TextReporter.announce_orphans(orphans, writer),
        ReportFormat::Json => json::JsonReporter.announce_orphans(orphans, writer),
    }
}

/// Write a run summary in the specified format.
pub fn report<W: Write>(
    format: ReportFormat,
    report: &RemovalReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => text::TextReporter.report(report, writer),
        ReportFormat::Json => json::JsonReporter.report(report, writer),
    }
}

/// Render a run summary to a string.
pub fn report_to_string(format: ReportFormat, summary: &RemovalReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    report(format, summary, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
