//! Plain text reporting.

use super::{RemovalReport, RemovalStatus, Reporter};
use std::io::{self, Write};

/// Text reporter implementation.
pub struct TextReporter;

impl Reporter for TextReporter {
    fn announce_orphans<W: Write>(&self, orphans: &[String], writer: &mut W) -> io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "The following dependencies can be removed:")?;
        for orphan in orphans {
            writeln!(writer, "  {}", orphan)?;
        }
        writeln!(writer)
    }

    fn report<W: Write>(&self, report: &RemovalReport, writer: &mut W) -> io::Result<()> {
        // A declined removal ends quietly.
        if report.status == RemovalStatus::Declined {
            return Ok(());
        }

        writeln!(writer)?;
        if report.dependencies.is_empty() {
            writeln!(writer, "Successfully uninstalled {}", report.package)
        } else {
            writeln!(
                writer,
                "Successfully uninstalled {} and its dependencies: {}",
                report.package,
                report.dependencies.join(", ")
            )
        }
    }
}
