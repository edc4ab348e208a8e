//! JSON reporting.
//!
//! Emits one object per run so the output can be piped into other tools.
//! Orphans are not announced separately; they appear in the final object.

use super::{RemovalReport, Reporter};
use std::io::{self, Write};

/// JSON reporter implementation.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn announce_orphans<W: Write>(&self, _orphans: &[String], _writer: &mut W) -> io::Result<()> {
        Ok(())
    }

    fn report<W: Write>(&self, report: &RemovalReport, writer: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RemovalStatus;

    #[test]
    fn test_json_report_removed() {
        let report = RemovalReport {
            package: "foo".to_string(),
            status: RemovalStatus::Removed,
            dependencies: vec!["bar".to_string(), "baz".to_string()],
        };
        let mut output = Vec::new();

        JsonReporter.report(&report, &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json_str).unwrap();

        assert_eq!(parsed["package"], "foo");
        assert_eq!(parsed["status"], "removed");
        assert_eq!(parsed["dependencies"][0], "bar");
        assert_eq!(parsed["dependencies"][1], "baz");
    }

    #[test]
    fn test_json_report_declined() {
        let report = RemovalReport {
            package: "foo".to_string(),
            status: RemovalStatus::Declined,
            dependencies: Vec::new(),
        };
        let mut output = Vec::new();

        JsonReporter.report(&report, &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["status"], "declined");
        assert!(parsed["dependencies"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_announce_is_silent() {
        let mut output = Vec::new();
        JsonReporter
            .announce_orphans(&["bar".to_string()], &mut output)
            .unwrap();

        assert!(output.is_empty());
    }
}
