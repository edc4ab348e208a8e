//! Parsing of `pip show` output.
//!
//! Only two fields matter here, and they are located by position rather
//! than by scanning: after splitting the output on newlines, the third to
//! last element is the `Requires:` line and the second to last is the
//! `Required-by:` line (the last element is the empty string after the
//! trailing newline).

use super::{OracleError, OracleResult};

/// Field prefix of the dependency line.
pub const REQUIRES_FIELD: &str = "Requires:";

/// Field prefix of the reverse-dependency line.
pub const REQUIRED_BY_FIELD: &str = "Required-by:";

/// Dependency metadata of a single installed package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Packages this package depends on, in the order the oracle lists them.
    pub requires: Vec<String>,

    /// Packages that currently depend on this package.
    pub required_by: Vec<String>,
}

/// Parses the output of `show <package>`.
///
/// # Example
///
/// ```
/// use pip_autoremove::oracle::parse_show_output;
///
/// let output = "Name: foo\nVersion: 1.0\nRequires: bar, baz\nRequired-by: \n";
/// let meta = parse_show_output("foo", output).unwrap();
///
/// assert_eq!(meta.requires, vec!["bar".to_string(), "baz".to_string()]);
/// assert!(meta.required_by.is_empty());
/// ```
pub fn parse_show_output(package: &str, output: &str) -> OracleResult<PackageMetadata> {
    let lines: Vec<&str> = output.split('\n').collect();
    if lines.len() < 3 {
        return Err(malformed(package, "output is too short"));
    }

    let requires = field_value(package, lines[lines.len() - 3], REQUIRES_FIELD)?;
    let required_by = field_value(package, lines[lines.len() - 2], REQUIRED_BY_FIELD)?;

    Ok(PackageMetadata {
        requires: parse_name_list(requires),
        required_by: parse_name_list(required_by),
    })
}

/// Splits a comma-separated field into trimmed, non-empty package names.
pub fn parse_name_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn field_value<'a>(package: &str, line: &'a str, field: &str) -> OracleResult<&'a str> {
    line.strip_prefix(field).ok_or_else(|| {
        malformed(
            package,
            &format!("expected a `{}` line, found {:?}", field, line),
        )
    })
}

fn malformed(package: &str, reason: &str) -> OracleError {
    OracleError::QueryFailed {
        package: package.to_string(),
        message: format!("Unexpected metadata for {}: {}", package, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIP_SHOW_OUTPUT: &str = "Name: requests
Version: 2.31.0
Summary: Python HTTP for Humans.
Home-page: https://requests.readthedocs.io
Author: Kenneth Reitz
Author-email: me@kennethreitz.org
License: Apache 2.0
Location: /usr/lib/python3/site-packages
Requires: certifi, charset-normalizer, idna, urllib3
Required-by: httpie, pip-review
";

    #[test]
    fn test_parse_show_output_full() {
        let meta = parse_show_output("requests", PIP_SHOW_OUTPUT).unwrap();

        assert_eq!(
            meta.requires,
            vec!["certifi", "charset-normalizer", "idna", "urllib3"]
        );
        assert_eq!(meta.required_by, vec!["httpie", "pip-review"]);
    }

    #[test]
    fn test_parse_show_output_empty_fields() {
        let output = "Name: six\nVersion: 1.16.0\nRequires: \nRequired-by: \n";
        let meta = parse_show_output("six", output).unwrap();

        assert!(meta.requires.is_empty());
        assert!(meta.required_by.is_empty());
    }

    #[test]
    fn test_parse_show_output_fields_without_space() {
        let output = "Name: six\nRequires:\nRequired-by:\n";
        let meta = parse_show_output("six", output).unwrap();

        assert_eq!(meta, PackageMetadata::default());
    }

    #[test]
    fn test_parse_show_output_crlf() {
        let output = "Name: foo\r\nRequires: bar\r\nRequired-by: qux\r\n";
        let meta = parse_show_output("foo", output).unwrap();

        assert_eq!(meta.requires, vec!["bar"]);
        assert_eq!(meta.required_by, vec!["qux"]);
    }

    #[test]
    fn test_parse_show_output_too_short() {
        let result = parse_show_output("foo", "Name: foo\n");

        assert!(matches!(result, Err(OracleError::QueryFailed { .. })));
    }

    #[test]
    fn test_parse_show_output_wrong_layout() {
        // Missing trailing newline shifts every line by one.
        let output = "Name: foo\nRequires: bar\nRequired-by: ";
        let err = parse_show_output("foo", output).unwrap_err();

        assert_eq!(err.package(), "foo");
        assert!(err.to_string().contains("Requires:"));
    }

    #[test]
    fn test_parse_name_list() {
        assert_eq!(parse_name_list(" a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_name_list("a,,  ,b"), vec!["a", "b"]);
        assert!(parse_name_list("").is_empty());
        assert!(parse_name_list("   ").is_empty());
    }
}
