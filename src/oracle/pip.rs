//! Oracle backed by the `pip` executable.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::debug;

use super::{parse_show_output, OracleError, OracleResult, PackageMetadata, PackageOracle};

/// Executable used when none is configured.
pub const DEFAULT_PIP: &str = "pip";

/// Runs `pip show` and `pip uninstall` as child processes.
///
/// Queries capture their output. Removals inherit stdin so pip can ask for
/// confirmation, and pip's stdout is forwarded to our stderr so that our
/// own stdout only carries the final report.
#[derive(Debug, Clone)]
pub struct PipOracle {
    program: PathBuf,
}

impl PipOracle {
    /// Creates an oracle that invokes `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the configured executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run_show(&self, package: &str) -> OracleResult<Output> {
        debug!(program = %self.program.display(), package, "querying package metadata");
        Command::new(&self.program)
            .args(["show", package])
            .output()
            .map_err(|e| OracleError::QueryFailed {
                package: package.to_string(),
                message: self.spawn_failure(&e),
            })
    }

    fn spawn_failure(&self, err: &io::Error) -> String {
        format!("Failed to run {}: {}", self.program.display(), err)
    }
}

impl Default for PipOracle {
    fn default() -> Self {
        Self::new(DEFAULT_PIP)
    }
}

impl PackageOracle for PipOracle {
    fn show(&self, package: &str) -> OracleResult<PackageMetadata> {
        let output = self.run_show(package)?;
        if !output.status.success() {
            return Err(OracleError::QueryFailed {
                package: package.to_string(),
                message: diagnostic(&output.stderr, || {
                    format!(
                        "{} show {} exited with {}",
                        self.program.display(),
                        package,
                        output.status
                    )
                }),
            });
        }

        parse_show_output(package, &String::from_utf8_lossy(&output.stdout))
    }

    fn uninstall(&self, package: &str, assume_yes: bool) -> OracleResult<()> {
        let mut command = Command::new(&self.program);
        command.args(["uninstall", package]);
        if assume_yes {
            command.arg("-y");
        }

        debug!(program = %self.program.display(), package, assume_yes, "removing package");
        let status = command
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| OracleError::RemovalFailed {
                package: package.to_string(),
                message: self.spawn_failure(&e),
            })?;

        if !status.success() {
            return Err(OracleError::RemovalFailed {
                package: package.to_string(),
                message: format!(
                    "{} uninstall {} exited with {}",
                    self.program.display(),
                    package,
                    status
                ),
            });
        }
        Ok(())
    }

    fn is_installed(&self, package: &str) -> OracleResult<bool> {
        // Only the exit status matters here; the metadata is not parsed.
        Ok(self.run_show(package)?.status.success())
    }
}

/// Uses the captured stderr as the diagnostic, or `fallback` if it is blank.
fn diagnostic(stderr: &[u8], fallback: impl FnOnce() -> String) -> String {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim_end();
    if text.is_empty() {
        fallback()
    } else {
        text.to_string()
    }
}
