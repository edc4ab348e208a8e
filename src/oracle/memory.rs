//! In-memory package database.
//!
//! Renders `show` output in pip's layout and derives `Required-by` from the
//! packages installed at query time, so removals are reflected in later
//! queries the same way they are with a real package manager.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{parse_show_output, OracleError, OracleResult, PackageMetadata, PackageOracle};

/// Package database held in memory.
///
/// Every command issued against it is recorded (`"show foo"`,
/// `"uninstall foo -y"`) and can be inspected with [`MemoryOracle::commands`].
#[derive(Debug, Default)]
pub struct MemoryOracle {
    packages: RefCell<BTreeMap<String, Vec<String>>>,
    declined: BTreeSet<String>,
    failing: BTreeSet<String>,
    commands: RefCell<Vec<String>>,
}

impl MemoryOracle {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an installed package with its direct requirements.
    pub fn with_package(self, name: &str, requires: &[&str]) -> Self {
        self.install(name, requires);
        self
    }

    /// Makes removals of `name` silently leave the package in place, as when
    /// the user answers "no" to the confirmation prompt.
    pub fn decline_removal_of(mut self, name: &str) -> Self {
        self.declined.insert(name.to_string());
        self
    }

    /// Makes removals of `name` fail outright.
    pub fn fail_removal_of(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Installs (or replaces) a package.
    pub fn install(&self, name: &str, requires: &[&str]) {
        self.packages.borrow_mut().insert(
            name.to_string(),
            requires.iter().map(|r| r.to_string()).collect(),
        );
    }

    /// Returns true if the package is currently installed.
    pub fn contains(&self, name: &str) -> bool {
        self.packages.borrow().contains_key(name)
    }

    /// Returns the installed package names in sorted order.
    pub fn installed(&self) -> Vec<String> {
        self.packages.borrow().keys().cloned().collect()
    }

    /// Returns every command issued so far, oldest first.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    /// Forgets the recorded commands.
    pub fn clear_commands(&self) {
        self.commands.borrow_mut().clear();
    }

    /// Renders the `show` output for an installed package.
    pub fn render_show(&self, name: &str) -> Option<String> {
        let packages = self.packages.borrow();
        let requires = packages.get(name)?;
        let required_by: Vec<&str> = packages
            .iter()
            .filter(|(_, deps)| deps.iter().any(|d| d == name))
            .map(|(requester, _)| requester.as_str())
            .collect();

        Some(format!(
            "Name: {name}\n\
             Version: 0.0.0\n\
             Summary: \n\
             Location: /site-packages\n\
             Requires: {}\n\
             Required-by: {}\n",
            requires.join(", "),
            required_by.join(", "),
        ))
    }

    fn record(&self, command: String) {
        self.commands.borrow_mut().push(command);
    }
}

impl PackageOracle for MemoryOracle {
    fn show(&self, package: &str) -> OracleResult<PackageMetadata> {
        self.record(format!("show {}", package));
        match self.render_show(package) {
            Some(output) => parse_show_output(package, &output),
            None => Err(OracleError::QueryFailed {
                package: package.to_string(),
                message: format!("WARNING: Package(s) not found: {}", package),
            }),
        }
    }

    fn uninstall(&self, package: &str, assume_yes: bool) -> OracleResult<()> {
        let flag = if assume_yes { " -y" } else { "" };
        self.record(format!("uninstall {}{}", package, flag));

        if self.failing.contains(package) {
            return Err(OracleError::RemovalFailed {
                package: package.to_string(),
                message: format!("ERROR: Cannot uninstall {}", package),
            });
        }
        if !self.declined.contains(package) {
            // Removing something that is not installed is a no-op, as in pip.
            self.packages.borrow_mut().remove(package);
        }
        Ok(())
    }
}
