//! The uninstall workflow.
//!
//! The run is strictly linear: the target's requirements are read, the
//! target is removed and confirmed gone, then each requirement's requesters
//! are re-read against the post-removal state. Any oracle failure ends the
//! run; nothing is retried.

use tracing::{debug, info};

use crate::oracle::{OracleResult, PackageOracle};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The target was still installed after the removal command, usually
    /// because the confirmation prompt was declined. Nothing else was done.
    Declined {
        /// The package that was asked to be removed.
        package: String,
    },

    /// The target was removed, along with any orphaned dependencies.
    Removed {
        /// The package that was asked to be removed.
        package: String,
        /// Orphaned dependencies confirmed removed after it, in requirement
        /// order. Orphans whose removal was declined are not listed.
        dependencies: Vec<String>,
    },
}

impl RemovalOutcome {
    /// Returns the package the run was started for.
    pub fn package(&self) -> &str {
        match self {
            RemovalOutcome::Declined { package } | RemovalOutcome::Removed { package, .. } => {
                package
            }
        }
    }

    /// Returns the removed dependencies (empty when declined).
    pub fn dependencies(&self) -> &[String] {
        match self {
            RemovalOutcome::Declined { .. } => &[],
            RemovalOutcome::Removed { dependencies, .. } => dependencies,
        }
    }
}

/// Removes a package together with the dependencies it orphans.
///
/// Only direct dependencies are considered; a dependency of a dependency is
/// left alone even if it ends up unused.
#[derive(Debug)]
pub struct Uninstaller<O> {
    oracle: O,
    assume_yes: bool,
}

impl<O: PackageOracle> Uninstaller<O> {
    /// Creates an uninstaller. `assume_yes` is forwarded to every removal.
    pub fn new(oracle: O, assume_yes: bool) -> Self {
        Self { oracle, assume_yes }
    }

    /// Lists the direct requirements of an installed package.
    pub fn list_dependencies(&self, package: &str) -> OracleResult<Vec<String>> {
        Ok(self.oracle.show(package)?.requires)
    }

    /// Lists the installed packages that currently require `package`.
    pub fn list_requesters(&self, package: &str) -> OracleResult<Vec<String>> {
        Ok(self.oracle.show(package)?.required_by)
    }

    /// Removes a package and reports whether it is actually gone.
    ///
    /// `Ok(false)` means the removal command succeeded but the package is
    /// still installed.
    pub fn uninstall(&self, package: &str) -> OracleResult<bool> {
        self.oracle.uninstall(package, self.assume_yes)?;
        let removed = !self.oracle.is_installed(package)?;
        debug!(package, removed, "checked removal");
        Ok(removed)
    }

    /// Selects the members of `dependencies` that no longer have a requester
    /// once `package` is gone.
    ///
    /// Requesters that are `package` itself or another member of
    /// `dependencies` do not count. Order of `dependencies` is preserved.
    pub fn find_orphans(&self, package: &str, dependencies: &[String]) -> OracleResult<Vec<String>> {
        let mut orphans = Vec::new();
        for dependency in dependencies {
            let requesters: Vec<String> = self
                .list_requesters(dependency)?
                .into_iter()
                .filter(|r| r != package && !dependencies.contains(r))
                .collect();

            if requesters.is_empty() {
                orphans.push(dependency.clone());
            } else {
                debug!(dependency = %dependency, ?requesters, "dependency still required");
            }
        }
        Ok(orphans)
    }

    /// Runs the whole workflow for `package`.
    ///
    /// `on_orphans` is called with the removal candidates right before they
    /// are removed; it is not called when there are none.
    pub fn run<F>(&self, package: &str, on_orphans: F) -> OracleResult<RemovalOutcome>
    where
        F: FnOnce(&[String]),
    {
        // Must be read first: the metadata is unavailable once the package is gone.
        let dependencies = self.list_dependencies(package)?;
        info!(package, ?dependencies, "removing package");

        if !self.uninstall(package)? {
            info!(package, "package is still installed, stopping");
            return Ok(RemovalOutcome::Declined {
                package: package.to_string(),
            });
        }

        let orphans = self.find_orphans(package, &dependencies)?;
        let mut removed = Vec::with_capacity(orphans.len());
        if !orphans.is_empty() {
            info!(package, ?orphans, "removing orphaned dependencies");
            on_orphans(&orphans);
            for orphan in orphans {
                if self.uninstall(&orphan)? {
                    removed.push(orphan);
                } else {
                    info!(dependency = %orphan, "dependency is still installed, skipping");
                }
            }
        }

        Ok(RemovalOutcome::Removed {
            package: package.to_string(),
            dependencies: removed,
        })
    }
}
