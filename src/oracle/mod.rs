//! Package database oracle.
//!
//! The oracle is the package manager seen from the outside: it answers
//! `show` queries with dependency metadata and performs removals. Everything
//! the uninstaller knows about installed packages comes from here.
//!
//! # Example
//!
//! ```
//! use pip_autoremove::oracle::{MemoryOracle, PackageOracle};
//!
//! let oracle = MemoryOracle::new()
//!     .with_package("foo", &["bar"])
//!     .with_package("bar", &[]);
//!
//! let meta = oracle.show("bar").unwrap();
//! assert_eq!(meta.required_by, vec!["foo".to_string()]);
//! ```

pub mod memory;
pub mod metadata;
pub mod pip;

pub use memory::MemoryOracle;
pub use metadata::{parse_name_list, parse_show_output, PackageMetadata};
pub use pip::PipOracle;

/// Errors reported by the package manager.
///
/// Both variants display the package manager's own diagnostic text, which
/// is what ends up in front of the user.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// A `show` query failed (package not installed, unreadable output, ...).
    #[error("{message}")]
    QueryFailed { package: String, message: String },

    /// The removal command itself failed.
    #[error("{message}")]
    RemovalFailed { package: String, message: String },
}

impl OracleError {
    /// Returns the package the failing command was issued for.
    pub fn package(&self) -> &str {
        match self {
            OracleError::QueryFailed { package, .. } | OracleError::RemovalFailed { package, .. } => {
                package
            }
        }
    }
}

/// Result type alias for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Narrow view of a package manager.
pub trait PackageOracle {
    /// Queries the metadata of an installed package.
    fn show(&self, package: &str) -> OracleResult<PackageMetadata>;

    /// Removes a package, non-interactively when `assume_yes` is set.
    ///
    /// Returning `Ok` does not mean the package is gone: the user may have
    /// declined a confirmation prompt.
    fn uninstall(&self, package: &str, assume_yes: bool) -> OracleResult<()>;

    /// Checks whether the package is still known to the database.
    fn is_installed(&self, package: &str) -> OracleResult<bool> {
        Ok(self.show(package).is_ok())
    }
}

impl<O: PackageOracle + ?Sized> PackageOracle for &O {
    fn show(&self, package: &str) -> OracleResult<PackageMetadata> {
        (**self).show(package)
    }

    fn uninstall(&self, package: &str, assume_yes: bool) -> OracleResult<()> {
        (**self).uninstall(package, assume_yes)
    }

    fn is_installed(&self, package: &str) -> OracleResult<bool> {
        (**self).is_installed(package)
    }
}
