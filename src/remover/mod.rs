//! Orphan-aware package removal.
//!
//! This module provides the [`Uninstaller`], which removes a package and
//! then every direct dependency the removal left without a requester.
//!
//! # Example
//!
//! ```rust
//! use pip_autoremove::oracle::MemoryOracle;
//! use pip_autoremove::remover::{RemovalOutcome, Uninstaller};
//!
//! let oracle = MemoryOracle::new()
//!     .with_package("foo", &["bar"])
//!     .with_package("bar", &[]);
//!
//! let outcome = Uninstaller::new(&oracle, true).run("foo", |_| {}).unwrap();
//!
//! assert_eq!(
//!     outcome,
//!     RemovalOutcome::Removed {
//!         package: "foo".to_string(),
//!         dependencies: vec!["bar".to_string()],
//!     }
//! );
//! assert!(oracle.installed().is_empty());
//! ```

mod uninstaller;

pub use uninstaller::{RemovalOutcome, Uninstaller};
