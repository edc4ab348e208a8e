//! pip-autoremove - remove a pip package along with the dependencies it orphans
//!
//! This crate wraps the package manager behind a small oracle trait and
//! implements the orphan-aware removal workflow on top of it.

pub mod oracle;
pub mod remover;
pub mod report;
