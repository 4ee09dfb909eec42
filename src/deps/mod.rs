//! Dependency detection and remediation.
//!
//! The launched application needs a handful of libraries importable in
//! the selected interpreter. This module defines the registry of those
//! libraries, the import checker that finds gaps, and the pip-backed
//! installer that closes them.

pub mod checker;
pub mod installer;
pub mod registry;
pub mod status;

pub use checker::ImportChecker;
pub use installer::{default_context, handle_gaps, InstallerContext};
pub use registry::{Dependency, DependencyRegistry};
pub use status::{DependencyGap, DependencyStatus};
