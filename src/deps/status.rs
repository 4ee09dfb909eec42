//! Dependency status types for gap detection.

use super::registry::Dependency;

/// The result of checking a single dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyStatus {
    /// The module imports cleanly in the selected interpreter.
    Satisfied,
    /// The import check failed; the library needs installing.
    Missing,
}

impl DependencyStatus {
    /// Whether the dependency is ready to use.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, DependencyStatus::Satisfied)
    }
}

/// A dependency that failed its import check, with everything needed
/// to remediate it.
#[derive(Debug, Clone)]
pub struct DependencyGap {
    /// The dependency that was checked.
    pub dependency: Dependency,
    /// Its status at check time.
    pub status: DependencyStatus,
}
