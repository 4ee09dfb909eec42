//! Error types for launcher operations.
//!
//! This module defines [`LauncherError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LauncherError` for the launcher's own failure taxonomy
//! - Use `anyhow::Error` (via `LauncherError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use thiserror::Error;

/// Core error type for launcher operations.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// No Python interpreter could be resolved on the search path.
    #[error("Python runtime not found: {message}")]
    RuntimeMissing { message: String },

    /// A required library is not importable and was not installed.
    #[error("Missing dependency '{dependency}': {message}")]
    DependencyMissing { dependency: String, message: String },

    /// Installing a missing dependency failed.
    #[error("Failed to install '{dependency}': {message}")]
    InstallFailed { dependency: String, message: String },

    /// Shell command failed to spawn or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The launched application exited with a non-zero status.
    #[error("'{script}' exited with code {code}")]
    ChildFailed { script: String, code: i32 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error wrapper.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LauncherError {
    /// The process exit code this error maps to.
    ///
    /// Child failures propagate the child's own code; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LauncherError::ChildFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LauncherError>;
