//! Launching the application and relaying its outcome.
//!
//! The launcher runs the application script as a foreground child with
//! inherited stdio, waits for it, and turns the exit status into a
//! banner plus a matching process exit code.

use std::path::Path;

use crate::error::{LauncherError, Result};
use crate::process::{display_command, execute_foreground};
use crate::runtime::Interpreter;
use crate::ui::UserInterface;

/// The outcome of a completed launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The application exited with code 0.
    Success,
    /// The application exited with a non-zero code.
    Failed(i32),
    /// The application was terminated by a signal (no exit code).
    Killed,
}

impl LaunchOutcome {
    /// The exit code the launcher should relay for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchOutcome::Success => 0,
            LaunchOutcome::Failed(code) => *code,
            LaunchOutcome::Killed => 1,
        }
    }
}

/// Run the application script in the foreground and wait for it.
///
/// The child inherits stdin/stdout/stderr and runs with the script's
/// directory as its working directory, so relative resource paths inside
/// the application resolve regardless of where the launcher was invoked.
pub fn run_application(interpreter: &Interpreter, script: &Path) -> Result<LaunchOutcome> {
    if !script.is_file() {
        return Err(LauncherError::Other(anyhow::anyhow!(
            "application script not found: {}",
            script.display()
        )));
    }

    let script_str = script.display().to_string();
    let args = [script_str.as_str()];
    tracing::info!("launching {}", display_command(&interpreter.path, &args));

    let cwd = script.parent().filter(|p| !p.as_os_str().is_empty());
    match execute_foreground(&interpreter.path, &args, cwd)? {
        Some(0) => Ok(LaunchOutcome::Success),
        Some(code) => Ok(LaunchOutcome::Failed(code)),
        None => Ok(LaunchOutcome::Killed),
    }
}

/// Show the outcome banner and convert failures into errors.
///
/// A non-zero child exit becomes [`LauncherError::ChildFailed`] so the
/// launcher's own exit code mirrors the child's.
pub fn report_outcome(
    outcome: LaunchOutcome,
    script: &Path,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    let script_name = script
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| script.display().to_string());

    match outcome {
        LaunchOutcome::Success => {
            ui.success(&format!("{} exited normally", script_name));
            Ok(())
        }
        LaunchOutcome::Failed(code) => {
            ui.error(&format!("{} exited with code {}", script_name, code));
            Err(LauncherError::ChildFailed {
                script: script_name,
                code,
            })
        }
        LaunchOutcome::Killed => {
            ui.error(&format!("{} was terminated by a signal", script_name));
            Err(LauncherError::ChildFailed {
                script: script_name,
                code: 1,
            })
        }
    }
}
