//! Child process execution.

use crate::error::{LauncherError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

/// Execute a program with arguments, capturing output per the options.
///
/// Spawn failures (program not found, permission denied) map to
/// [`LauncherError::CommandFailed`] with no exit code.
pub fn execute(program: &Path, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|_| LauncherError::CommandFailed {
        command: display_command(program, args),
        code: None,
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    if output.status.success() {
        Ok(CommandResult::success(stdout, stderr, duration))
    } else {
        Ok(CommandResult::failure(
            output.status.code(),
            stdout,
            stderr,
            duration,
        ))
    }
}

/// Execute a command quietly and return success/failure.
pub fn execute_check(program: &Path, args: &[&str]) -> bool {
    let options = CommandOptions {
        capture_stdout: true,
        capture_stderr: true,
        ..Default::default()
    };

    execute(program, args, &options)
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Execute a command as a foreground child with inherited stdio.
///
/// Used for the launch step: the child owns the console until it exits.
/// Returns the child's exit code, or None if it was killed by a signal.
pub fn execute_foreground(
    program: &Path,
    args: &[&str],
    cwd: Option<&Path>,
) -> Result<Option<i32>> {
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let status = cmd.status().map_err(|_| LauncherError::CommandFailed {
        command: display_command(program, args),
        code: None,
    })?;

    Ok(status.code())
}

/// Human-readable rendering of a command line for error messages.
pub fn display_command(program: &Path, args: &[&str]) -> String {
    let mut parts = vec![program.display().to_string()];
    parts.extend(args.iter().map(|s| s.to_string()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_captures_stdout() {
        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };
        let result = execute(Path::new("echo"), &["hello"], &options).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_reports_failure_exit_code() {
        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };
        let result = execute(Path::new("false"), &[], &options).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn execute_missing_program_is_command_failed() {
        let options = CommandOptions::default();
        let err = execute(
            Path::new("this-program-does-not-exist-12345"),
            &[],
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, LauncherError::CommandFailed { code: None, .. }));
    }

    #[test]
    fn execute_check_true_on_success() {
        assert!(execute_check(Path::new("true"), &[]));
    }

    #[test]
    fn execute_check_false_on_failure() {
        assert!(!execute_check(Path::new("false"), &[]));
        assert!(!execute_check(Path::new("this-program-does-not-exist-12345"), &[]));
    }

    #[test]
    fn execute_respects_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };
        let result = execute(Path::new("pwd"), &[], &options).unwrap();
        // Canonicalize both sides: macOS tempdirs live under /private
        let reported = std::fs::canonicalize(result.stdout.trim()).unwrap();
        let expected = std::fs::canonicalize(temp.path()).unwrap();
        assert_eq!(reported, expected);
    }

    #[test]
    fn execute_foreground_returns_exit_code() {
        let code = execute_foreground(Path::new("true"), &[], None).unwrap();
        assert_eq!(code, Some(0));

        let code = execute_foreground(Path::new("false"), &[], None).unwrap();
        assert_eq!(code, Some(1));
    }

    #[test]
    fn display_command_joins_parts() {
        let rendered = display_command(Path::new("/usr/bin/python3"), &["-m", "pip", "install"]);
        assert_eq!(rendered, "/usr/bin/python3 -m pip install");
    }
}
