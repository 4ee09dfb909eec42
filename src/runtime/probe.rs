//! Interpreter discovery on the search path.
//!
//! The launcher never shells out to `which` — `which` behavior varies across
//! systems and is sometimes a shell builtin with inconsistent error handling.
//! Instead, PATH entries are iterated directly and each candidate binary is
//! verified by running its version query in a throwaway process.

use crate::error::{LauncherError, Result};
use crate::process::{execute, CommandOptions};
use crate::runtime::version::{extract_version, is_python3};
use std::path::{Path, PathBuf};

/// Interpreter binary names tried in order when no override is given.
pub const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python", "py"];

/// A verified Python interpreter.
#[derive(Debug, Clone)]
pub struct Interpreter {
    /// Resolved binary path.
    pub path: PathBuf,
    /// Version reported by the version query (e.g., "3.12.1").
    pub version: String,
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_search_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Run an interpreter's version query and extract the reported version.
///
/// Python 2 prints its version to stderr, so both streams are inspected.
/// Returns None if the query fails to run, exits non-zero, or reports
/// nothing recognizable as a version.
pub fn query_version(path: &Path) -> Option<String> {
    let options = CommandOptions {
        capture_stdout: true,
        capture_stderr: true,
        ..Default::default()
    };
    let result = execute(path, &["--version"], &options).ok()?;
    if !result.success {
        return None;
    }
    let combined = format!("{}\n{}", result.stdout, result.stderr);
    extract_version(&combined)
}

/// Find a usable Python 3 interpreter.
///
/// An explicit `override_path` is verified but never substituted; otherwise
/// the candidates are tried in order against the given PATH entries. A
/// candidate that resolves but fails the version query (or reports Python 2)
/// is skipped, not fatal.
pub fn find_interpreter(
    override_path: Option<&Path>,
    path_entries: &[PathBuf],
) -> Result<Interpreter> {
    find_interpreter_with(override_path, path_entries, &query_version)
}

/// Find an interpreter with a custom version-query function.
///
/// This allows testing the resolution order without real interpreters.
pub fn find_interpreter_with<F>(
    override_path: Option<&Path>,
    path_entries: &[PathBuf],
    query: &F,
) -> Result<Interpreter>
where
    F: Fn(&Path) -> Option<String>,
{
    if let Some(path) = override_path {
        return match query(path) {
            Some(version) if is_python3(&version) => Ok(Interpreter {
                path: path.to_path_buf(),
                version,
            }),
            Some(version) => Err(LauncherError::RuntimeMissing {
                message: format!(
                    "'{}' reports Python {}, but Python 3 is required.",
                    path.display(),
                    version
                ),
            }),
            None => Err(LauncherError::RuntimeMissing {
                message: format!(
                    "'{}' is not a working Python interpreter.",
                    path.display()
                ),
            }),
        };
    }

    for candidate in INTERPRETER_CANDIDATES {
        let Some(resolved) = resolve_tool_path(candidate, path_entries) else {
            continue;
        };
        tracing::debug!("probing interpreter candidate: {}", resolved.display());
        match query(&resolved) {
            Some(version) if is_python3(&version) => {
                return Ok(Interpreter {
                    path: resolved,
                    version,
                });
            }
            Some(version) => {
                tracing::debug!("skipping {} (Python {})", resolved.display(), version);
            }
            None => {
                tracing::debug!("skipping {} (version query failed)", resolved.display());
            }
        }
    }

    Err(LauncherError::RuntimeMissing {
        message: "No Python interpreter found. Install Python 3 and ensure it is on your PATH."
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::create_dir_all(&dir_b).unwrap();

        create_fake_binary(&dir_a.join("python3"));
        create_fake_binary(&dir_b.join("python3"));

        let result = resolve_tool_path("python3", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_a.join("python3")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        let result = resolve_tool_path("python3", &[dir]);
        assert!(result.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_non_executable_file(&dir_a.join("python3"));
        create_fake_binary(&dir_b.join("python3"));

        let result = resolve_tool_path("python3", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("python3")));
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_checks_permission_bits() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("exe");
        let plain = temp.path().join("plain");
        create_fake_binary(&exe);
        create_non_executable_file(&plain);
        assert!(is_executable(&exe));
        assert!(!is_executable(&plain));
    }

    #[test]
    fn is_executable_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }

    #[test]
    fn find_interpreter_empty_path_is_runtime_missing() {
        let temp = TempDir::new().unwrap();
        let empty = temp.path().join("empty");
        fs::create_dir_all(&empty).unwrap();

        let err = find_interpreter_with(None, &[empty], &|_| None).unwrap_err();
        assert!(matches!(err, LauncherError::RuntimeMissing { .. }));
        assert!(err.to_string().contains("Install Python 3"));
    }

    #[test]
    fn find_interpreter_prefers_python3_candidate() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python3"));
        create_fake_binary(&bin.join("python"));

        let found =
            find_interpreter_with(None, &[bin.clone()], &|_| Some("3.12.1".to_string())).unwrap();
        assert_eq!(found.path, bin.join("python3"));
        assert_eq!(found.version, "3.12.1");
    }

    #[test]
    fn find_interpreter_skips_python2() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python3"));
        create_fake_binary(&bin.join("python"));

        // python3 candidate lies and reports 2.7; python reports 3.9
        let found = find_interpreter_with(None, &[bin.clone()], &|p: &Path| {
            if p.ends_with("python3") {
                Some("2.7.18".to_string())
            } else {
                Some("3.9.6".to_string())
            }
        })
        .unwrap();
        assert_eq!(found.path, bin.join("python"));
    }

    #[test]
    fn find_interpreter_skips_broken_candidate() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python3"));
        create_fake_binary(&bin.join("python"));

        let found = find_interpreter_with(None, &[bin.clone()], &|p: &Path| {
            if p.ends_with("python3") {
                None
            } else {
                Some("3.11.2".to_string())
            }
        })
        .unwrap();
        assert_eq!(found.path, bin.join("python"));
    }

    #[test]
    fn override_is_verified_not_substituted() {
        let err = find_interpreter_with(Some(Path::new("/opt/custom/python")), &[], &|_| None)
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/opt/custom/python"));
    }

    #[test]
    fn override_rejects_python2() {
        let err = find_interpreter_with(Some(Path::new("/usr/bin/python")), &[], &|_| {
            Some("2.7.18".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("Python 3 is required"));
    }

    #[test]
    fn override_accepts_python3() {
        let found = find_interpreter_with(Some(Path::new("/usr/bin/python3")), &[], &|_| {
            Some("3.10.12".to_string())
        })
        .unwrap();
        assert_eq!(found.path, PathBuf::from("/usr/bin/python3"));
        assert_eq!(found.version, "3.10.12");
    }
}
