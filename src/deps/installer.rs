//! Automatic remediation of missing dependencies via pip.
//!
//! Each gap gets at most one install attempt per run. After pip reports
//! success the import check is re-run; a dependency that still fails to
//! import is treated as an install failure, not silently launched anyway.

use std::path::Path;
use std::process::Command;

use crate::deps::checker::ImportChecker;
use crate::deps::status::DependencyGap;
use crate::error::{LauncherError, Result};
use crate::ui::UserInterface;

/// Hooks for the side-effecting parts of installation.
///
/// Tests swap in closures; production uses [`default_context`].
pub struct InstallerContext<'a> {
    /// Runs `python -m pip install <package>`, returning success.
    pub run_pip_install: &'a dyn Fn(&Path, &str) -> bool,
}

/// Production context that shells out to pip with inherited stdio,
/// so pip's own progress output stays visible to the user.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        run_pip_install: &|python, package| {
            Command::new(python)
                .args(["-m", "pip", "install", package])
                .status()
                .map(|status| status.success())
                .unwrap_or(false)
        },
    }
}

/// Resolve every gap by installing it, or fail with an actionable error.
///
/// When `allow_install` is false the first gap is reported without any
/// pip invocation. In interactive mode each install is confirmed first;
/// declining aborts the launch.
pub fn handle_gaps(
    gaps: &[DependencyGap],
    checker: &mut ImportChecker,
    ui: &mut dyn UserInterface,
    interactive: bool,
    allow_install: bool,
    ctx: &InstallerContext,
) -> Result<()> {
    for gap in gaps {
        let dep = &gap.dependency;

        if !allow_install {
            return Err(LauncherError::DependencyMissing {
                dependency: dep.name.clone(),
                message: format!("Install manually with: {}", dep.install_hint),
            });
        }

        if interactive {
            let key = format!("install_{}", dep.name);
            let question = format!("Install {} with pip?", dep.pip_package);
            if !ui.confirm(&key, &question, true)? {
                return Err(LauncherError::DependencyMissing {
                    dependency: dep.name.clone(),
                    message: format!(
                        "Installation declined. Install manually with: {}",
                        dep.install_hint
                    ),
                });
            }
        }

        ui.message(&format!("Installing {} with pip...", dep.pip_package));
        tracing::info!("pip install {}", dep.pip_package);

        let python = checker.interpreter().path.clone();
        if !(ctx.run_pip_install)(&python, &dep.pip_package) {
            return Err(LauncherError::InstallFailed {
                dependency: dep.name.clone(),
                message: format!(
                    "pip install failed. Install manually with: {}",
                    dep.install_hint
                ),
            });
        }

        // pip can succeed while the module still fails to import, for
        // example when it installed into a different interpreter.
        checker.invalidate(&dep.import_name);
        if !checker.check_one(dep).is_satisfied() {
            return Err(LauncherError::InstallFailed {
                dependency: dep.name.clone(),
                message: format!(
                    "pip reported success but '{}' is still not importable. \
                     Try restarting your shell, or install manually with: {}",
                    dep.import_name, dep.install_hint
                ),
            });
        }

        ui.success(&format!("{} installed", dep.name));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::registry::Dependency;
    use crate::deps::status::DependencyStatus;
    use crate::runtime::Interpreter;
    use crate::ui::MockUI;
    use std::cell::Cell;
    use std::path::PathBuf;

    fn make_interpreter() -> Interpreter {
        Interpreter {
            path: PathBuf::from("/usr/bin/python3"),
            version: "3.12.1".to_string(),
        }
    }

    fn gap_for(name: &str) -> DependencyGap {
        DependencyGap {
            dependency: Dependency::new(name),
            status: DependencyStatus::Missing,
        }
    }

    #[test]
    fn no_gaps_is_a_noop() {
        let interp = make_interpreter();
        let mut checker = ImportChecker::with_import_fn(&interp, |_, _| true);
        let mut ui = MockUI::new();
        let pip_calls = Cell::new(0usize);
        let ctx = InstallerContext {
            run_pip_install: &|_, _| {
                pip_calls.set(pip_calls.get() + 1);
                true
            },
        };

        handle_gaps(&[], &mut checker, &mut ui, false, true, &ctx).unwrap();
        assert_eq!(pip_calls.get(), 0);
    }

    #[test]
    fn install_disabled_reports_manual_hint() {
        let interp = make_interpreter();
        let mut checker = ImportChecker::with_import_fn(&interp, |_, _| false);
        let mut ui = MockUI::new();
        let ctx = InstallerContext {
            run_pip_install: &|_, _| panic!("pip must not run"),
        };

        let err = handle_gaps(&[gap_for("pynput")], &mut checker, &mut ui, false, false, &ctx)
            .unwrap_err();
        match err {
            LauncherError::DependencyMissing { dependency, message } => {
                assert_eq!(dependency, "pynput");
                assert!(message.contains("pip install pynput"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn successful_install_rechecks_and_reports_success() {
        let interp = make_interpreter();
        let installed = Cell::new(false);
        let mut checker = ImportChecker::with_import_fn(&interp, |_, _| installed.get());
        let mut ui = MockUI::new();
        let ctx = InstallerContext {
            run_pip_install: &|_, _| {
                installed.set(true);
                true
            },
        };

        handle_gaps(&[gap_for("pynput")], &mut checker, &mut ui, false, true, &ctx).unwrap();
        assert!(ui.has_message("Installing pynput"));
        assert!(ui.has_success("pynput installed"));
    }

    #[test]
    fn pip_failure_surfaces_install_hint() {
        let interp = make_interpreter();
        let mut checker = ImportChecker::with_import_fn(&interp, |_, _| false);
        let mut ui = MockUI::new();
        let ctx = InstallerContext {
            run_pip_install: &|_, _| false,
        };

        let err = handle_gaps(&[gap_for("PyQt5")], &mut checker, &mut ui, false, true, &ctx)
            .unwrap_err();
        match err {
            LauncherError::InstallFailed { dependency, message } => {
                assert_eq!(dependency, "PyQt5");
                assert!(message.contains("pip install PyQt5"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn still_not_importable_after_pip_success_is_a_failure() {
        let interp = make_interpreter();
        let mut checker = ImportChecker::with_import_fn(&interp, |_, _| false);
        let mut ui = MockUI::new();
        let ctx = InstallerContext {
            run_pip_install: &|_, _| true,
        };

        let err = handle_gaps(&[gap_for("pynput")], &mut checker, &mut ui, false, true, &ctx)
            .unwrap_err();
        match err {
            LauncherError::InstallFailed { message, .. } => {
                assert!(message.contains("still not importable"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn interactive_confirm_accepted_installs() {
        let interp = make_interpreter();
        let installed = Cell::new(false);
        let mut checker = ImportChecker::with_import_fn(&interp, |_, _| installed.get());
        let mut ui = MockUI::new();
        ui.set_confirm_response("install_pynput", true);
        let ctx = InstallerContext {
            run_pip_install: &|_, _| {
                installed.set(true);
                true
            },
        };

        handle_gaps(&[gap_for("pynput")], &mut checker, &mut ui, true, true, &ctx).unwrap();
        assert_eq!(ui.confirms_shown(), &["install_pynput".to_string()]);
        assert!(ui.has_success("pynput installed"));
    }

    #[test]
    fn interactive_confirm_declined_aborts() {
        let interp = make_interpreter();
        let mut checker = ImportChecker::with_import_fn(&interp, |_, _| false);
        let mut ui = MockUI::new();
        ui.set_confirm_response("install_pynput", false);
        let ctx = InstallerContext {
            run_pip_install: &|_, _| panic!("pip must not run after decline"),
        };

        let err = handle_gaps(&[gap_for("pynput")], &mut checker, &mut ui, true, true, &ctx)
            .unwrap_err();
        match err {
            LauncherError::DependencyMissing { message, .. } => {
                assert!(message.contains("declined"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn stops_at_first_failing_gap() {
        let interp = make_interpreter();
        let mut checker = ImportChecker::with_import_fn(&interp, |_, _| false);
        let mut ui = MockUI::new();
        let pip_calls = Cell::new(0usize);
        let ctx = InstallerContext {
            run_pip_install: &|_, _| {
                pip_calls.set(pip_calls.get() + 1);
                false
            },
        };

        let gaps = vec![gap_for("PyQt5"), gap_for("pynput")];
        let err = handle_gaps(&gaps, &mut checker, &mut ui, false, true, &ctx).unwrap_err();
        assert_eq!(pip_calls.get(), 1);
        match err {
            LauncherError::InstallFailed { dependency, .. } => assert_eq!(dependency, "PyQt5"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
