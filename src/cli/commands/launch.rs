//! The full bootstrap sequence: verify, remediate, launch, report.
//!
//! This is the default command. It runs the four steps in order and
//! stops at the first unrecoverable failure; the application is only
//! started once the interpreter and every dependency check out.

use std::path::{Path, PathBuf};

use crate::cli::args::LaunchArgs;
use crate::deps::{default_context, handle_gaps, DependencyRegistry, ImportChecker};
use crate::launch::{report_outcome, run_application};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve_interpreter;

/// The launch command implementation.
pub struct LaunchCommand {
    interpreter_override: Option<PathBuf>,
    args: LaunchArgs,
}

impl LaunchCommand {
    /// Create a new launch command.
    pub fn new(interpreter_override: Option<&Path>, args: LaunchArgs) -> Self {
        Self {
            interpreter_override: interpreter_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for LaunchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        ui.show_header("Oracle Counter");

        let interpreter = resolve_interpreter(self.interpreter_override.as_deref())?;
        ui.success(&format!(
            "Python {} ({})",
            interpreter.version,
            interpreter.path.display()
        ));

        let registry = DependencyRegistry::new();
        let mut checker = ImportChecker::new(&interpreter);

        ui.message("Checking dependencies...");
        let gaps = checker.check_all(&registry);
        if gaps.is_empty() {
            ui.success("All dependencies satisfied");
        } else {
            for gap in &gaps {
                ui.warning(&format!("{} is not installed", gap.dependency.name));
            }
            let interactive = ui.is_interactive() && !self.args.yes;
            let ctx = default_context();
            handle_gaps(
                &gaps,
                &mut checker,
                ui,
                interactive,
                !self.args.no_install,
                &ctx,
            )?;
        }

        ui.message(&format!("Starting {}...", self.args.script.display()));
        let outcome = run_application(&interpreter, &self.args.script)?;

        // The banner is printed here; the exit code is relayed through
        // CommandResult so the error is not reported twice.
        let result = match report_outcome(outcome, &self.args.script, ui) {
            Ok(()) => CommandResult::success(),
            Err(e) => CommandResult::failure(e.exit_code()),
        };

        if !self.args.no_pause {
            ui.pause("Press any key to close...");
        }

        Ok(result)
    }
}
