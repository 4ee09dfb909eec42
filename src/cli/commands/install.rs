//! Installing missing dependencies without launching.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::deps::{default_context, handle_gaps, DependencyRegistry, ImportChecker};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve_interpreter;

/// The install command implementation.
pub struct InstallCommand {
    interpreter_override: Option<PathBuf>,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(interpreter_override: Option<&Path>, args: InstallArgs) -> Self {
        Self {
            interpreter_override: interpreter_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let interpreter = resolve_interpreter(self.interpreter_override.as_deref())?;
        ui.success(&format!(
            "Python {} ({})",
            interpreter.version,
            interpreter.path.display()
        ));

        let registry = DependencyRegistry::new();
        let mut checker = ImportChecker::new(&interpreter);

        let gaps = checker.check_all(&registry);
        if gaps.is_empty() {
            ui.success("All dependencies satisfied");
            return Ok(CommandResult::success());
        }

        for gap in &gaps {
            ui.warning(&format!("{} is not installed", gap.dependency.name));
        }

        let interactive = ui.is_interactive() && !self.args.yes;
        let ctx = default_context();
        handle_gaps(&gaps, &mut checker, ui, interactive, true, &ctx)?;

        ui.success("All dependencies satisfied");
        Ok(CommandResult::success())
    }
}
