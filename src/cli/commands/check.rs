//! Status reporting without launching.
//!
//! `oracle-launcher check` resolves the interpreter, runs every import
//! check, and reports the results. With `--json` the report is emitted
//! as a single JSON object for scripting.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::deps::{DependencyRegistry, ImportChecker};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve_interpreter;

/// Machine-readable report emitted by `check --json`.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    interpreter: InterpreterReport<'a>,
    dependencies: Vec<DependencyReport<'a>>,
}

#[derive(Debug, Serialize)]
struct InterpreterReport<'a> {
    path: &'a Path,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct DependencyReport<'a> {
    name: &'a str,
    import_name: &'a str,
    satisfied: bool,
}

/// The check command implementation.
pub struct CheckCommand {
    interpreter_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(interpreter_override: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            interpreter_override: interpreter_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let interpreter = resolve_interpreter(self.interpreter_override.as_deref())?;

        let registry = DependencyRegistry::new();
        let mut checker = ImportChecker::new(&interpreter);

        let mut statuses = Vec::with_capacity(registry.len());
        if self.args.json {
            // No decorations on stdout; the JSON report must stand alone.
            for dep in registry.iter() {
                statuses.push((dep.clone(), checker.check_one(dep)));
            }
        } else {
            let mut spinner = ui.start_spinner("Checking dependencies");
            for dep in registry.iter() {
                spinner.set_message(&format!("Checking {}", dep.name));
                statuses.push((dep.clone(), checker.check_one(dep)));
            }
            let gaps = statuses.iter().filter(|(_, s)| !s.is_satisfied()).count();
            if gaps == 0 {
                spinner.finish_success("All dependencies satisfied");
            } else {
                spinner.finish_error(&format!("{} dependencies missing", gaps));
            }
        }
        let missing = statuses.iter().filter(|(_, s)| !s.is_satisfied()).count();

        if self.args.json {
            let report = CheckReport {
                interpreter: InterpreterReport {
                    path: &interpreter.path,
                    version: &interpreter.version,
                },
                dependencies: statuses
                    .iter()
                    .map(|(dep, status)| DependencyReport {
                        name: &dep.name,
                        import_name: &dep.import_name,
                        satisfied: status.is_satisfied(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            ui.message(&format!(
                "Python {} ({})",
                interpreter.version,
                interpreter.path.display()
            ));
            for (dep, status) in &statuses {
                if status.is_satisfied() {
                    ui.success(&format!("{} importable", dep.name));
                } else {
                    ui.warning(&format!("{} missing ({})", dep.name, dep.install_hint));
                }
            }
        }

        if missing == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
