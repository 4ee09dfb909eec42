//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed through [`CommandDispatcher`]; running the binary with no
//! subcommand dispatches `launch` with its defaults.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod launch;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::error::Result;
use crate::runtime::{find_interpreter, parse_search_path, Interpreter};

/// Resolve the interpreter from the override or the search path.
pub(crate) fn resolve_interpreter(override_path: Option<&Path>) -> Result<Interpreter> {
    let path_entries = parse_search_path();
    find_interpreter(override_path, &path_entries)
}
