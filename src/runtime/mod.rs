//! Python runtime detection.
//!
//! - [`probe`] - Interpreter discovery on the search path
//! - [`version`] - Version extraction from interpreter output

pub mod probe;
pub mod version;

pub use probe::{
    find_interpreter, find_interpreter_with, parse_search_path, query_version, resolve_tool_path,
    Interpreter, INTERPRETER_CANDIDATES,
};
pub use version::{extract_version, is_python3};
