//! Oracle Launcher - dependency bootstrap and launch for Oracle Counter.
//!
//! The launcher verifies that a Python 3 interpreter and the GUI
//! application's libraries are available, installs missing libraries
//! with pip, then runs the application in the foreground and relays
//! its exit status.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`deps`] - Dependency registry, import checks, and pip installs
//! - [`error`] - Error types and result aliases
//! - [`launch`] - Foreground launch and outcome reporting
//! - [`process`] - Child process execution and environment detection
//! - [`runtime`] - Python interpreter discovery and version checks
//! - [`ui`] - Terminal output, prompts, and spinners
//!
//! # Example
//!
//! ```
//! use oracle_launcher::runtime::extract_version;
//!
//! let version = extract_version("Python 3.12.1").unwrap();
//! assert_eq!(version, "3.12.1");
//! ```

pub mod cli;
pub mod deps;
pub mod error;
pub mod launch;
pub mod process;
pub mod runtime;
pub mod ui;

pub use error::{LauncherError, Result};
