//! Child process execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{
    display_command, execute, execute_check, execute_foreground, CommandOptions, CommandResult,
};
pub use platform::is_ci;
