//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Oracle Launcher - dependency bootstrap and launch for Oracle Counter.
#[derive(Debug, Parser)]
#[command(name = "oracle-launcher")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a Python interpreter (overrides PATH discovery)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub interpreter: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; use defaults and skip the final pause
    #[arg(short = 'n', long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check dependencies, install gaps, and launch (default)
    Launch(LaunchArgs),

    /// Report interpreter and dependency status without launching
    Check(CheckArgs),

    /// Install missing dependencies without launching
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `launch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LaunchArgs {
    /// Application script to launch
    #[arg(default_value = "main.py")]
    pub script: PathBuf,

    /// Fail on missing dependencies instead of installing them
    #[arg(long)]
    pub no_install: bool,

    /// Skip the keypress pause after the application exits
    #[arg(long)]
    pub no_pause: bool,

    /// Install missing dependencies without asking
    #[arg(short, long)]
    pub yes: bool,
}

impl Default for LaunchArgs {
    fn default() -> Self {
        Self {
            script: PathBuf::from("main.py"),
            no_install: false,
            no_pause: false,
            yes: false,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Emit machine-readable JSON instead of human output
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Install missing dependencies without asking
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
