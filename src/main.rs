//! Oracle Launcher CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use oracle_launcher::cli::{Cli, CommandDispatcher, Commands};
use oracle_launcher::process::is_ci;
use oracle_launcher::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("oracle_launcher=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("oracle_launcher=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let is_interactive = !cli.non_interactive && !is_ci();

    // The error-path pause only applies to the launch sequence, where
    // the console window may close the moment the process exits.
    let pause_on_error = match &cli.command {
        Some(Commands::Launch(args)) => !args.no_pause,
        None => true,
        Some(_) => false,
    };

    let mut ui = create_ui(is_interactive, output_mode);
    let dispatcher = CommandDispatcher::new(cli.interpreter.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code.clamp(0, 255) as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if pause_on_error {
                ui.pause("Press any key to close...");
            }
            ExitCode::from(e.exit_code().clamp(0, 255) as u8)
        }
    }
}
