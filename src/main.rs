//! Stencil CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use stencil::assets::EmbeddedAssets;
use stencil::cli::{Cli, CommandDispatcher};
use stencil::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, since the UI already reports progress
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stencil=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stencil=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    init_tracing(cli.debug);

    tracing::debug!("Stencil starting with args: {:?}", cli);

    let mut ui = create_ui(cli.output_mode());
    let dispatcher = CommandDispatcher::new(Box::new(EmbeddedAssets::bundled()));

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
