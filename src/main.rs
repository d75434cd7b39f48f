// src/main.rs

use anyhow::Result;
use clap::Parser;
use clipper::cli::Cli;
use clipper::config::{ConfigBuilder, OutputDestination};
use clipper::constants::version_string;
use clipper::output::writer::{format_copied_size, setup_sink};
use clipper::run;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging. RUST_LOG wins; otherwise debug builds are chatty.
    let default_directive = if cfg!(debug_assertions) {
        "clipper=debug"
    } else {
        "clipper=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();

    log::info!("Starting clipper v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // Keep panics to a single line, without a backtrace.
    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => match info.payload().downcast_ref::<String>() {
                Some(s) => s.as_str(),
                None => "Box<Any>",
            },
        };
        eprintln!("Application Error: {}", msg);
    }));

    // --- Setup ---
    let cli = Cli::parse();

    if cli.show_version {
        println!("Clipper {}", version_string());
        return Ok(());
    }

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let mut sink = setup_sink(&config);
    let result = run(&config, sink.as_mut());

    // --- Reporting ---
    match result {
        Ok(bytes) => {
            if config.output_destination == OutputDestination::Clipboard {
                println!(
                    "Copied {} to the clipboard. Ready to paste!",
                    format_copied_size(bytes)
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
