// src/main.rs

use anyhow::Result;
use clap::Parser;
use component_checklist::checklist::checklist_items;
use component_checklist::cli::{Cli, Commands};
use component_checklist::config::ConfigBuilder;
use component_checklist::errors::Error;
use component_checklist::run;

/// Exit status when the caller's configuration or input is unusable.
const EXIT_CONFIG: i32 = 2;
/// Exit status for any other fatal failure.
const EXIT_FAILURE: i32 = 1;

// Wrapper struct to handle subcommands without breaking the library's Cli struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct AppArgs {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    cli: Cli,
}

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "component_checklist=debug".parse()?
                } else {
                    "component_checklist=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting component-checklist v{}...", env!("CARGO_PKG_VERSION"));

    // Panic messages must not leak the build machine's paths.
    std::panic::set_hook(Box::new(|info| {
        let msg = match info.payload().downcast_ref::<&str>() {
            Some(s) => *s,
            None => "Box<Any>",
        };
        eprintln!(
            "Application Error: {}",
            msg.replace(env!("CARGO_MANIFEST_DIR"), "<redacted>")
        );
    }));

    let args = AppArgs::parse();

    if let Some(Commands::Checklist) = args.command {
        for item in checklist_items() {
            println!("{}", item);
        }
        return Ok(());
    }

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(args.cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    log::debug!("Configuration built successfully: {:?}", config);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(&config));

    // --- Error Handling ---
    match result {
        Ok(verdict) => {
            log::info!(
                "Detection finished: {}",
                verdict
                    .component_file
                    .as_deref()
                    .map(|path| format!("component found in {}", path))
                    .unwrap_or_else(|| "no new component".to_string())
            );
            Ok(())
        }
        Err(e @ Error::Config(_)) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}
