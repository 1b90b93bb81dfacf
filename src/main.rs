// src/main.rs

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::ValidateImporter {
            config,
            plugin_defaults,
            override_config,
        }) => commands::cmd_validate_importer(
            &config,
            plugin_defaults.as_deref(),
            override_config.as_deref(),
        ),
        Some(Commands::ValidateDistributor { config }) => {
            commands::cmd_validate_distributor(&config)
        }
        Some(Commands::Applicable {
            profile,
            units,
            repos,
            content_type,
            names,
            arches,
        }) => commands::cmd_applicable(&profile, &units, &repos, &content_type, &names, &arches),
        Some(Commands::Plugins) => commands::cmd_plugins(),
        None => {
            // No command provided, show help
            println!("isoplug v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'isoplug --help' for usage information");
            Ok(())
        }
    }
}
