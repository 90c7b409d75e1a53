#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Entry point for the RCCE dashboard server.

use std::path::PathBuf;

use clap::Parser;
use rcce_dataset::Dataset;
use rcce_server::config::Config;

#[derive(Parser)]
#[command(name = "rcce_server", about = "RCCE Philippines dashboard server")]
struct Cli {
    /// Port to listen on (overrides `PORT` and the config file)
    #[arg(long)]
    port: Option<u16>,
    /// Address to bind (overrides `BIND_ADDR` and the config file)
    #[arg(long)]
    bind: Option<String>,
    /// Log at debug level unless `RUST_LOG` says otherwise
    #[arg(long)]
    debug: bool,
    /// Path to a TOML config file (default: `rcce.toml` if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(debug: bool) {
    if debug {
        let mut builder = pretty_env_logger::formatted_builder();
        builder.parse_filters("debug");
        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }
        builder.init();
    } else {
        pretty_env_logger::init_custom_env("RUST_LOG");
    }
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = Config::load(cli.config.as_deref()).inspect_err(|e| {
        log::error!("{e}");
    })?;
    config.apply_env(|name| std::env::var(name).ok());
    config.apply_overrides(cli.bind, cli.port);

    log::info!("Loading dataset...");
    let dataset = Dataset::load(&config.data).inspect_err(|e| {
        log::error!("Failed to load dataset: {e}");
    })?;

    rcce_server::run_server(config, dataset).await?;

    Ok(())
}
