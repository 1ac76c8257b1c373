//! Stylist service - CLI entry point
//!
//! ```sh
//! # Run with default config (~/.config/stylist-service/config.toml)
//! stylist-service
//!
//! # Custom config path and port
//! stylist-service --config /etc/stylist-service/config.toml --port 8081
//!
//! # Validate config without starting
//! stylist-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use stylist_service::config::{AppConfig, CONFIG_ENV};
use stylist_service::server::{init_tracing, ServerHandle, ServerOptions};

/// REST backend for stylist profiles, services, portfolio images and reviews.
#[derive(Parser, Debug)]
#[command(
    name = "stylist-service",
    version,
    about = "Stylist marketplace backend",
    long_about = "Stylist marketplace backend: profiles, services, portfolio images and reviews.\n\n\
                  Default config: ~/.config/stylist-service/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(stylist_service::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(e) if cli.check => {
            eprintln!("Configuration is invalid: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            cfg
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.connection_url());
        println!("   Media       : {:?}", config.media.backend);
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // no-op if the fallback path above already installed a subscriber
    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
