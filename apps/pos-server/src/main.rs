//! POS server binary
//!
//! Loads configuration, initialises logging, connects to the database,
//! applies migrations and serves the POS REST API until Ctrl-C.

mod config;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use clap::{Parser, Subcommand};
use config::{AppConfig, LoggingConfig};
use pos_service::PosServiceModule;
use sea_orm::{ConnectOptions, Database};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pos-server", version, about = "Point-of-sale backend")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Apply migrations, then serve the API (default)
    Serve,
    /// Apply migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;

    init_logging(&cfg.logging);

    let mut options = ConnectOptions::new(cfg.database.url.clone());
    options
        .max_connections(cfg.database.max_connections)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to {}", cfg.database.url))?;

    let module = PosServiceModule::new(cfg.pos.clone());
    module.migrate(&db).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Migrate => Ok(()),
        Command::Serve => serve(cfg, module, Arc::new(db)).await,
    }
}

async fn serve(
    cfg: AppConfig,
    module: PosServiceModule,
    db: Arc<sea_orm::DatabaseConnection>,
) -> Result<()> {
    module.init(db)?;

    let app = module
        .register_rest(axum::Router::new())?
        .layer(DefaultBodyLimit::max(cfg.server.max_upload_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            cfg.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;
    tracing::info!(bind_addr = %cfg.server.bind_addr, "POS server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("POS server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}

/// `RUST_LOG` wins over the configured level
fn init_logging(cfg: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if cfg.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
