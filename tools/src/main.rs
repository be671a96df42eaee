//! client360: database loader and HTTP server for the Client 360 backend.
//!
//! Usage:
//!   client360 init-db --db database.db
//!   client360 serve --db database.db --port 8000 --seed 42
//!   client360 --config client360.json serve

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client360_core::{
    clock::Clock, config::ServiceConfig, service::ClientService, store::seed::init_database,
};
use client360_tools::{build_router, AppState};
use log::{info, warn};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(name = "client360", version, about = "Client 360 banking demo backend")]
struct Cli {
    /// JSON config file; flags and env vars override its values.
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recreate the database and load the demo dataset.
    InitDb {
        #[arg(long, env = "CLIENT360_DB")]
        db: Option<String>,
    },
    /// Serve the HTTP API.
    Serve {
        #[arg(long, env = "CLIENT360_DB")]
        db: Option<String>,
        #[arg(long, env = "CLIENT360_HOST")]
        host: Option<String>,
        #[arg(short, long, env = "CLIENT360_PORT")]
        port: Option<u16>,
        /// Master seed for generated accounts and transactions.
        #[arg(long, env = "CLIENT360_SEED")]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match cli.command {
        Command::InitDb { db } => {
            if let Some(db) = db {
                config.db_path = db;
            }
            let counts = init_database(Path::new(&config.db_path))
                .with_context(|| format!("initialising {}", config.db_path))?;

            println!("Client 360 database ready");
            println!("  db:                     {}", config.db_path);
            println!("  metros:                 {}", counts.metros);
            println!("  markets:                {}", counts.markets);
            println!("  regions:                {}", counts.regions);
            println!("  relationship managers:  {}", counts.relationship_managers);
            println!("  relationships:          {}", counts.relationships);
            println!("  clients:                {}", counts.clients);
            Ok(())
        }
        Command::Serve { db, host, port, seed } => {
            if let Some(db) = db {
                config.db_path = db;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            config.validate()?;
            serve(config).await
        }
    }
}

async fn serve(config: ServiceConfig) -> Result<()> {
    if !Path::new(&config.db_path).exists() {
        warn!(
            "database {} does not exist; run `client360 init-db` first",
            config.db_path
        );
    }
    let seed = config.seed.unwrap_or_else(rand::random);
    let addr = format!("{}:{}", config.host, config.port);
    info!("master seed {seed}, database {}", config.db_path);

    let service = ClientService::new(config, seed, Clock::System);
    let router = build_router(AppState::new(service));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
