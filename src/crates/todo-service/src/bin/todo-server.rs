//! Todo server binary
//!
//! Standalone gRPC server exposing `todo.TodoService` on top of SQLite.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use todo_service::{
    serve_with_shutdown, shutdown_signal, DatabaseConnection, ServerConfig, TodoServiceImpl,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todo-server")]
#[command(about = "gRPC CRUD service for todo items", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Path to a todo-server.toml configuration file
    #[arg(short, long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Address to listen on, overrides `server.listen_addr`
    #[arg(short, long, env = "TODO_LISTEN_ADDR")]
    listen: Option<String>,

    /// sqlx connection string, overrides `database.url`
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())
        .context("Failed to load server configuration")?;
    config.apply_overrides(cli.listen, cli.database_url);

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("Invalid logging filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.listen_socket_addr()?;

    tracing::info!("Connecting to database: {}", config.database.url);
    let db = DatabaseConnection::with_max_connections(
        &config.database.url,
        config.database.max_connections,
    )
    .await
    .context("Failed to connect to database")?;

    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        db.run_migrations().await.context("Failed to run migrations")?;
    }

    tracing::info!("Performing database health check");
    db.health_check().await.context("Database health check failed")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    let service = TodoServiceImpl::new(db.pool().clone());
    serve_with_shutdown(listener, service, config.server.reflection, shutdown_signal()).await?;

    db.close().await;
    tracing::info!("Todo server shut down gracefully");
    Ok(())
}
