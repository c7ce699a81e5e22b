//! Entry point for the Marquee booking directory server.
//!
//! Initializes logging, loads configuration from environment variables,
//! connects to `PostgreSQL` and runs migrations, loads the page templates,
//! then serves the HTTP surface until the process is terminated.

use marquee_db::PostgresPool;
use marquee_server::config::AppConfig;
use marquee_server::server::{ServerConfig, start_server};
use marquee_server::state::AppState;
use marquee_server::templates::TemplateEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, database setup, template loading,
/// or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("marquee-server starting");

    // Load configuration from environment
    let config = AppConfig::from_env()?;
    info!(
        host = %config.host,
        port = config.port,
        templates_dir = %config.templates_dir,
        "configuration loaded"
    );

    // Connect to PostgreSQL and bring the schema up to date
    let db = PostgresPool::connect_url(&config.database_url).await?;
    db.run_migrations().await?;

    // Load page templates
    let templates = TemplateEngine::new(&config.templates_dir)?;
    info!(templates_dir = %config.templates_dir, "page templates loaded");

    let state = AppState::new(db, templates);

    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
