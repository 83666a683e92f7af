use todo_server::error::{Result as ServerErrorResult, ServerError};
use todo_server::{AppState, build_router, logger, startup};

use todo_db::ConnectionProvider;

use std::path::PathBuf;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Values from .env act as environment variables
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = todo_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;

    info!("Starting todo-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let provider = ConnectionProvider::new(&config.database);

    startup::initialize_schema(&provider, config.database.strict_startup).await?;

    let app = build_router(AppState::new(provider.clone()));

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .map_err(|source| ServerError::Io {
            action: "bind listener",
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener
        .local_addr()
        .map_err(|source| ServerError::Io {
            action: "read bound address",
            source,
        })?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await
        .map_err(|source| ServerError::Io {
            action: "serve HTTP",
            source,
        })?;

    provider.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
