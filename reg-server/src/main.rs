use reg_server::{AppState, build_router, logger};

use reg_sheets::SheetsClient;

use std::error::Error;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env if present (development), then configuration
    let _ = dotenvy::dotenv();

    let config = reg_config::Config::load()?;
    config.validate()?;

    // Logger comes up before anything else logs
    let config_dir = reg_config::Config::config_dir()?;
    logger::initialize(&config.logging, &config_dir)?;

    info!("Starting reg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Credentials were checked by validate(); decode once and keep for the
    // lifetime of the process
    let key = config.sheets.decode_key()?;
    info!("Appending to sheets as {}", key.client_email);

    let appender = Arc::new(SheetsClient::new(&config.sheets, key));

    // Build router
    let app = build_router(AppState::new(appender));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept submissions");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
