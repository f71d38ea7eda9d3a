//! Guestbook server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p guestbook-web
//! ```
//!
//! Configuration is loaded from environment variables (see `guestbook-common`).

use guestbook_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing before anything else; APP_ENV selects the format
    let tracing_config = match std::env::var("APP_ENV").as_deref() {
        Ok("production") => TracingConfig::production(),
        _ => TracingConfig::default(),
    };
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting guestbook server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.server.port,
        "Configuration loaded"
    );

    // Run the server
    guestbook_web::run(config).await?;

    Ok(())
}
