//! doctor-server: bilingual doctor search HTTP server binary entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doctor_core::Directory;
use doctor_server::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = Config::from_env();

    // Load static data; the server does not start without it
    let directory = match Directory::load(&config.mapping_file, &config.doctors_file) {
        Ok(directory) => Arc::new(directory),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load doctor directory");
            return Err(e.into());
        }
    };

    tracing::info!("Rate limiting: {} requests/second", config.rate_limit_rps);
    tracing::info!(origins = ?config.cors_origins, "CORS configured");

    let app = doctor_server::build_app(directory, &config);

    let addr: SocketAddr = config.bind_address.parse()?;
    tracing::info!("Starting doctor search server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
