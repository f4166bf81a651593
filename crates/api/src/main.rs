//! API server entry point.

use std::sync::Arc;

use tokio::signal;
use welcome_api::{AppState, Config, ServerError};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

async fn run(config: Config) -> Result<(), ServerError> {
    let metrics_handle = welcome_api::install_metrics()?;
    let state = Arc::new(AppState::new(config.welcome_message.clone()));
    let app = welcome_api::create_app(state, metrics_handle);

    let listener = welcome_api::bind(&config).await?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(config.port);
    tracing::info!(
        port,
        environment = %config.environment,
        "server is running on port {port} in {} mode",
        config.environment
    );

    welcome_api::serve(listener, app, shutdown_signal()).await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = Config::from_env();
    welcome_api::init_tracing(&config);

    if let Err(err) = run(config).await {
        tracing::error!(error = %err, "server failed");
        return Err(err);
    }
    Ok(())
}
