use std::sync::Arc;

use sun_ecommerce_mcp::{
    build_app,
    client::ApiClient,
    config::{Config, TransportMode},
    domain::{dispatcher::ToolDispatcher, registry::ToolRegistry},
    logging,
    mcp::stdio::serve_stdio,
    AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let registry = Arc::new(ToolRegistry::new()?);
    let client = ApiClient::new(config.client.clone())?;
    let state = AppState::new(ToolDispatcher::new(client, registry.clone()));

    info!(
        api_root = %config.client.api_root(),
        tools = registry.len(),
        retries = config.client.max_retries,
        "sun ecommerce mcp server starting"
    );

    match config.transport {
        TransportMode::Stdio => {
            tokio::select! {
                result = serve_stdio(state) => result?,
                _ = shutdown_signal() => info!("shutdown signal received"),
            }
        }
        TransportMode::Http(http) => {
            let bind_socket = http.bind_socket()?;
            let app = build_app(state.with_api_token(http.api_token.clone()));
            let listener = tokio::net::TcpListener::bind(bind_socket).await?;

            info!(
                bind_addr = %http.bind_addr,
                bind_port = http.bind_port,
                "http transport listening"
            );

            axum::serve(listener, app.into_make_service())
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }
    }

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
