use log::*;
use service::AppState;
use tokio::net::TcpListener;
use tokio::signal;

mod controller;
mod cors;
mod error;
mod params;
mod response;
pub mod router;
mod sse;

pub use error::{Error, Result};

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let server_url = app_state.config.bind_address();

    info!(
        "Server starting... listening for connections on http://{}",
        server_url
    );

    let listener = TcpListener::bind(&server_url).await?;
    let app = router::define_routes(app_state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, closing open connections"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
