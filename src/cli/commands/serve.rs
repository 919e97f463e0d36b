use std::path::Path;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::initialize_app_state;
use crate::router::create_router;

/// Serve `GET /predict` from the given profile (or the built-in forecast)
pub async fn serve(bind_address: &str, profile: Option<&Path>) -> Result<()> {
    let state = initialize_app_state(profile).context("Failed to load forecast profile")?;
    info!(
        mode = state.profile.mode.as_str(),
        points = state.profile.prediction.len(),
        "Forecast profile ready"
    );

    let listener = TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;

    info!("Forecast available at http://{}/predict", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, create_router(state))
        .await
        .context("Forecast service stopped unexpectedly")
}
