use std::sync::Arc;

use common::ForecastResponse;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::config::{ForecastProfile, ProfileMode};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Active forecast profile
    pub profile: Arc<ForecastProfile>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Active profile mode
    pub mode: ProfileMode,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecast::predict,
    ),
    components(
        schemas(
            ForecastResponse,
            ErrorResponse,
            HealthResponse,
            ProfileMode,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecast", description = "Hourly energy consumption forecast"),
    ),
    info(
        title = "Energy Saver Forecast API",
        description = "Development stand-in for the forecasting service consumed by the Energy Saver screen",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
