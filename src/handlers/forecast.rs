use axum::{extract::State, http::StatusCode, response::Json};
use common::PREDICTION_FIELD;
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use crate::config::{ForecastProfile, ProfileMode};
use crate::schemas::AppState;

/// Status and body the service answers with for `profile`.
pub fn profile_reply(profile: &ForecastProfile) -> (StatusCode, Value) {
    match profile.mode {
        ProfileMode::Valid => (
            StatusCode::OK,
            json!({ PREDICTION_FIELD: profile.prediction }),
        ),
        ProfileMode::Malformed => (StatusCode::OK, json!({ PREDICTION_FIELD: "bad" })),
        ProfileMode::Missing => (StatusCode::OK, json!({})),
        ProfileMode::ServerError => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "error": "Forecast model unavailable",
                "code": "FORECAST_UNAVAILABLE",
                "success": false,
            }),
        ),
    }
}

/// Hourly consumption forecast
#[utoipa::path(
    get,
    path = "/predict",
    tag = "forecast",
    responses(
        (status = 200, description = "Forecast for the coming hours", body = common::ForecastResponse),
        (status = 500, description = "Forecast unavailable", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn predict(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, body) = profile_reply(&state.profile);
    if status.is_success() {
        info!("Serving forecast (mode={})", state.profile.mode.as_str());
    } else {
        warn!("Simulating failure {} (mode={})", status, state.profile.mode.as_str());
    }
    (status, Json(body))
}
