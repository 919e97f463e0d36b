use common::{FetchError, ForecastConfig};
use serde_json::Value;
use web_sys::AbortSignal;

use crate::api_client;

/// Fetch the raw forecast body from the configured endpoint. No retries.
pub async fn fetch_forecast(
    config: &ForecastConfig,
    signal: Option<&AbortSignal>,
) -> Result<Value, FetchError> {
    log::trace!("Fetching forecast from {}", config.endpoint_url);
    api_client::get_json(&config.endpoint_url, signal).await
}
