pub mod forecast;

use common::FetchError;
use gloo_net::http::Request;
use serde_json::Value;
use web_sys::AbortSignal;

/// Common GET request handler.
///
/// Returns the parsed JSON body untouched; shape checks belong to the caller.
/// A non-success status short-circuits before the body is read. Failures are
/// returned, not logged: the caller decides whether they matter.
pub async fn get_json(url: &str, signal: Option<&AbortSignal>) -> Result<Value, FetchError> {
    log::debug!("GET request to: {}", url);

    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http {
            status: response.status(),
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    let body: Value = response
        .json()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))?;

    log::info!("GET {} - Received data: {}", url, body);
    Ok(body)
}
