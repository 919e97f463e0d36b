#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;

    use crate::config::{ForecastProfile, ProfileMode};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level comes from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn profile(mode: ProfileMode, prediction: &[f64]) -> ForecastProfile {
        ForecastProfile {
            mode,
            prediction: prediction.to_vec(),
        }
    }

    /// Create axum app serving `profile`
    pub fn setup_test_app_with_profile(profile: ForecastProfile) -> Router {
        let _guard = init_test_tracing();
        let state = AppState {
            profile: Arc::new(profile),
        };
        create_router(state)
    }

    /// Create axum app serving the built-in profile
    pub fn setup_test_app() -> Router {
        setup_test_app_with_profile(ForecastProfile::default())
    }
}
