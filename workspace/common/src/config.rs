/// Forecast endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT_URL: &str = "http://10.0.2.2:5000/predict";

/// Predicted hourly consumption (kWh) above which disabling the device is suggested
pub const DEFAULT_THRESHOLD_KWH: f64 = 2.0;

/// Immutable configuration injected into a forecast screen at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    /// Full URL of the forecast endpoint
    pub endpoint_url: String,
    /// Alert threshold in kWh
    pub threshold_kwh: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            threshold_kwh: DEFAULT_THRESHOLD_KWH,
        }
    }
}

impl ForecastConfig {
    pub fn new(endpoint_url: impl Into<String>, threshold_kwh: f64) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            threshold_kwh,
        }
    }

    pub fn with_endpoint(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ForecastConfig::default();
        assert_eq!(config.endpoint_url, "http://10.0.2.2:5000/predict");
        assert_eq!(config.threshold_kwh, 2.0);
    }

    #[test]
    fn test_with_endpoint_keeps_threshold() {
        let config = ForecastConfig::with_endpoint("http://localhost:5000/predict");
        assert_eq!(config.endpoint_url, "http://localhost:5000/predict");
        assert_eq!(config.threshold_kwh, DEFAULT_THRESHOLD_KWH);
    }
}
