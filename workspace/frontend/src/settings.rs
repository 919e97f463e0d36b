use common::{ForecastConfig, DEFAULT_ENDPOINT_URL, DEFAULT_THRESHOLD_KWH};
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Full URL of the forecast endpoint
    pub forecast_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            forecast_url: DEFAULT_ENDPOINT_URL.to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(forecast_url)) = storage.get_item("energy_saver_forecast_url") {
                settings.forecast_url = forecast_url;
            }

            if let Ok(Some(log_level)) = storage.get_item("energy_saver_log_level") {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }
        }

        settings
    }

    /// Full URL of the forecast endpoint
    pub fn forecast_url(&self) -> &str {
        &self.forecast_url
    }

    /// Configuration injected into the forecast screen. The threshold is fixed.
    pub fn forecast_config(&self) -> ForecastConfig {
        ForecastConfig::new(self.forecast_url.clone(), DEFAULT_THRESHOLD_KWH)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
