//! Screen logic and transport types shared between the forecast service and the frontend.
//! Everything here is target independent so the frontend behaviour can be tested natively.

mod alert;
mod chart;
mod config;
mod device;
mod error;
mod forecast;
mod screen;

pub use alert::{AlertRule, ALERT_MESSAGE};
pub use chart::{hour_labels, ChartSeries};
pub use config::{ForecastConfig, DEFAULT_ENDPOINT_URL, DEFAULT_THRESHOLD_KWH};
pub use device::DeviceStatus;
pub use error::{FetchError, LoadError, ValidationError};
pub use forecast::{validate_prediction, ForecastResponse, PREDICTION_FIELD};
pub use screen::{ForecastScreen, ScreenView, Settled, LOADING_LABEL, SCREEN_TITLE};
