use serde_json::Value;
use tracing::{debug, error, warn};

use crate::alert::AlertRule;
use crate::chart::ChartSeries;
use crate::config::ForecastConfig;
use crate::device::DeviceStatus;
use crate::error::{FetchError, LoadError};
use crate::forecast::validate_prediction;

pub const SCREEN_TITLE: &str = "Smart Home - Energy Saver";
pub const LOADING_LABEL: &str = "Učitavanje predikcija...";

/// What the screen shows for its current state
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Loading {
        label: &'static str,
    },
    Ready {
        title: &'static str,
        chart: ChartSeries,
        status_line: String,
        action_label: &'static str,
    },
}

/// Result of settling the forecast load
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    /// Why the forecast ended up empty, if it did
    pub error: Option<LoadError>,
    /// Whether the forecast sequence was replaced (and the alert rule re-evaluated)
    pub replaced: bool,
    /// Whether the alert rule fired on that replacement
    pub alert: bool,
}

/// Controller state of the forecast screen.
///
/// Loading, forecast and device status are independent fields. Every forecast
/// replacement bumps [`ForecastScreen::forecast_revision`], which is the only
/// thing the alert observer depends on; toggling the device never touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastScreen {
    config: ForecastConfig,
    rule: AlertRule,
    loading: bool,
    forecast: Vec<f64>,
    forecast_revision: u64,
    device: DeviceStatus,
}

impl ForecastScreen {
    pub fn new(config: ForecastConfig) -> Self {
        let rule = AlertRule::new(config.threshold_kwh);
        Self {
            config,
            rule,
            loading: true,
            forecast: Vec::new(),
            forecast_revision: 0,
            device: DeviceStatus::default(),
        }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn forecast(&self) -> &[f64] {
        &self.forecast
    }

    pub fn forecast_revision(&self) -> u64 {
        self.forecast_revision
    }

    pub fn device(&self) -> DeviceStatus {
        self.device
    }

    /// Apply the outcome of the load request. Only the first call has any
    /// effect; later calls return `None` and leave the state untouched.
    pub fn settle(&mut self, outcome: Result<Value, FetchError>) -> Option<Settled> {
        if !self.loading {
            warn!("Forecast load already settled, ignoring outcome");
            return None;
        }
        self.loading = false;

        let settled = match outcome {
            Ok(body) => match validate_prediction(&body) {
                Ok(values) => {
                    debug!(points = values.len(), "Forecast accepted");
                    let alert = self.replace_forecast(values);
                    Settled { error: None, replaced: true, alert }
                }
                Err(err) => {
                    error!("Invalid prediction data: {} (body: {})", err, body);
                    let alert = self.replace_forecast(Vec::new());
                    Settled {
                        error: Some(LoadError::Validation(err)),
                        replaced: true,
                        alert,
                    }
                }
            },
            Err(err) => {
                error!("Fetch error: {}", err);
                Settled {
                    error: Some(LoadError::Fetch(err)),
                    replaced: false,
                    alert: false,
                }
            }
        };
        Some(settled)
    }

    fn replace_forecast(&mut self, values: Vec<f64>) -> bool {
        self.forecast = values;
        self.forecast_revision += 1;
        self.should_alert()
    }

    /// Alert condition against the current state. Called by the forecast
    /// observer after each replacement.
    pub fn should_alert(&self) -> bool {
        self.rule.should_alert(&self.forecast, self.device)
    }

    pub fn toggle_device(&mut self) -> DeviceStatus {
        self.device = self.device.toggled();
        debug!("Device toggled to {:?}", self.device);
        self.device
    }

    pub fn view(&self) -> ScreenView {
        if self.loading {
            return ScreenView::Loading { label: LOADING_LABEL };
        }
        ScreenView::Ready {
            title: SCREEN_TITLE,
            chart: ChartSeries::from_forecast(&self.forecast),
            status_line: self.device.status_line(),
            action_label: self.device.action_label(),
        }
    }
}
