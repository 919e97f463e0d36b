use crate::device::DeviceStatus;

/// Message shown when the forecast peaks above the threshold
pub const ALERT_MESSAGE: &str = "Potrošnja je visoka! Razmislite o isključivanju uređaja.";

/// High-consumption rule evaluated on every forecast replacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertRule {
    pub threshold_kwh: f64,
}

impl AlertRule {
    pub fn new(threshold_kwh: f64) -> Self {
        Self { threshold_kwh }
    }

    /// Fires only for a non-empty forecast whose peak is strictly above the
    /// threshold while the device is on.
    pub fn should_alert(&self, forecast: &[f64], device: DeviceStatus) -> bool {
        if !device.is_on() {
            return false;
        }
        forecast
            .iter()
            .copied()
            .reduce(f64::max)
            .is_some_and(|peak| peak > self.threshold_kwh)
    }
}
