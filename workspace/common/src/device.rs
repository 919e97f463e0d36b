/// Simulated smart-home device state. Starts [`DeviceStatus::On`] on every mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceStatus {
    #[default]
    On,
    Off,
}

impl DeviceStatus {
    pub fn is_on(self) -> bool {
        self == DeviceStatus::On
    }

    pub fn toggled(self) -> Self {
        match self {
            DeviceStatus::On => DeviceStatus::Off,
            DeviceStatus::Off => DeviceStatus::On,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeviceStatus::On => "UKLJUČEN",
            DeviceStatus::Off => "ISKLJUČEN",
        }
    }

    /// Text for the status line under the chart
    pub fn status_line(self) -> String {
        format!("Uređaj je: {}", self.label())
    }

    /// Button label naming the action a press performs
    pub fn action_label(self) -> &'static str {
        match self {
            DeviceStatus::On => "Isključi uređaj",
            DeviceStatus::Off => "Uključi uređaj",
        }
    }
}
