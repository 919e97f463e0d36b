/// X-axis labels `1h ..= Nh`
pub fn hour_labels(count: usize) -> Vec<String> {
    (1..=count).map(|hour| format!("{}h", hour)).collect()
}

/// Line chart input: one labelled point per forecast hour.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_forecast(forecast: &[f64]) -> Self {
        Self {
            labels: hour_labels(forecast.len()),
            values: forecast.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
