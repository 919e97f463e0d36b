mod chart;
mod device_control;
mod view;

pub use view::ForecastView;
