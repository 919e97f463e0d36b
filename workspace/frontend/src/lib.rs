use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod ui;

use components::forecast::ForecastView;

#[function_component(App)]
pub fn app() -> Html {
    let config = settings::get_settings().forecast_config();
    log::trace!("Rendering forecast screen for {}", config.endpoint_url);
    html! { <ForecastView {config} /> }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Energy Saver Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Forecast URL: {}", settings.forecast_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
