use common::{ForecastConfig, ScreenView};
use yew::prelude::*;

use super::chart::ForecastChart;
use super::device_control::DeviceControl;
use crate::hooks::{use_forecast_screen, ScreenAction};
use crate::ui::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: ForecastConfig,
}

/// The whole application: forecast chart, device status and toggle.
#[function_component(ForecastView)]
pub fn forecast_view(props: &Props) -> Html {
    let state = use_forecast_screen(props.config.clone());

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ScreenAction::ToggleDevice))
    };

    match state.0.view() {
        ScreenView::Loading { label } => html! {
            <Loading text={Some(label.to_string())} />
        },
        ScreenView::Ready { title, chart, status_line, action_label } => html! {
            <div class="screen">
                <h1 class="title">{title}</h1>
                <ForecastChart series={chart} />
                <DeviceControl {status_line} {action_label} {on_toggle} />
            </div>
        },
    }
}
