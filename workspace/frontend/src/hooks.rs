use std::cell::Cell;
use std::rc::Rc;

use common::{FetchError, ForecastConfig, ForecastScreen, ALERT_MESSAGE};
use serde_json::Value;
use web_sys::AbortController;
use yew::prelude::*;

use crate::api_client::forecast::fetch_forecast;
use crate::ui::notify::show_blocking_alert;

pub enum ScreenAction {
    /// Outcome of the one forecast request
    Settle(Result<Value, FetchError>),
    ToggleDevice,
}

/// Reducer wrapper around the shared screen controller
#[derive(Clone, PartialEq)]
pub struct ScreenState(pub ForecastScreen);

impl Reducible for ScreenState {
    type Action = ScreenAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut screen = self.0.clone();
        match action {
            // Failures are logged once, by the controller
            ScreenAction::Settle(outcome) => {
                if screen.settle(outcome).is_none() {
                    return self;
                }
            }
            ScreenAction::ToggleDevice => {
                screen.toggle_device();
            }
        }
        Rc::new(ScreenState(screen))
    }
}

/// Owns the forecast screen state for one mount.
///
/// - Issues the forecast request once, on mount.
/// - Aborts the request and drops its outcome if the screen unmounts first.
/// - Raises the high-consumption alert whenever the forecast is replaced.
#[hook]
pub fn use_forecast_screen(config: ForecastConfig) -> UseReducerHandle<ScreenState> {
    let state = use_reducer(move || ScreenState(ForecastScreen::new(config)));

    // Fetch on mount
    {
        let config = state.0.config().clone();
        let dispatcher = state.dispatcher();

        use_effect_with((), move |_| {
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            let mounted = Rc::new(Cell::new(true));

            {
                let mounted = mounted.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = fetch_forecast(&config, signal.as_ref()).await;
                    if mounted.get() {
                        dispatcher.dispatch(ScreenAction::Settle(outcome));
                    } else {
                        log::debug!(
                            "Forecast screen unmounted before the request settled, dropping outcome (ok: {})",
                            outcome.is_ok()
                        );
                    }
                });
            }

            move || {
                mounted.set(false);
                if let Some(controller) = controller {
                    controller.abort();
                }
            }
        });
    }

    // Alert observer, keyed to forecast replacements only
    {
        let should_alert = state.0.should_alert();
        use_effect_with(state.0.forecast_revision(), move |revision| {
            if should_alert {
                log::warn!("Forecast revision {} exceeds threshold", revision);
                show_blocking_alert(ALERT_MESSAGE);
            }
            || ()
        });
    }

    state
}
