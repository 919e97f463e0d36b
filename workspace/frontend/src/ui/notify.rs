use web_sys::window;

/// Blocking, user-dismissed notification via `window.alert`.
pub fn show_blocking_alert(message: &str) {
    let Some(window) = window() else {
        log::warn!("No window available, alert not shown: {}", message);
        return;
    };

    if let Err(e) = window.alert_with_message(message) {
        log::error!("Failed to show alert: {:?}", e);
    }
}
