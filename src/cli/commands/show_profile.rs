use std::path::Path;

use anyhow::Result;
use common::{FetchError, ForecastConfig, ForecastScreen, ScreenView};

use crate::config::load_profile;
use crate::handlers::forecast::profile_reply;

/// Print the reply a profile produces and the screen it leads to
pub fn show_profile(profile_path: Option<&Path>) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let (status, body) = profile_reply(&profile);

    println!("mode:   {}", profile.mode.as_str());
    println!("status: {}", status);
    println!("body:   {}", body);

    let outcome = if status.is_success() {
        Ok(body)
    } else {
        Err(FetchError::Http {
            status: status.as_u16(),
        })
    };

    let mut screen = ForecastScreen::new(ForecastConfig::default());
    let Some(settled) = screen.settle(outcome) else {
        anyhow::bail!("forecast screen settled twice");
    };

    if let Some(error) = &settled.error {
        println!("error:  {}", error);
    }
    if let ScreenView::Ready { chart, status_line, .. } = screen.view() {
        println!("points: {}", chart.len());
        println!("labels: {}", chart.labels.join(" "));
        println!("device: {}", status_line);
    }
    println!(
        "alert:  {}",
        if settled.alert { "fires (device on)" } else { "none" }
    );

    Ok(())
}
