//! Text rendering of the widget

use std::fmt::Display;

use chrono::{Local, TimeZone};

use crate::config::EndpointConfig;
use crate::greeting::format_timestamp;
use crate::state::RequestState;

pub const TITLE: &str = "Hello World App";
const CAPTION: &str = "Rust Hello World client";

/// Render the view for `state` with timestamps in local time
pub fn render(state: &RequestState, config: &EndpointConfig) -> String {
    render_in(state, config, &Local)
}

/// Render the view for `state` with timestamps in `tz`
pub fn render_in<Tz>(state: &RequestState, config: &EndpointConfig, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let body = match state {
        RequestState::Loading => "Loading...".to_string(),
        RequestState::Failed { error } => format!("Error: {}", error),
        RequestState::Success { message, timestamp } => format!(
            "{}\nTimestamp: {}",
            message,
            format_timestamp(timestamp, tz)
        ),
    };

    let control = state
        .control()
        .map(|control| format!("[r] {}\n", control))
        .unwrap_or_default();

    format!(
        "{title}\n\n{body}\n{control}\n{caption}\nBackend API: {base_url}\n",
        title = TITLE,
        body = body,
        control = control,
        caption = CAPTION,
        base_url = config.base_url(),
    )
}
