//! Greeting endpoint client
//!
//! `GreetingResponse` mirrors the JSON body served by `/hello`. Only the two
//! fields the widget displays are read; anything else in the body is ignored.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

use crate::config::EndpointConfig;
use crate::io::HttpClient;
use crate::WidgetError;

/// Display pattern for timestamps, e.g. `1/1/2024, 12:00:00 PM`
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Greeting as returned by /hello
#[derive(Debug, Clone, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
    pub timestamp: String,
}

/// A parsed greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Parse a `/hello` response body
pub fn parse_greeting(body: &str) -> crate::Result<Greeting> {
    let response: GreetingResponse =
        serde_json::from_str(body).map_err(|e| WidgetError::MalformedResponse(e.to_string()))?;

    let timestamp = DateTime::parse_from_rfc3339(&response.timestamp)
        .map_err(|e| {
            WidgetError::MalformedResponse(format!(
                "invalid timestamp {:?}: {}",
                response.timestamp, e
            ))
        })?
        .with_timezone(&Utc);

    Ok(Greeting {
        message: response.message,
        timestamp,
    })
}

/// GET `{base_url}/hello` and parse the greeting
pub async fn fetch_greeting(
    http: &dyn HttpClient,
    config: &EndpointConfig,
) -> crate::Result<Greeting> {
    let url = config.hello_url();
    let response = http.get(&url).await?;

    if !response.is_success() {
        tracing::debug!(
            "Non-success response from {}: status={}",
            url,
            response.status
        );
        return Err(WidgetError::Http {
            status: response.status,
        });
    }

    parse_greeting(&response.body)
}

/// Render a timestamp in the given timezone for display
pub fn format_timestamp<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
