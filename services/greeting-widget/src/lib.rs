//! Greeting Widget - terminal client for the Hello World API
//!
//! Fetches a greeting message and timestamp from `{base_url}/hello` and shows
//! one of three views: loading, error with retry, or the greeting with refresh.

pub mod config;
pub mod error;
pub mod greeting;
pub mod io;
pub mod state;
pub mod terminal;
pub mod view;
pub mod widget;

pub use config::EndpointConfig;
pub use error::{Result, WidgetError};
pub use state::{Control, RequestState};
pub use widget::GreetingWidget;
