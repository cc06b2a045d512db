//! Request state of the greeting widget

use std::fmt;

use chrono::{DateTime, Utc};

use crate::greeting::Greeting;

/// Outcome of the most recent (or in-flight) greeting request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Loading,
    Success {
        message: String,
        timestamp: DateTime<Utc>,
    },
    Failed {
        error: String,
    },
}

/// User-triggered action offered by a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Retry,
    Refresh,
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Control::Retry => write!(f, "Retry"),
            Control::Refresh => write!(f, "Refresh"),
        }
    }
}

impl RequestState {
    /// The control visible in this state, if any
    pub fn control(&self) -> Option<Control> {
        match self {
            RequestState::Loading => None,
            RequestState::Success { .. } => Some(Control::Refresh),
            RequestState::Failed { .. } => Some(Control::Retry),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

impl From<crate::Result<Greeting>> for RequestState {
    fn from(result: crate::Result<Greeting>) -> Self {
        match result {
            Ok(greeting) => RequestState::Success {
                message: greeting.message,
                timestamp: greeting.timestamp,
            },
            Err(e) => RequestState::Failed {
                error: e.to_string(),
            },
        }
    }
}
