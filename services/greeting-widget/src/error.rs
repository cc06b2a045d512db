//! Error types for the greeting widget

/// Errors that can occur while loading a greeting
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for greeting widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
