//! Error types for the photo browser

use std::fmt;

#[derive(Debug)]
pub enum BrowserError {
    Api(jsonplaceholder_api::PhotoApiError),
    Config(String),
}

impl fmt::Display for BrowserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrowserError::Api(err) => write!(f, "Photo API error: {}", err),
            BrowserError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for BrowserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrowserError::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<jsonplaceholder_api::PhotoApiError> for BrowserError {
    fn from(err: jsonplaceholder_api::PhotoApiError) -> Self {
        BrowserError::Api(err)
    }
}

impl From<tracing_subscriber::filter::ParseError> for BrowserError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        BrowserError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BrowserError>;
