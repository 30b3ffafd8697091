//! Error types for the JSONPlaceholder API client

use std::fmt;

/// Errors that can occur when fetching photo metadata
#[derive(Debug)]
pub enum PhotoApiError {
    /// HTTP request failed (connectivity, timeout)
    Http(Box<reqwest::Error>),
    /// Server answered with a non-success status
    Status(u16),
    /// Failed to parse the JSON response
    Json(serde_json::Error),
}

impl PhotoApiError {
    /// A short message suitable for showing to an end user
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Http(e) if e.is_timeout() => "Request is taking too long. Please try again.",
            Self::Http(e) if e.is_connect() => "Please check your internet connection.",
            Self::Http(_) => "Network problem. Please try again.",
            Self::Status(code) if *code >= 500 => "Server is temporarily unavailable.",
            Self::Status(_) => "Something went wrong. Please try again.",
            Self::Json(_) => "Data format error. Please try again later.",
        }
    }
}

impl fmt::Display for PhotoApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Photo API HTTP error: {}", e),
            Self::Status(code) => write!(f, "Photo API returned HTTP {}", code),
            Self::Json(e) => write!(f, "Photo API JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for PhotoApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e.as_ref()),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PhotoApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(Box::new(e))
    }
}

impl From<serde_json::Error> for PhotoApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for photo API operations
pub type Result<T> = std::result::Result<T, PhotoApiError>;
