//! Error types for the image loader
//!
//! These never reach `load` callers directly: every failure collapses to a
//! completion with no image. They exist for transport implementations and
//! for logging.

use std::fmt;

/// Errors that can occur while fetching and decoding an image
#[derive(Debug)]
pub enum LoadError {
    /// The URL could not be parsed, or is not http(s)
    InvalidUrl(String),
    /// HTTP request failed (connectivity, timeout)
    Http(Box<reqwest::Error>),
    /// Server answered with a non-success status
    Status(u16),
    /// The response carried no body
    EmptyBody,
    /// The payload could not be decoded as an image
    Decode(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl(url) => write!(f, "Invalid image URL: {}", url),
            Self::Http(e) => write!(f, "HTTP error: {}", e),
            Self::Status(code) => write!(f, "HTTP status {}", code),
            Self::EmptyBody => write!(f, "Empty response body"),
            Self::Decode(msg) => write!(f, "Image decode error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(Box::new(e))
    }
}

/// Result type for image loading operations
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_display() {
        let err = LoadError::InvalidUrl("not a url".to_string());
        assert_eq!(format!("{}", err), "Invalid image URL: not a url");
    }

    #[test]
    fn test_status_display() {
        let err = LoadError::Status(404);
        assert_eq!(format!("{}", err), "HTTP status 404");
    }

    #[test]
    fn test_decode_display() {
        let err = LoadError::Decode("truncated data".to_string());
        assert_eq!(format!("{}", err), "Image decode error: truncated data");
    }

    #[test]
    fn test_error_is_debug() {
        let err = LoadError::EmptyBody;
        assert!(format!("{:?}", err).contains("EmptyBody"));
    }
}
