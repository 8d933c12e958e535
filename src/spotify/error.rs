use std::fmt;

use reqwest::StatusCode;

/// Failure of a single call against the Spotify Web API or accounts service.
///
/// Callers never retry on any of these; an aggregation that hits one fails
/// as a whole.
#[derive(Debug)]
pub enum ApiError {
    /// The access token was rejected (expired, revoked or malformed).
    Unauthorized,
    /// Spotify answered 429. Carries the `Retry-After` seconds when present.
    RateLimited(Option<u64>),
    /// Any other non-success status.
    Status(StatusCode),
    /// Network failure or a body that did not match the expected shape.
    Http(reqwest::Error),
    Url(url::ParseError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "access token rejected by Spotify"),
            ApiError::RateLimited(Some(secs)) => {
                write!(f, "rate limited by Spotify, retry after {}s", secs)
            }
            ApiError::RateLimited(None) => write!(f, "rate limited by Spotify"),
            ApiError::Status(status) => write!(f, "Spotify responded with {}", status),
            ApiError::Http(e) => write!(f, "request failed: {}", e),
            ApiError::Url(e) => write!(f, "invalid url: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) => Some(e),
            ApiError::Url(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Http(err)
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Url(err)
    }
}
