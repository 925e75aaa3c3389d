//! Error types for catalog operations.
//!
//! Gateway failures are normalized into [`CatalogError`] so controllers can
//! turn them into an `Error` view-state without knowing about HTTP.

use thiserror::Error;

use super::types::MovieId;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Transport or HTTP-level failure, including rejected API keys.
    #[error("Network error: {cause}")]
    Network { cause: String, status: Option<u16> },

    /// The response body did not have the expected shape.
    #[error("Parse error: {cause}")]
    Parse { cause: String },

    /// The service has no movie with this id.
    #[error("Movie {id} not found")]
    NotFound { id: MovieId },

    /// Rating outside of 1..=5.
    #[error("Invalid rating {value}: must be between 1 and 5")]
    InvalidRating { value: i64 },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    pub fn network(cause: impl Into<String>) -> Self {
        CatalogError::Network { cause: cause.into(), status: None }
    }

    pub fn http_status(status: u16, cause: impl Into<String>) -> Self {
        CatalogError::Network { cause: cause.into(), status: Some(status) }
    }

    pub fn parse(cause: impl Into<String>) -> Self {
        CatalogError::Parse { cause: cause.into() }
    }

    /// Whether re-running the same operation could succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, CatalogError::Network { .. } | CatalogError::Parse { .. })
    }

    /// Text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Network { status: Some(401), .. }
            | CatalogError::Network { status: Some(403), .. } => {
                "The movie service rejected the API key. Check TMDB_API_KEY.".to_string()
            }
            CatalogError::Network { status: Some(429), .. } => {
                "Rate limited. Please wait a moment.".to_string()
            }
            CatalogError::Network { status: Some(code), .. } if *code >= 500 => {
                format!("The movie service is unavailable (HTTP {}).", code)
            }
            CatalogError::Network { status: Some(code), .. } => {
                format!("Request failed (HTTP {}).", code)
            }
            CatalogError::Network { cause, status: None } => {
                if cause.contains("timed out") {
                    "The movie service did not answer in time.".to_string()
                } else {
                    "Could not reach the movie service. Check your connection.".to_string()
                }
            }
            CatalogError::Parse { .. } => "Received an unexpected response from the movie service.".to_string(),
            CatalogError::NotFound { .. } => "This movie could not be found.".to_string(),
            CatalogError::InvalidRating { value } => format!("Ratings go from 1 to 5, not {}.", value),
        }
    }
}
