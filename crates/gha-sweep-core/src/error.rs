//! Error kinds for listing and deleting artifacts

use reqwest::StatusCode;
use thiserror::Error;

/// Failures that abort a run.
#[derive(Error, Debug)]
pub enum CleanError {
    /// The listing call answered with something other than `200 OK`.
    ///
    /// Status and body are kept verbatim; GitHub answers `401`/`403` for bad
    /// or under-scoped tokens.
    #[error("{} - {body}", .status.as_u16())]
    Listing {
        /// Status returned by the listing endpoint.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// Transport failure, including timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The listing body was not the expected JSON.
    #[error("Malformed artifact listing: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CleanError {
    /// Whether the service rejected the credential.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Listing { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}

/// Failure to delete a single artifact. Counted, never fatal.
#[derive(Error, Debug)]
pub enum DeleteError {
    /// Any status other than `204 No Content`.
    #[error("HTTP {}", .0.as_u16())]
    Status(StatusCode),

    /// Transport failure, including timeouts.
    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_error_is_verbatim() {
        let err = CleanError::Listing {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"message":"Bad credentials"}"#.to_string(),
        };
        assert_eq!(err.to_string(), r#"401 - {"message":"Bad credentials"}"#);
        assert!(err.is_auth());
    }

    #[test]
    fn test_server_error_is_not_auth() {
        let err = CleanError::Listing {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        assert!(!err.is_auth());
    }

    #[test]
    fn test_delete_status_display() {
        assert_eq!(
            DeleteError::Status(StatusCode::NOT_FOUND).to_string(),
            "HTTP 404"
        );
    }
}
