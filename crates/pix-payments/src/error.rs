//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Transport failure or undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The payment API answered with a non-2xx status
    #[error("Request failed with status code {status}: {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// HTTP status code returned by the API, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            PaymentError::Api { status, .. } => Some(*status),
            PaymentError::Http(e) => e.status().map(|s| s.as_u16()),
            PaymentError::Config(_) => None,
        }
    }

    /// Whether the API rejected our credential
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = PaymentError::Api {
            status: 400,
            message: "payer.email must be a valid email".into(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with status code 400: payer.email must be a valid email"
        );
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized() {
        let err = PaymentError::Api {
            status: 401,
            message: "invalid access token".into(),
        };
        assert!(err.is_unauthorized());
        assert!(!PaymentError::Config("bad url".into()).is_unauthorized());
    }
}
