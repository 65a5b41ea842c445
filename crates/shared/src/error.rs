//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// Every variant is terminal at the transport boundary: the platform only
/// ever sees a status code and a short plain-text body.
#[derive(Debug, Error)]
pub enum AppError {
    /// No rate could be produced for the request (malformed input, overflow).
    #[error("Rate unavailable: {0}")]
    RateUnavailable(String),

    /// The endpoint was called with an unsupported HTTP method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    ///
    /// A rate failure answers 404 so the platform falls back to the
    /// merchant's backup rates instead of blocking checkout.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::RateUnavailable(_) => 404,
            Self::MethodNotAllowed(_) => 405,
        }
    }

    /// Returns the error code used in logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::RateUnavailable(_) => "RATE_UNAVAILABLE",
            Self::MethodNotAllowed(_) => "METHOD_NOT_ALLOWED",
        }
    }

    /// Returns the plain-text body sent to the caller.
    ///
    /// Details stay in the logs; the body never leaks them.
    #[must_use]
    pub const fn public_body(&self) -> &'static str {
        match self {
            Self::RateUnavailable(_) => "Rate error",
            Self::MethodNotAllowed(_) => "Method Not Allowed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::RateUnavailable(String::new()).status_code(), 404);
        assert_eq!(AppError::MethodNotAllowed(String::new()).status_code(), 405);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::RateUnavailable(String::new()).error_code(),
            "RATE_UNAVAILABLE"
        );
        assert_eq!(
            AppError::MethodNotAllowed(String::new()).error_code(),
            "METHOD_NOT_ALLOWED"
        );
    }

    #[test]
    fn test_public_bodies_hide_details() {
        let err = AppError::RateUnavailable("expected value at line 1 column 1".into());
        assert_eq!(err.public_body(), "Rate error");
        assert_eq!(
            AppError::MethodNotAllowed("PUT".into()).public_body(),
            "Method Not Allowed"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::RateUnavailable("msg".into()).to_string(),
            "Rate unavailable: msg"
        );
        assert_eq!(
            AppError::MethodNotAllowed("msg".into()).to_string(),
            "Method not allowed: msg"
        );
    }
}
