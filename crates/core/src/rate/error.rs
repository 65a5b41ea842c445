//! Rate quoting error types.

use tariff_shared::AppError;
use thiserror::Error;

/// Errors that prevent a quote from being produced.
#[derive(Debug, Error)]
pub enum RateError {
    /// Request body is not valid JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Body or `rate` field is an explicit `null`.
    #[error("Rate payload is null")]
    NullPayload,

    /// A line item field could not be coerced to a number.
    #[error("Item {index}: {field} is not numeric")]
    NonNumeric {
        /// Position of the item in the request.
        index: usize,
        /// Name of the offending field.
        field: &'static str,
    },

    /// An amount exceeded the decimal range.
    #[error("Amount overflow while computing {0}")]
    Overflow(&'static str),
}

impl From<RateError> for AppError {
    fn from(err: RateError) -> Self {
        Self::RateUnavailable(err.to_string())
    }
}
