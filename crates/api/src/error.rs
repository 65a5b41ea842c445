//! Boundary conversion of application errors into HTTP responses.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tariff_core::RateError;
use tariff_shared::AppError;
use tracing::warn;

/// Wrapper that renders an `AppError` as a plain-text response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<RateError> for ApiError {
    fn from(err: RateError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        warn!(error = %self.0, code = self.0.error_code(), "Request rejected");

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0.public_body(),
        )
            .into_response()
    }
}
