//! Error envelope
//!
//! Every failure leaves the API as
//! `{"success": false, "error": <status>, "message": <text>}`. Only the
//! kind's public message is sent; the detailed message goes to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use trivia_core::errors::{ExError, TriviaError};
use trivia_core_types::RequestContext;

#[derive(Debug)]
pub struct ApiError {
    error: ExError,
}

impl ApiError {
    /// Wrap an error and tag it with the request id
    pub fn new(error: impl Into<ExError>, ctx: &RequestContext) -> Self {
        Self {
            error: error.into().with_request_id(ctx.request_id.clone()),
        }
    }

    pub fn error(&self) -> &ExError {
        &self.error
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.kind().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<ExError> for ApiError {
    fn from(error: ExError) -> Self {
        Self { error }
    }
}

impl From<TriviaError> for ApiError {
    fn from(error: TriviaError) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let request_id = self
            .error
            .request_id()
            .map(|id| id.to_string())
            .unwrap_or_default();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                err.code = self.error.code(),
                op = self.error.op().unwrap_or("unknown"),
                status = status.as_u16(),
                "{}",
                self.error
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                err.code = self.error.code(),
                op = self.error.op().unwrap_or("unknown"),
                status = status.as_u16(),
                "{}",
                self.error
            );
        }

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.error.kind().public_message(),
        });
        (status, Json(body)).into_response()
    }
}
