//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mbtype_core::Error;

/// Wrapper mapping core errors onto HTTP responses.
///
/// Input errors are the caller's fault (400); everything else that
/// escapes a handler is a server-side failure (500). Bodies are JSON so
/// both the form page and the API get a parseable error.
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Input(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }

        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}
