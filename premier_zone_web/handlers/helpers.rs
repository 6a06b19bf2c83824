use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use premier_zone_types::errors::ApplicationError;

/// Helper: log an application error and answer 500.
pub fn internal_error(context: &str, err: ApplicationError) -> Response {
    tracing::error!("{context}: {err}");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
}
