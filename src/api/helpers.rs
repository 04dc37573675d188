//! Response builders shared by the request handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use crate::errors::BotError;

/// Returns a 200 OK response with the given JSON body.
#[must_use]
pub fn ok_json(body: Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Response {
    let status = StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": message }))).into_response()
}

/// Maps a handler failure onto its status code and `{error}` body.
#[must_use]
pub fn error_response(error: &BotError) -> Response {
    err_response(error.status_code(), &error.to_string())
}
