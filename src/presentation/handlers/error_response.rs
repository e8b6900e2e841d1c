use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::UserId;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

/// Parses the optional `user_id` form field. Zero and blank values mean no requester.
pub fn parse_user_id(raw: &str) -> Result<Option<UserId>, Response> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match raw.parse::<i64>() {
        Ok(0) => Ok(None),
        Ok(id) => Ok(Some(UserId::from_i64(id))),
        Err(_) => Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid user_id: {raw}"),
        )),
    }
}
