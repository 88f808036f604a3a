use axum::http::StatusCode;
use axum::Json;

use crate::api::models::TextResponse;

pub fn success(text: String) -> (StatusCode, Json<TextResponse>) {
    (StatusCode::OK, Json(TextResponse { text }))
}
