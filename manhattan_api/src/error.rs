use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use manhattan_core::response::ResponseBody;
use serde_json::json;

pub enum ApiError {
    BadRequest(String),
    /// Neither route could be computed; the body still explains why.
    NoViableRoute(ResponseBody),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::NoViableRoute(body) => (StatusCode::NOT_FOUND, Json(body)).into_response(),
        }
    }
}
