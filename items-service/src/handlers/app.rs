use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const WELCOME_MESSAGE: &str = "Welcome to the Mongo CRUD API!";

pub async fn index() -> &'static str {
    WELCOME_MESSAGE
}

/// Liveness only; never touches the store.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "OK" })))
}
