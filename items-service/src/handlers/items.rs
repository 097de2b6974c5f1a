use crate::models::Item;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use service_core::error::AppError;

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.store.list_all().await?;
    tracing::info!(count = items.len(), "Fetched items");
    Ok(Json(items))
}

/// Store the request body as a new item. Any JSON object is accepted.
pub async fn create_item(
    State(state): State<AppState>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(item) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected item body");
        AppError::from(rejection)
    })?;

    let fields = item.len();
    state.store.insert(item).await?;
    tracing::info!(fields, "Item inserted");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Item inserted" })),
    ))
}
