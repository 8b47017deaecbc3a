use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use crate::{
    error::AppResult,
    models::{
        broadcast::{BroadcastFields, ReplaceBroadcastSchema},
        IdPayload,
    },
    routes::AppState,
    utils::payload::parse_json,
};

use super::resolve_id;

// GET /api/broadcasts (público). Más recientes primero por fecha y hora.
pub async fn list_broadcasts_handler(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let broadcasts = state.broadcasts.list().await?;
    Ok((StatusCode::OK, Json(json!({ "broadcasts": broadcasts }))))
}

// POST /api/broadcasts (admin)
pub async fn create_broadcast_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let fields: BroadcastFields = parse_json(&body)?;
    let id = state.broadcasts.create(&fields).await?;

    tracing::info!("Transmisión {} creada", id);
    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}

// PUT /api/broadcasts (admin). Reemplazo completo, el id viaja en el cuerpo.
pub async fn replace_broadcast_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let ReplaceBroadcastSchema { id, fields } = parse_json(&body)?;
    state.broadcasts.replace(id, &fields).await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}

// DELETE /api/broadcasts (admin). Borrar un id que no existe no es error.
pub async fn delete_broadcast_handler(
    State(state): State<AppState>,
    query: Option<Query<IdPayload>>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let id = resolve_id(query, &body)?;
    state.broadcasts.delete(id).await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}
