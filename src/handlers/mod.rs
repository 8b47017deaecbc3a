pub mod auth;
pub mod broadcast;
pub mod news;
pub mod stream;

use axum::{body::Bytes, extract::Query, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::{
    error::{AppError, AppResult},
    models::IdPayload,
    utils::payload::parse_json,
};

// Cualquier método que la ruta no atiende
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

// GET /health
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

// El id de un DELETE puede venir en el cuerpo (como manda el panel) o en ?id=
fn resolve_id(query: Option<Query<IdPayload>>, body: &Bytes) -> AppResult<i64> {
    if let Some(id) = query.and_then(|Query(q)| q.id) {
        return Ok(id);
    }

    let payload: IdPayload = parse_json(body)?;
    payload.id.ok_or_else(|| AppError::validation("Falta el id"))
}
