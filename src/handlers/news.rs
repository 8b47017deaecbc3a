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
        news::{NewsFields, ReplaceNewsSchema},
        IdPayload,
    },
    routes::AppState,
    utils::payload::parse_json,
};

use super::resolve_id;

// GET /api/news (público)
pub async fn list_news_handler(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let news = state.news.list().await?;
    Ok((StatusCode::OK, Json(json!({ "news": news }))))
}

// POST /api/news (admin)
pub async fn create_news_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let fields: NewsFields = parse_json(&body)?;
    let id = state.news.create(&fields).await?;

    tracing::info!("Noticia {} creada", id);
    Ok((StatusCode::CREATED, Json(json!({ "success": true, "id": id }))))
}

// PUT /api/news (admin)
pub async fn replace_news_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let ReplaceNewsSchema { id, fields } = parse_json(&body)?;
    state.news.replace(id, &fields).await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}

// DELETE /api/news (admin)
pub async fn delete_news_handler(
    State(state): State<AppState>,
    query: Option<Query<IdPayload>>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let id = resolve_id(query, &body)?;
    state.news.delete(id).await?;

    Ok((StatusCode::OK, Json(json!({ "success": true }))))
}
