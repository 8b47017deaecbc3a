use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use crate::{
    resolver::{Platform, ResolveError, ResolvedStream},
    routes::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct StreamQuery {
    pub platform: Option<String>,
    pub channel: Option<String>,
}

#[derive(Serialize)]
struct StreamFound {
    success: bool,
    #[serde(flatten)]
    stream: ResolvedStream,
}

// GET /api/stream?platform=kick&channel=foo
// Nunca responde 5xx: URL, 404 (apagado / no encontrado) o 400 (pedido mal formado)
pub async fn resolve_stream_handler(
    State(state): State<AppState>,
    query: Option<Query<StreamQuery>>,
) -> Response {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let platform_tag = query.platform.unwrap_or_default();
    let channel = query.channel.unwrap_or_default();

    let platform = match platform_tag.parse::<Platform>() {
        Ok(p) => p,
        Err(e) => return bad_request(&platform_tag, &channel, &e),
    };

    match state.resolver.resolve(platform, &channel).await {
        Ok(stream) => (StatusCode::OK, Json(StreamFound { success: true, stream })).into_response(),
        Err(e) if e.is_bad_request() => {
            bad_request(platform.as_str(), &channel, &e)
        }
        // La causa real queda en el log, el cliente solo ve "no encontrado"
        Err(ResolveError::Offline) => not_found(platform, &channel, "El canal no está en vivo"),
        Err(_) => not_found(platform, &channel, "Stream no encontrado"),
    }
}

fn not_found(platform: Platform, channel: &str, message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "platform": platform.as_str(),
            "channel": channel,
            "error": message,
        })),
    )
        .into_response()
}

fn bad_request(platform: &str, channel: &str, error: &ResolveError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "platform": platform,
            "channel": channel,
            "error": error.to_string(),
        })),
    )
        .into_response()
}
