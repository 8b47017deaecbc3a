// Kick: API JSON no oficial, /api/v2/channels/{canal}/livestream

use reqwest::{header::ACCEPT, Client, StatusCode};
use serde_json::Value;

use super::{error::ResolveError, is_plain_slug, ResolverConfig};

pub(super) async fn resolve(
    client: &Client,
    config: &ResolverConfig,
    channel: &str,
) -> Result<String, ResolveError> {
    if !is_plain_slug(channel) {
        return Err(ResolveError::NotFound(format!("canal de Kick no válido: {channel}")));
    }

    let url = format!("{}/api/v2/channels/{channel}/livestream", config.kick_api_base);
    let response = client
        .get(&url)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(ResolveError::NotFound(format!("el canal {channel} no existe en Kick")));
    }

    let body = response.error_for_status()?.text().await?;
    playback_url(&body)
}

// Sin payload = canal apagado. El payload puede venir suelto o dentro de "data".
pub(super) fn playback_url(body: &str) -> Result<String, ResolveError> {
    if body.trim().is_empty() {
        return Err(ResolveError::Offline);
    }

    let value: Value = serde_json::from_str(body)?;
    let payload = value.get("data").unwrap_or(&value);

    let is_empty = match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if is_empty {
        return Err(ResolveError::Offline);
    }

    payload
        .get("playback_url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ResolveError::NotFound("la respuesta no trae playback_url".to_string()))
}
