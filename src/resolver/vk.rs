// VK Video: el canal es "{owner}_{video}". Buscamos en el HTML crudo la
// primera URL reproducible: HLS primero, MP4 progresivo como respaldo.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;

use super::{error::ResolveError, ResolverConfig};

static HLS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""[A-Za-z0-9_]+":"(https?:\\?/\\?/[^"]+?\.m3u8[^"]*)""#)
        .expect("HLS url regex is a compile-time constant and always valid")
});

static MP4_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""[A-Za-z0-9_]+":"(https?:\\?/\\?/[^"]+?\.mp4[^"]*)""#)
        .expect("MP4 url regex is a compile-time constant and always valid")
});

pub(super) async fn resolve(
    client: &Client,
    config: &ResolverConfig,
    channel: &str,
) -> Result<String, ResolveError> {
    // Validamos antes de tocar la red
    let (owner, video) = split_channel(channel)?;

    let url = format!("{}/video{owner}_{video}", config.vk_base);
    let html = client.get(&url).send().await?.error_for_status()?.text().await?;

    extract_stream_url(&html)
        .ok_or_else(|| ResolveError::NotFound(format!("no hay URL reproducible en video{owner}_{video}")))
}

// owner puede ser negativo (grupos), video siempre numérico
pub(super) fn split_channel(channel: &str) -> Result<(&str, &str), ResolveError> {
    let invalid = || ResolveError::InvalidChannel(format!("se esperaba owner_video, llegó {channel:?}"));

    let (owner, video) = channel.split_once('_').ok_or_else(invalid)?;
    let owner_digits = owner.strip_prefix('-').unwrap_or(owner);

    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !numeric(owner_digits) || !numeric(video) {
        return Err(invalid());
    }

    Ok((owner, video))
}

pub(super) fn extract_stream_url(html: &str) -> Option<String> {
    HLS_URL
        .captures(html)
        .or_else(|| MP4_URL.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace(r"\/", "/"))
}
