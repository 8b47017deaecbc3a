// Twitch: heurística sobre el HTML del canal. Si Twitch cambia el markup
// vamos a dar falsos negativos.

use reqwest::Client;

use super::{error::ResolveError, is_plain_slug, ResolverConfig};

const LIVE_MARKERS: [&str; 2] = [r#""isLiveBroadcast":true"#, r#""isLive":true"#];

pub(super) async fn resolve(
    client: &Client,
    config: &ResolverConfig,
    channel: &str,
) -> Result<String, ResolveError> {
    if !is_plain_slug(channel) {
        return Err(ResolveError::NotFound(format!("canal de Twitch no válido: {channel}")));
    }

    let url = format!("{}/{channel}", config.twitch_base);
    let html = client.get(&url).send().await?.error_for_status()?.text().await?;

    if is_live(&html) {
        Ok(embed_url(channel, &config.twitch_embed_parent))
    } else {
        Err(ResolveError::Offline)
    }
}

pub(super) fn is_live(html: &str) -> bool {
    LIVE_MARKERS.iter().any(|marker| html.contains(marker))
}

pub(super) fn embed_url(channel: &str, parent: &str) -> String {
    format!("https://player.twitch.tv/?channel={channel}&parent={parent}")
}
