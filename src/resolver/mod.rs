//! Resolución "best effort" de canales en vivo a una URL reproducible.
//!
//! Cada plataforma es un adaptador aislado (`kick`, `twitch`, `vk`) detrás de
//! [`StreamResolver::resolve`]. Ninguna falla de red o de parseo sale de aquí
//! como error interno: el llamador recibe una URL o un [`ResolveError`].

mod error;
mod kick;
mod twitch;
mod vk;

use std::{fmt, str::FromStr, sync::Arc, time::Duration};

use reqwest::Client;
use serde::Serialize;

pub use error::ResolveError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Kick,
    Twitch,
    Vk,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Kick => "kick",
            Platform::Twitch => "twitch",
            Platform::Vk => "vk",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kick" => Ok(Platform::Kick),
            "twitch" => Ok(Platform::Twitch),
            "vk" | "vkvideo" | "vk_video" => Ok(Platform::Vk),
            other => Err(ResolveError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Parámetros del resolvedor. Las URLs base existen para poder apuntar los
/// adaptadores a un servidor falso en los tests.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Espera máxima por cada petición saliente.
    pub timeout: Duration,
    /// Dominio que Twitch exige en el parámetro `parent` del embed.
    pub twitch_embed_parent: String,
    pub kick_api_base: String,
    pub twitch_base: String,
    pub vk_base: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            twitch_embed_parent: "localhost".to_string(),
            kick_api_base: "https://kick.com".to_string(),
            twitch_base: "https://www.twitch.tv".to_string(),
            vk_base: "https://vk.com".to_string(),
        }
    }
}

/// Resultado efímero: no se guarda ni se cachea.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedStream {
    pub platform: Platform,
    pub channel: String,
    pub stream_url: String,
}

#[derive(Clone)]
pub struct StreamResolver {
    client: Client,
    config: Arc<ResolverConfig>,
}

impl StreamResolver {
    pub fn new(config: ResolverConfig) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Una sola plataforma por llamada, sin reintentos.
    pub async fn resolve(
        &self,
        platform: Platform,
        channel: &str,
    ) -> Result<ResolvedStream, ResolveError> {
        let channel = channel.trim();
        if channel.is_empty() {
            return Err(ResolveError::InvalidChannel("canal vacío".to_string()));
        }

        let result = match platform {
            Platform::Kick => kick::resolve(&self.client, &self.config, channel).await,
            Platform::Twitch => twitch::resolve(&self.client, &self.config, channel).await,
            Platform::Vk => vk::resolve(&self.client, &self.config, channel).await,
        };

        match result {
            Ok(stream_url) => {
                tracing::debug!(%platform, channel, %stream_url, "Stream resuelto");
                Ok(ResolvedStream {
                    platform,
                    channel: channel.to_string(),
                    stream_url,
                })
            }
            Err(e) => {
                tracing::warn!(%platform, channel, error = %e, "No se pudo resolver el stream");
                Err(e)
            }
        }
    }
}

// Nombres de canal de Kick y Twitch: letras, dígitos, '_' y '-'
fn is_plain_slug(channel: &str) -> bool {
    !channel.is_empty()
        && channel
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
