use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

use crate::{resolver::ResolverConfig, routes::REQUEST_TIMEOUT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} no está definido en el entorno")]
    Missing(&'static str),

    #[error("valor inválido para {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

// Todo lo que el servicio lee del entorno (o del .env), parseado una sola vez
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub admin_initial_password: Option<String>,
    pub resolver: ResolverConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let resolver = ResolverConfig {
            timeout: resolver_timeout(parse_or("RESOLVER_TIMEOUT_SECS", 10)?)?,
            twitch_embed_parent: env::var("TWITCH_EMBED_PARENT")
                .unwrap_or_else(|_| "localhost".to_string()),
            ..ResolverConfig::default()
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5)?,
            port: parse_or("PORT", 3000)?,
            jwt_secret: required("JWT_SECRET")?,
            token_ttl: token_ttl(parse_or("TOKEN_TTL_MINUTES", 480)?)?,
            admin_initial_password: env::var("ADMIN_INITIAL_PASSWORD")
                .ok()
                .filter(|p| !p.is_empty()),
            resolver,
        })
    }
}

// Tiene que vencer antes que la petición completa: si no, el cliente recibe 408
// en lugar de un 404 con cuerpo
fn resolver_timeout(secs: u64) -> Result<Duration, ConfigError> {
    let timeout = Duration::from_secs(secs);
    if secs == 0 || timeout >= REQUEST_TIMEOUT {
        return Err(ConfigError::Invalid {
            name: "RESOLVER_TIMEOUT_SECS",
            value: secs.to_string(),
        });
    }
    Ok(timeout)
}

// La expiración (ahora + ttl) tiene que caber en el claim `exp`
fn token_ttl(minutes: u64) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::Invalid {
        name: "TOKEN_TTL_MINUTES",
        value: minutes.to_string(),
    };

    let secs = minutes.checked_mul(60).ok_or_else(invalid)?;
    let now = u64::try_from(chrono::Utc::now().timestamp()).map_err(|_| invalid())?;
    let exp = now.checked_add(secs).ok_or_else(invalid)?;
    if minutes == 0 || usize::try_from(exp).is_err() || i64::try_from(exp).is_err() {
        return Err(invalid());
    }

    Ok(Duration::from_secs(secs))
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
