use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("plataforma desconocida: {0}")]
    UnknownPlatform(String),

    #[error("identificador de canal inválido: {0}")]
    InvalidChannel(String),

    #[error("el canal no está en vivo")]
    Offline,

    #[error("stream no encontrado: {0}")]
    NotFound(String),

    #[error("error de red: {0}")]
    Network(String),

    #[error("respuesta ilegible: {0}")]
    Decode(String),
}

impl ResolveError {
    // Errores del llamador (400). Todo lo demás se reporta como 404.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::UnknownPlatform(_) | Self::InvalidChannel(_))
    }
}

impl From<reqwest::Error> for ResolveError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ResolveError::Decode(err.to_string())
        } else {
            ResolveError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        ResolveError::Decode(err.to_string())
    }
}
