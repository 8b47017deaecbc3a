use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::AppError;

// El panel no siempre manda Content-Type, así que leemos el JSON a mano.
// Cuerpo vacío equivale a "{}".
pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        &body[..]
    };

    serde_json::from_slice(raw).map_err(|e| AppError::validation(format!("JSON inválido: {e}")))
}
