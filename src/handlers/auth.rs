use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use crate::{
    error::{AppError, AppResult},
    models::admin::{AuthResponse, ChangePasswordPayload, LoginPayload},
    routes::AppState,
    utils::{
        payload::parse_json,
        security::{
            hash_password, is_acceptable_password, is_legacy_hash, verify_password,
            MIN_PASSWORD_CHARS,
        },
    },
};

// Un solo mensaje para "no hay admin", "contraseña incorrecta" y "base caída"
const INVALID_PASSWORD: &str = "Contraseña incorrecta";

// POST /api/auth
pub async fn login_handler(State(state): State<AppState>, body: Bytes) -> AppResult<impl IntoResponse> {
    let payload: LoginPayload = parse_json(&body)?;

    // 1. Verificar contraseña contra la única credencial
    if !check_admin_password(&state, &payload.password).await {
        return Err(AppError::unauthorized(INVALID_PASSWORD));
    }

    // 2. Generar JWT de vida corta
    let token = state.jwt.issue().map_err(|e| AppError::Internal(format!("firmando token: {e}")))?;

    tracing::info!("Login de administrador correcto");

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            success: true,
            token,
            token_type: "Bearer".to_string(),
            expires_in: state.jwt.ttl().as_secs(),
        }),
    ))
}

// POST /api/change-password
pub async fn change_password_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let payload: ChangePasswordPayload = parse_json(&body)?;

    // 1. Validar ANTES de tocar la base de datos
    if !is_acceptable_password(&payload.new_password) {
        return Err(AppError::validation(format!(
            "La nueva contraseña debe tener al menos {MIN_PASSWORD_CHARS} caracteres"
        )));
    }

    // 2. La contraseña actual tiene que coincidir
    if !check_admin_password(&state, &payload.old_password).await {
        return Err(AppError::unauthorized("Contraseña actual incorrecta"));
    }

    // 3. Nueva sal, nuevo hash
    let new_hash = hash_password(&payload.new_password).map_err(AppError::Internal)?;

    if let Err(e) = state.credentials.set_password_hash(&new_hash).await {
        tracing::error!("Error guardando la nueva contraseña: {:?}", e);
        return Err(AppError::unauthorized("Contraseña actual incorrecta"));
    }

    tracing::info!("Contraseña de administrador actualizada");

    Ok((
        StatusCode::OK,
        Json(json!({ "success": true, "message": "Contraseña actualizada correctamente" })),
    ))
}

// Cualquier falla (sin fila, hash distinto, base caída) cuenta como contraseña inválida
async fn check_admin_password(state: &AppState, password: &str) -> bool {
    match state.credentials.password_hash().await {
        Ok(Some(stored_hash)) => {
            let valid = verify_password(password, &stored_hash);
            if valid && is_legacy_hash(&stored_hash) {
                upgrade_legacy_hash(state, password).await;
            }
            valid
        }
        Ok(None) => {
            tracing::warn!("No existe la credencial de administrador");
            false
        }
        Err(e) => {
            tracing::error!("Error leyendo la credencial de administrador: {:?}", e);
            false
        }
    }
}

// Reescribe un hash bcrypt heredado como Argon2. Si falla, el login sigue siendo válido.
async fn upgrade_legacy_hash(state: &AppState, password: &str) {
    let new_hash = match hash_password(password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("No se pudo migrar el hash bcrypt: {}", e);
            return;
        }
    };

    match state.credentials.set_password_hash(&new_hash).await {
        Ok(()) => tracing::info!("Hash bcrypt de administrador migrado a Argon2"),
        Err(e) => tracing::error!("Error guardando el hash migrado: {:?}", e),
    }
}
