use serde::{Deserialize, Serialize};

// Lo que recibimos para hacer Login
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub password: String,
}

// Lo que recibimos para cambiar la contraseña
#[derive(Debug, Deserialize)]
pub struct ChangePasswordPayload {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

// Lo que devolvemos cuando el login es exitoso
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
}

// Lo que viaja DENTRO del token firmado (Claims)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // Siempre "admin": hay una sola credencial
    pub exp: usize,  // Expiración
    pub iat: usize,  // Issued At
}
