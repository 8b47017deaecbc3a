use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, authorization::Bearer};
use axum_extra::TypedHeader;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::{error::AppError, models::admin::Claims, routes::AppState};

const ADMIN_SUBJECT: &str = "admin";

#[derive(Clone)]
pub struct JwtConfig {
    secret: String,
    ttl: Duration,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self { secret: secret.into(), ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // Firma un token HS256 de vida corta para el admin
    pub fn issue(&self) -> Result<String, jsonwebtoken::errors::Error> {
        let now = usize::try_from(Utc::now().timestamp()).unwrap_or(0);
        let ttl = usize::try_from(self.ttl.as_secs()).unwrap_or(usize::MAX);
        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            iat: now,
            // AppConfig ya acota el ttl; aquí solo evitamos el desborde
            exp: now.saturating_add(ttl),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    // Firma, expiración y sujeto
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.sub = Some(ADMIN_SUBJECT.to_string());

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )?;

        Ok(data.claims)
    }
}

// Se ejecuta ANTES de los handlers que modifican transmisiones y noticias
pub async fn admin_middleware(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(auth) = auth.ok_or_else(|| AppError::unauthorized("Falta el token"))?;

    match state.jwt.verify(auth.token()) {
        Ok(claims) => {
            // Adjuntamos claims por si se necesitan aguas abajo
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            // Token falso, expirado o manipulado
            tracing::debug!("Token rechazado: {:?}", e);
            Err(AppError::unauthorized("Token inválido o expirado"))
        }
    }
}
