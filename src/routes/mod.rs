use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderName, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use crate::{
    db::{BroadcastRepository, CredentialRepository, NewsRepository},
    handlers::{auth, broadcast, health_handler, method_not_allowed_handler, news, stream},
    resolver::StreamResolver,
    utils::jwt::{admin_middleware, JwtConfig},
};

// Tope de la petición completa; el resolvedor aplica además su propio timeout por salida
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(86400);

#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialRepository>,
    pub broadcasts: Arc<BroadcastRepository>,
    pub news: Arc<NewsRepository>,
    pub resolver: StreamResolver,
    pub jwt: JwtConfig,
}

pub fn create_routes(state: AppState) -> Router {
    let require_admin = || middleware::from_fn_with_state(state.clone(), admin_middleware);

    // 1. Credencial del panel (públicas: ellas mismas verifican la contraseña)
    let auth_routes = Router::new()
        .route(
            "/api/auth",
            post(auth::login_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/api/change-password",
            post(auth::change_password_handler).fallback(method_not_allowed_handler),
        );

    // 2. Recursos: GET público, mutaciones solo con token de admin.
    // route_layer solo envuelve los métodos ya registrados, por eso GET va después.
    let resource_routes = Router::new()
        .route(
            "/api/broadcasts",
            post(broadcast::create_broadcast_handler)
                .put(broadcast::replace_broadcast_handler)
                .delete(broadcast::delete_broadcast_handler)
                .route_layer(require_admin())
                .get(broadcast::list_broadcasts_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/api/news",
            post(news::create_news_handler)
                .put(news::replace_news_handler)
                .delete(news::delete_news_handler)
                .route_layer(require_admin())
                .get(news::list_news_handler)
                .fallback(method_not_allowed_handler),
        );

    // 3. Resolvedor de streams y salud
    let public_routes = Router::new()
        .route(
            "/api/stream",
            get(stream::resolve_stream_handler).fallback(method_not_allowed_handler),
        )
        .route("/health", get(health_handler).fallback(method_not_allowed_handler));

    // Fusionamos todo
    Router::new()
        .merge(auth_routes)
        .merge(resource_routes)
        .merge(public_routes)
        .with_state(state)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

// Responde los OPTIONS (200, cuerpo vacío) y agrega el origen comodín a todo
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-auth-token"),
        ])
        .max_age(PREFLIGHT_MAX_AGE)
}
