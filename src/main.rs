mod config;
mod db;
mod error;
mod handlers;
mod models;
mod resolver;
mod routes;
mod utils;

#[cfg(test)]
mod test_helpers;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::AppConfig,
    db::{PgBroadcasts, PgCredentials, PgNews},
    resolver::StreamResolver,
    routes::AppState,
    utils::jwt::JwtConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Configuración inválida")?;

    let pool = db::init_db(&config)
        .await
        .context("Error al conectar a la Base de Datos. ¿Está corriendo Postgres?")?;
    tracing::info!("✅ Conexión a Postgres exitosa");

    let credentials = Arc::new(PgCredentials::new(pool.clone()));

    // Primer arranque: sembramos la credencial si nos pasaron una
    if let Some(initial) = &config.admin_initial_password {
        if db::bootstrap_admin(credentials.as_ref(), initial).await? {
            tracing::info!("Credencial de administrador inicial creada");
        }
    }

    let state = AppState {
        credentials,
        broadcasts: Arc::new(PgBroadcasts::new(pool.clone())),
        news: Arc::new(PgNews::new(pool)),
        resolver: StreamResolver::new(config.resolver.clone())
            .context("No se pudo crear el cliente HTTP del resolvedor")?,
        jwt: JwtConfig::new(config.jwt_secret.clone(), config.token_ttl),
    };

    let app = routes::create_routes(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Servidor CTV corriendo en http://{}", addr);

    let listener = TcpListener::bind(addr).await.context("Fallo al enlazar el puerto")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("No se pudo escuchar Ctrl-C: {:?}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("No se pudo escuchar SIGTERM: {:?}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Apagando servidor");
}
