mod postgres;

#[cfg(test)]
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{
    config::AppConfig,
    models::{
        broadcast::{Broadcast, BroadcastFields},
        news::{News, NewsFields},
    },
    utils::security::hash_password,
};

pub use postgres::{PgBroadcasts, PgCredentials, PgNews};

// Definimos un alias para "Pool<Postgres>"
pub type DbPool = Pool<Postgres>;

pub type BroadcastRepository = dyn Repository<Record = Broadcast, Fields = BroadcastFields>;
pub type NewsRepository = dyn Repository<Record = News, Fields = NewsFields>;

// La tabla admin tiene exactamente una fila con el hash de la contraseña
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn password_hash(&self) -> Result<Option<String>, sqlx::Error>;

    async fn set_password_hash(&self, hash: &str) -> Result<(), sqlx::Error>;

    // Inserta la fila solo si la tabla está vacía. Devuelve si insertó.
    async fn seed_password_hash(&self, hash: &str) -> Result<bool, sqlx::Error>;
}

// Contrato CRUD común a transmisiones y noticias.
// Update y delete sobre un id inexistente no fallan: no hacen nada.
#[async_trait]
pub trait Repository: Send + Sync {
    type Record: Send;
    type Fields: Send + Sync;

    // Más reciente primero
    async fn list(&self) -> Result<Vec<Self::Record>, sqlx::Error>;

    async fn create(&self, fields: &Self::Fields) -> Result<i64, sqlx::Error>;

    async fn replace(&self, id: i64, fields: &Self::Fields) -> Result<(), sqlx::Error>;

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;
}

pub async fn init_db(config: &AppConfig) -> anyhow::Result<DbPool> {
    // Las conexiones vuelven al pool al soltarse, en cualquier camino de salida
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

// Crea la credencial inicial si todavía no existe ninguna
pub async fn bootstrap_admin(
    credentials: &dyn CredentialRepository,
    initial_password: &str,
) -> anyhow::Result<bool> {
    if credentials.password_hash().await?.is_some() {
        return Ok(false);
    }

    let hash = hash_password(initial_password).map_err(anyhow::Error::msg)?;
    Ok(credentials.seed_password_hash(&hash).await?)
}
