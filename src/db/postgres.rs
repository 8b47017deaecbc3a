use async_trait::async_trait;

use super::{CredentialRepository, DbPool, Repository};
use crate::models::{
    broadcast::{Broadcast, BroadcastFields},
    news::{News, NewsFields},
};

// Todas las consultas van parametrizadas: nada de formatear valores en el SQL

#[derive(Clone)]
pub struct PgCredentials {
    pool: DbPool,
}

impl PgCredentials {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PgCredentials {
    async fn password_hash(&self) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM admin LIMIT 1")
            .fetch_optional(&self.pool)
            .await
    }

    async fn set_password_hash(&self, hash: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE admin SET password_hash = $1, updated_at = NOW()")
            .bind(hash)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn seed_password_hash(&self, hash: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO admin (password_hash)
             SELECT $1 WHERE NOT EXISTS (SELECT 1 FROM admin)",
        )
        .bind(hash)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct PgBroadcasts {
    pool: DbPool,
}

impl PgBroadcasts {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgBroadcasts {
    type Record = Broadcast;
    type Fields = BroadcastFields;

    async fn list(&self) -> Result<Vec<Broadcast>, sqlx::Error> {
        sqlx::query_as::<_, Broadcast>(
            r#"
            SELECT id, title, video_url, is_live, scheduled_time, scheduled_date, updated_at
            FROM broadcasts
            ORDER BY scheduled_date DESC NULLS LAST, scheduled_time DESC NULLS LAST, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn create(&self, fields: &BroadcastFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO broadcasts (title, video_url, is_live, scheduled_time, scheduled_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.video_url)
        .bind(fields.is_live)
        .bind(fields.scheduled_time)
        .bind(fields.scheduled_date)
        .fetch_one(&self.pool)
        .await
    }

    async fn replace(&self, id: i64, fields: &BroadcastFields) -> Result<(), sqlx::Error> {
        // Reemplazo completo: sin COALESCE, lo que no llega queda en NULL
        sqlx::query(
            r#"
            UPDATE broadcasts
            SET title = $1, video_url = $2, is_live = $3,
                scheduled_time = $4, scheduled_date = $5, updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.video_url)
        .bind(fields.is_live)
        .bind(fields.scheduled_time)
        .bind(fields.scheduled_date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM broadcasts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgNews {
    pool: DbPool,
}

impl PgNews {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgNews {
    type Record = News;
    type Fields = NewsFields;

    async fn list(&self) -> Result<Vec<News>, sqlx::Error> {
        sqlx::query_as::<_, News>(
            r#"
            SELECT id, title, excerpt, content, image_url, published_date, updated_at
            FROM news
            ORDER BY published_date DESC NULLS LAST, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn create(&self, fields: &NewsFields) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO news (title, excerpt, content, image_url, published_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.excerpt)
        .bind(&fields.content)
        .bind(&fields.image_url)
        .bind(fields.published_date)
        .fetch_one(&self.pool)
        .await
    }

    async fn replace(&self, id: i64, fields: &NewsFields) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE news
            SET title = $1, excerpt = $2, content = $3,
                image_url = $4, published_date = $5, updated_at = NOW()
            WHERE id = $6
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.excerpt)
        .bind(&fields.content)
        .bind(&fields.image_url)
        .bind(fields.published_date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
