// Repositorios en memoria para los tests de handlers (sin Postgres)

use std::{
    cmp::Reverse,
    sync::{
        atomic::{AtomicBool, AtomicI64, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use chrono::Utc;

use super::{CredentialRepository, Repository};
use crate::models::{
    broadcast::{Broadcast, BroadcastFields},
    news::{News, NewsFields},
};

// Simula una base caída: mientras esté activo, todas las operaciones fallan
#[derive(Default)]
struct Outage(AtomicBool);

impl Outage {
    fn set(&self, offline: bool) {
        self.0.store(offline, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.0.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
pub struct MemoryCredentials {
    hash: Mutex<Option<String>>,
    offline: Outage,
}

impl MemoryCredentials {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_hash(hash: String) -> Self {
        Self {
            hash: Mutex::new(Some(hash)),
            offline: Outage::default(),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }
}

#[async_trait]
impl CredentialRepository for MemoryCredentials {
    async fn password_hash(&self) -> Result<Option<String>, sqlx::Error> {
        self.offline.check()?;
        Ok(self.hash.lock().unwrap().clone())
    }

    async fn set_password_hash(&self, hash: &str) -> Result<(), sqlx::Error> {
        self.offline.check()?;
        let mut stored = self.hash.lock().unwrap();
        // Igual que el UPDATE sin WHERE: si no hay fila, no hace nada
        if stored.is_some() {
            *stored = Some(hash.to_string());
        }
        Ok(())
    }

    async fn seed_password_hash(&self, hash: &str) -> Result<bool, sqlx::Error> {
        self.offline.check()?;
        let mut stored = self.hash.lock().unwrap();
        if stored.is_some() {
            return Ok(false);
        }
        *stored = Some(hash.to_string());
        Ok(true)
    }
}

pub struct MemoryBroadcasts {
    rows: Mutex<Vec<Broadcast>>,
    next_id: AtomicI64,
    offline: Outage,
}

impl MemoryBroadcasts {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            offline: Outage::default(),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }
}

#[async_trait]
impl Repository for MemoryBroadcasts {
    type Record = Broadcast;
    type Fields = BroadcastFields;

    async fn list(&self) -> Result<Vec<Broadcast>, sqlx::Error> {
        self.offline.check()?;
        let mut rows = self.rows.lock().unwrap().clone();
        // Mismo orden que el SQL: DESC con NULLS LAST, desempate por id DESC
        rows.sort_by_key(|b| {
            (
                b.scheduled_date.is_none(),
                Reverse(b.scheduled_date),
                b.scheduled_time.is_none(),
                Reverse(b.scheduled_time),
                Reverse(b.id),
            )
        });
        Ok(rows)
    }

    async fn create(&self, fields: &BroadcastFields) -> Result<i64, sqlx::Error> {
        self.offline.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(Broadcast {
            id,
            title: fields.title.clone(),
            video_url: fields.video_url.clone(),
            is_live: fields.is_live,
            scheduled_time: fields.scheduled_time,
            scheduled_date: fields.scheduled_date,
            updated_at: Some(Utc::now()),
        });
        Ok(id)
    }

    async fn replace(&self, id: i64, fields: &BroadcastFields) -> Result<(), sqlx::Error> {
        self.offline.check()?;
        if let Some(row) = self.rows.lock().unwrap().iter_mut().find(|b| b.id == id) {
            *row = Broadcast {
                id,
                title: fields.title.clone(),
                video_url: fields.video_url.clone(),
                is_live: fields.is_live,
                scheduled_time: fields.scheduled_time,
                scheduled_date: fields.scheduled_date,
                updated_at: Some(Utc::now()),
            };
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        self.offline.check()?;
        self.rows.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}

pub struct MemoryNews {
    rows: Mutex<Vec<News>>,
    next_id: AtomicI64,
    offline: Outage,
}

impl MemoryNews {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            offline: Outage::default(),
        }
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }
}

#[async_trait]
impl Repository for MemoryNews {
    type Record = News;
    type Fields = NewsFields;

    async fn list(&self) -> Result<Vec<News>, sqlx::Error> {
        self.offline.check()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|n| (n.published_date.is_none(), Reverse(n.published_date), Reverse(n.id)));
        Ok(rows)
    }

    async fn create(&self, fields: &NewsFields) -> Result<i64, sqlx::Error> {
        self.offline.check()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().push(to_news(id, fields));
        Ok(id)
    }

    async fn replace(&self, id: i64, fields: &NewsFields) -> Result<(), sqlx::Error> {
        self.offline.check()?;
        if let Some(row) = self.rows.lock().unwrap().iter_mut().find(|n| n.id == id) {
            *row = to_news(id, fields);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        self.offline.check()?;
        self.rows.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }
}

fn to_news(id: i64, fields: &NewsFields) -> News {
    News {
        id,
        title: fields.title.clone(),
        excerpt: fields.excerpt.clone(),
        content: fields.content.clone(),
        image_url: fields.image_url.clone(),
        published_date: fields.published_date,
        updated_at: Some(Utc::now()),
    }
}
