use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_date, optional_time};

// 1. Fila completa de la tabla broadcasts
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Broadcast {
    pub id: i64,
    pub title: String,
    pub video_url: Option<String>,
    pub is_live: bool,
    pub scheduled_time: Option<NaiveTime>,
    pub scheduled_date: Option<NaiveDate>,
    pub updated_at: Option<DateTime<Utc>>,
}

// 2. Campos editables. POST y PUT mandan siempre el juego completo
#[derive(Debug, Clone, Deserialize)]
pub struct BroadcastFields {
    pub title: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub is_live: bool,
    #[serde(default, deserialize_with = "optional_time")]
    pub scheduled_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "optional_date")]
    pub scheduled_date: Option<NaiveDate>,
}

// 3. Cuerpo del PUT: id + todos los campos
#[derive(Debug, Deserialize)]
pub struct ReplaceBroadcastSchema {
    pub id: i64,
    #[serde(flatten)]
    pub fields: BroadcastFields,
}
