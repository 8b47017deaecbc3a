use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::optional_date;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: String,
    pub published_date: Option<NaiveDate>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsFields {
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, deserialize_with = "optional_date")]
    pub published_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceNewsSchema {
    pub id: i64,
    #[serde(flatten)]
    pub fields: NewsFields,
}
