pub mod admin;
pub mod broadcast;
pub mod news;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer};

// Cuerpo de DELETE: solo el id
#[derive(Debug, Deserialize)]
pub struct IdPayload {
    pub id: Option<i64>,
}

// Los formularios del panel mandan "" cuando un campo fecha/hora queda vacío
pub(crate) fn optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

// Acepta "HH:MM" (input type=time) y "HH:MM:SS"
pub(crate) fn optional_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            let raw = raw.trim();
            NaiveTime::parse_from_str(raw, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
        _ => Ok(None),
    }
}
