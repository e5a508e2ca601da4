use serde::{Deserialize, Serialize};

use super::lenient;

/// Метаданные экземпляра агрегата (lifecycle tracking)
///
/// Timestamps are kept as the backend sends them (ISO-like strings); the
/// dashboard only ever shows their date portion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Дата создания записи
    #[serde(
        rename = "createdAt",
        default,
        deserialize_with = "lenient::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    /// Дата последнего обновления
    #[serde(
        rename = "updatedAt",
        default,
        deserialize_with = "lenient::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl EntityMetadata {
    /// Date portion (first 10 characters) of the creation timestamp
    pub fn created_date(&self) -> Option<String> {
        self.created_at.as_deref().and_then(date_portion)
    }

    /// Date portion (first 10 characters) of the last modification timestamp
    pub fn updated_date(&self) -> Option<String> {
        self.updated_at.as_deref().and_then(date_portion)
    }
}

/// First 10 characters of a timestamp, `None` for an empty string.
///
/// Counts characters rather than bytes so malformed non-ASCII input cannot
/// split a code point.
pub fn date_portion(timestamp: &str) -> Option<String> {
    if timestamp.is_empty() {
        return None;
    }
    Some(timestamp.chars().take(10).collect())
}
