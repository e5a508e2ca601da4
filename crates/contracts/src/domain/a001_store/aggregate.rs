use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::common::lenient;
use crate::string_aggregate_id;

// ============================================================================
// ID Type
// ============================================================================

string_aggregate_id!(
    /// Уникальный идентификатор магазина
    StoreId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Магазин (точка продаж)
///
/// Only the id and the name are read by the dashboard; every other backend
/// field is kept as-is in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<StoreId>,

    #[serde(
        default,
        deserialize_with = "lenient::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Store {
    /// Name for display, `None` when missing or blank
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

// ============================================================================
// Reference
// ============================================================================

/// Store reference inside another aggregate.
///
/// The backend may populate the reference inline or send the bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreRef {
    Populated(Store),
    Id(StoreId),
}

impl StoreRef {
    pub fn id(&self) -> Option<&StoreId> {
        match self {
            StoreRef::Populated(store) => store.id.as_ref(),
            StoreRef::Id(id) => Some(id),
        }
    }

    /// Store name, only known when the reference is populated
    pub fn name(&self) -> Option<&str> {
        match self {
            StoreRef::Populated(store) => store.display_name(),
            StoreRef::Id(_) => None,
        }
    }
}
