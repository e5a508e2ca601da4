use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::common::lenient;
use crate::string_aggregate_id;

// ============================================================================
// ID Type
// ============================================================================

string_aggregate_id!(
    /// Уникальный идентификатор товара
    ProductId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ProductId>,

    #[serde(
        default,
        deserialize_with = "lenient::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    /// Остальные поля товара (price, category, ...) как есть
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Reference
// ============================================================================

/// Product reference inside a sale: populated object or bare id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductRef {
    Populated(Product),
    Id(ProductId),
}

impl ProductRef {
    pub fn id(&self) -> Option<&ProductId> {
        match self {
            ProductRef::Populated(product) => product.id.as_ref(),
            ProductRef::Id(id) => Some(id),
        }
    }
}
