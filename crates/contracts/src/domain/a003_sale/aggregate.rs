use serde::{Deserialize, Serialize};

use crate::domain::a001_store::aggregate::StoreRef;
use crate::domain::a002_product::aggregate::ProductRef;
use crate::domain::common::{lenient, AggregateId, EntityMetadata};
use crate::string_aggregate_id;

// ============================================================================
// ID Type
// ============================================================================

string_aggregate_id!(
    /// Уникальный идентификатор продажи
    SaleId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Продажа: магазин, набор товаров и их количества
///
/// `products_id` and `quantity` are parallel sequences. Equal length is
/// expected from the backend but not guaranteed; see [`SaleDto::has_parallel_lines`].
///
/// Any field of an unexpected JSON type decodes as absent, so one odd record
/// never rejects the rest of the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<SaleId>,

    #[serde(
        default,
        deserialize_with = "lenient::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub store_id: Option<StoreRef>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub products_id: Vec<ProductRef>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub quantity: Vec<f64>,

    #[serde(
        default,
        deserialize_with = "lenient::or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_sale_amount: Option<f64>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Sale {
    /// Получить ID как строку
    pub fn to_string_id(&self) -> Option<String> {
        self.id.as_ref().map(AggregateId::as_string)
    }

    /// Name of the linked store when the backend populated it
    pub fn store_name(&self) -> Option<&str> {
        self.store_id.as_ref().and_then(StoreRef::name)
    }

    pub fn product_count(&self) -> usize {
        self.products_id.len()
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса на создание/изменение продажи (POST /sales, PUT /sales/{id})
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleDto {
    pub store_id: String,
    pub products_id: Vec<String>,
    pub quantity: Vec<f64>,
    pub total_sale_amount: f64,
}

impl SaleDto {
    /// Pre-fill a form from an existing sale (update flow)
    pub fn from_sale(sale: &Sale) -> Self {
        Self {
            store_id: sale
                .store_id
                .as_ref()
                .and_then(StoreRef::id)
                .map(AggregateId::as_string)
                .unwrap_or_default(),
            products_id: sale
                .products_id
                .iter()
                .filter_map(ProductRef::id)
                .map(AggregateId::as_string)
                .collect(),
            quantity: sale.quantity.clone(),
            total_sale_amount: sale.total_sale_amount.unwrap_or_default(),
        }
    }

    pub fn has_parallel_lines(&self) -> bool {
        self.quantity.len() == self.products_id.len()
    }
}
