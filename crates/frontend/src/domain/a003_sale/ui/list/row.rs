use contracts::domain::a003_sale::aggregate::Sale;

/// Table headers, in display order
pub const SALES_COLUMNS: [&str; 8] = [
    "Sale ID",
    "Store Name",
    "Quantity",
    "No. Of Products",
    "Total Amount",
    "Added Date",
    "Modified Date",
    "Actions",
];

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_SALES_MESSAGE: &str = "No Sales Found";

const SHORT_ID_LEN: usize = 6;

/// Display cells of one sale
#[derive(Clone, Debug, PartialEq)]
pub struct SaleRow {
    pub id: Option<String>,
    pub short_id: String,
    pub store_name: String,
    pub quantity: String,
    pub product_count: String,
    pub total_amount: String,
    pub created_date: String,
    pub updated_date: String,
}

impl From<&Sale> for SaleRow {
    fn from(sale: &Sale) -> Self {
        let id = sale.to_string_id();
        Self {
            short_id: short_id(id.as_deref()),
            id,
            store_name: sale.store_name().unwrap_or(NOT_AVAILABLE).to_string(),
            quantity: format_quantity(&sale.quantity),
            product_count: sale.product_count().to_string(),
            total_amount: format_amount(sale.total_sale_amount),
            created_date: sale
                .metadata
                .created_date()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            updated_date: sale
                .metadata
                .updated_date()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// What the table body shows
#[derive(Clone, Debug, PartialEq)]
pub enum SalesTableBody {
    /// One full-width row with [`NO_SALES_MESSAGE`]
    NoSales,
    Rows(Vec<SaleRow>),
}

pub fn build_table_body(sales: &[Sale]) -> SalesTableBody {
    if sales.is_empty() {
        return SalesTableBody::NoSales;
    }
    SalesTableBody::Rows(sales.iter().map(SaleRow::from).collect())
}

/// Last six characters of the id, "N/A" when missing or empty
pub fn short_id(id: Option<&str>) -> String {
    match id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let len = id.chars().count();
            id.chars().skip(len.saturating_sub(SHORT_ID_LEN)).collect()
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// "2, 3, 5 (10)"; "0" for no quantities
pub fn format_quantity(quantity: &[f64]) -> String {
    if quantity.is_empty() {
        return "0".to_string();
    }
    let joined = quantity
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let total: f64 = quantity.iter().sum();
    format!("{joined} ({total})")
}

/// Total amount as sent; "0" when missing, zero or NaN
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) if value != 0.0 && !value.is_nan() => value.to_string(),
        _ => "0".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_store::aggregate::{Store, StoreId, StoreRef};
    use contracts::domain::a002_product::aggregate::{ProductId, ProductRef};
    use contracts::domain::a003_sale::aggregate::SaleId;
    use contracts::domain::common::EntityMetadata;

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(&[2.0, 3.0, 5.0]), "2, 3, 5 (10)");
        assert_eq!(format_quantity(&[1.5, 2.0]), "1.5, 2 (3.5)");
        assert_eq!(format_quantity(&[7.0]), "7 (7)");
        assert_eq!(format_quantity(&[]), "0");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id(Some("64f1a2b3c4d5e6f7a8b9c0d1")), "b9c0d1");
        assert_eq!(short_id(Some("abc")), "abc");
        assert_eq!(short_id(Some("")), "N/A");
        assert_eq!(short_id(None), "N/A");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(125.5)), "125.5");
        assert_eq!(format_amount(Some(40.0)), "40");
        assert_eq!(format_amount(Some(0.0)), "0");
        assert_eq!(format_amount(None), "0");
    }

    #[test]
    fn test_row_from_full_sale() {
        let sale = Sale {
            id: Some(SaleId::new("64f1a2b3c4d5e6f7a8b9c0d1")),
            store_id: Some(StoreRef::Populated(Store {
                id: Some(StoreId::new("s1")),
                name: Some("Downtown".to_string()),
                ..Store::default()
            })),
            products_id: vec![
                ProductRef::Id(ProductId::new("p1")),
                ProductRef::Id(ProductId::new("p2")),
                ProductRef::Id(ProductId::new("p3")),
            ],
            quantity: vec![2.0, 3.0, 5.0],
            total_sale_amount: Some(99.9),
            metadata: EntityMetadata {
                created_at: Some("2024-03-15T14:02:26.123Z".to_string()),
                updated_at: Some("2024-04-01T00:00:00.000Z".to_string()),
            },
        };

        let row = SaleRow::from(&sale);
        assert_eq!(row.id.as_deref(), Some("64f1a2b3c4d5e6f7a8b9c0d1"));
        assert_eq!(row.short_id, "b9c0d1");
        assert_eq!(row.store_name, "Downtown");
        assert_eq!(row.quantity, "2, 3, 5 (10)");
        assert_eq!(row.product_count, "3");
        assert_eq!(row.total_amount, "99.9");
        assert_eq!(row.created_date, "2024-03-15");
        assert_eq!(row.updated_date, "2024-04-01");
    }

    #[test]
    fn test_row_from_empty_sale() {
        let row = SaleRow::from(&Sale::default());
        assert_eq!(row.id, None);
        assert_eq!(row.short_id, "N/A");
        assert_eq!(row.store_name, "N/A");
        assert_eq!(row.quantity, "0");
        assert_eq!(row.product_count, "0");
        assert_eq!(row.total_amount, "0");
        assert_eq!(row.created_date, "N/A");
        assert_eq!(row.updated_date, "N/A");
    }

    #[test]
    fn test_unpopulated_store_shows_na() {
        let sale = Sale {
            store_id: Some(StoreRef::Id(StoreId::new("s1"))),
            ..Sale::default()
        };
        assert_eq!(SaleRow::from(&sale).store_name, "N/A");
    }

    #[test]
    fn test_empty_list_renders_single_message_row() {
        assert_eq!(build_table_body(&[]), SalesTableBody::NoSales);
        assert_eq!(SALES_COLUMNS.len(), 8);
    }

    #[test]
    fn test_rows_keep_backend_order() {
        let sales = vec![
            Sale {
                id: Some(SaleId::new("first")),
                ..Sale::default()
            },
            Sale {
                id: Some(SaleId::new("second")),
                ..Sale::default()
            },
        ];
        match build_table_body(&sales) {
            SalesTableBody::Rows(rows) => {
                let ids: Vec<_> = rows.iter().map(|r| r.short_id.as_str()).collect();
                assert_eq!(ids, vec!["first", "second"]);
            }
            SalesTableBody::NoSales => panic!("expected rows"),
        }
    }
}
