use contracts::domain::a001_store::aggregate::{StoreId, StoreRef};
use contracts::domain::a002_product::aggregate::{ProductId, ProductRef};
use contracts::domain::a003_sale::aggregate::{Sale, SaleDto, SaleId};
use contracts::domain::common::AggregateId;
use serde_json::json;

#[test]
fn populated_sale_from_backend() {
    let raw = json!({
        "_id": "64f1a2b3c4d5e6f7a8b9c0d1",
        "store_id": { "_id": "s1", "name": "Downtown", "location": "Main st." },
        "products_id": ["p1", { "_id": "p2", "name": "Milk", "price": 1.5 }],
        "quantity": [2, 3],
        "total_sale_amount": 12.5,
        "createdAt": "2024-03-15T14:02:26.123Z",
        "updatedAt": "2024-03-16T08:00:00.000Z",
        "__v": 0
    });

    let sale: Sale = serde_json::from_value(raw).unwrap();
    assert_eq!(sale.to_string_id().as_deref(), Some("64f1a2b3c4d5e6f7a8b9c0d1"));
    assert_eq!(sale.store_name(), Some("Downtown"));
    assert_eq!(sale.product_count(), 2);
    assert_eq!(sale.quantity, vec![2.0, 3.0]);
    assert_eq!(sale.total_sale_amount, Some(12.5));
    assert_eq!(sale.metadata.created_date().as_deref(), Some("2024-03-15"));
    assert_eq!(sale.metadata.updated_date().as_deref(), Some("2024-03-16"));
    assert!(matches!(sale.products_id[0], ProductRef::Id(_)));
    assert!(matches!(sale.products_id[1], ProductRef::Populated(_)));
}

#[test]
fn sparse_sale_decodes_with_defaults() {
    let sale: Sale = serde_json::from_value(json!({
        "store_id": "s1",
        "products_id": null,
        "quantity": null
    }))
    .unwrap();

    assert_eq!(sale.id, None);
    assert_eq!(sale.store_id, Some(StoreRef::Id(StoreId::new("s1"))));
    assert_eq!(sale.store_name(), None);
    assert!(sale.products_id.is_empty());
    assert!(sale.quantity.is_empty());
    assert_eq!(sale.total_sale_amount, None);
    assert_eq!(sale.metadata.created_date(), None);
}

#[test]
fn mismatched_lines_are_reported_not_rejected() {
    let sale: Sale = serde_json::from_value(json!({
        "_id": "abc",
        "products_id": ["p1", "p2"],
        "quantity": [1]
    }))
    .unwrap();

    assert_eq!(sale.product_count(), 2);
    assert_eq!(sale.quantity, vec![1.0]);
    assert!(!SaleDto::from_sale(&sale).has_parallel_lines());
}

#[test]
fn undisplayed_fields_of_any_shape_keep_the_list() {
    let raw = json!([
        { "_id": "ok1" },
        {
            "_id": "ok2",
            "store_id": { "_id": "s1", "name": "Pune Central", "location": { "city": "Pune" } },
            "products_id": [{ "_id": "p1", "price": "12.50", "name": 7 }],
            "quantity": [1],
            "createdAt": 1710511346
        }
    ]);

    let sales: Vec<Sale> = serde_json::from_value(raw).unwrap();
    assert_eq!(sales.len(), 2);
    assert_eq!(sales[0].to_string_id().as_deref(), Some("ok1"));

    let sale = &sales[1];
    assert_eq!(sale.store_name(), Some("Pune Central"));
    assert_eq!(sale.product_count(), 1);
    assert_eq!(sale.metadata.created_date(), None);

    let Some(StoreRef::Populated(store)) = &sale.store_id else {
        panic!("store should stay populated");
    };
    assert_eq!(store.extra["location"], json!({ "city": "Pune" }));

    let ProductRef::Populated(product) = &sale.products_id[0] else {
        panic!("product should stay populated");
    };
    assert_eq!(product.id, Some(ProductId::new("p1")));
    assert_eq!(product.name, None);
    assert_eq!(product.extra["price"], json!("12.50"));
}

#[test]
fn mistyped_sale_fields_read_as_absent() {
    let sale: Sale = serde_json::from_value(json!({
        "_id": "abc",
        "store_id": 42,
        "quantity": "3",
        "total_sale_amount": "n/a"
    }))
    .unwrap();

    assert_eq!(sale.store_id, None);
    assert!(sale.quantity.is_empty());
    assert_eq!(sale.total_sale_amount, None);
}

#[test]
fn dto_prefilled_from_sale() {
    let sale: Sale = serde_json::from_value(json!({
        "_id": "abc",
        "store_id": { "_id": "s9", "name": "Airport" },
        "products_id": [{ "_id": "p1" }, "p2"],
        "quantity": [4, 1],
        "total_sale_amount": 40
    }))
    .unwrap();

    let dto = SaleDto::from_sale(&sale);
    assert_eq!(dto.store_id, "s9");
    assert_eq!(dto.products_id, vec!["p1".to_string(), "p2".to_string()]);
    assert_eq!(dto.quantity, vec![4.0, 1.0]);
    assert_eq!(dto.total_sale_amount, 40.0);
    assert!(dto.has_parallel_lines());

    let body = serde_json::to_value(&dto).unwrap();
    assert_eq!(body["store_id"], "s9");
    assert_eq!(body["products_id"], json!(["p1", "p2"]));
}

#[test]
fn id_from_string_rejects_blank() {
    assert!(SaleId::from_string("   ").is_err());
    assert_eq!(SaleId::from_string(" x1 ").unwrap().value(), "x1");
}
