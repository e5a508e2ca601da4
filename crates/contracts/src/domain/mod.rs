pub mod a001_store;
pub mod a002_product;
pub mod a003_sale;
pub mod common;
