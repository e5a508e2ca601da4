pub mod a003_sale;
