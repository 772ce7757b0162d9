pub mod create_product;
pub mod delete_product;
pub mod form;
pub mod list_products;
pub mod update_product;
