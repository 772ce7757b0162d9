pub mod principal;
pub mod product;
pub mod response;
pub mod summary;
