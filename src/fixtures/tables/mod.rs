// fixtures/tables/mod.rs

pub mod products;

pub use products::ProductsTable;
