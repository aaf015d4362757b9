// fixtures/mod.rs - Sample catalog and table fixtures
//
// The sample catalog is the product list the shop page ships with. It backs
// the server when no database is configured and gives tests a known data set.
//
// Table fixtures describe the SQL needed to create a table in a given schema,
// so integration tests can build and drop an isolated copy.

pub mod catalog;
pub mod tables;

pub use catalog::sample_products;

/// A table the tests and the server can create on demand
pub trait TestTable {
    /// SQL statements that create this table inside `schema`, in order.
    /// Every statement is idempotent.
    fn setup_sql(schema: &str) -> Vec<String>;
}
