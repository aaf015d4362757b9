// shop/mod.rs - Root module for the marketplace shop
//
// Architecture:
// - model/: Catalog view types shared by every layer
// - filter.rs: Predicates, stable multi-key sort, pagination and facets
// - cart.rs: Shopping cart and wishlist
// - error.rs: Library error type
// - source.rs: Where product records come from (fixture or Postgres)
// - api/: Postgres pool and queries (db-tools only)
// - routes.rs: actix-web JSON handlers (ssr only)

pub mod model;
pub mod filter;
pub mod cart;
pub mod error;
pub mod source;

#[cfg(feature = "db-tools")]
pub mod api;

#[cfg(feature = "ssr")]
pub mod routes;

pub use error::CatalogError;
pub use filter::{filter_and_sort, CatalogQuery, ProductPredicate};
pub use model::{CatalogPage, Product, SearchCriteria, ShopQuery, SortOption};
pub use source::ProductSource;
