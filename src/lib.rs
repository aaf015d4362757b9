// lib.rs - Root module for the marketplace catalog library
//
// The catalog model, filter engine and cart are plain Rust with no IO.
// Database access and configuration live behind `db-tools`, the JSON API
// behind `ssr`.

/// Sample catalog and database table fixtures
pub mod fixtures;

/// Product catalog, filter/sort engine, cart and product sources
pub mod shop;

#[cfg(feature = "db-tools")]
pub mod config;
