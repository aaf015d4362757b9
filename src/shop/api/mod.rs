// shop/api/mod.rs - Postgres access for the shop
//
// Pool setup and the queries the product source runs.

pub mod db;
pub mod queries;
