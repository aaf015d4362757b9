// fixtures/tables/products.rs
//
// The marketplace products table. Vendors write rows through their own
// tooling; the shop only reads active ones. `in_stock` is not stored, it is
// derived from `stock_quantity`.

use crate::fixtures::TestTable;

/// Default schema for the products table
pub const DEFAULT_SCHEMA: &str = "marketplace";

pub struct ProductsTable;

impl TestTable for ProductsTable {
    fn setup_sql(schema: &str) -> Vec<String> {
        vec![
            // 1. Schema
            format!("CREATE SCHEMA IF NOT EXISTS {schema}"),

            // 2. Table
            format!(
                r#"
                CREATE TABLE IF NOT EXISTS {schema}.products (
                    id TEXT PRIMARY KEY,
                    vendor_name TEXT NOT NULL,
                    name VARCHAR(255) NOT NULL,
                    description TEXT NOT NULL DEFAULT '',
                    category VARCHAR(100) NOT NULL,
                    price NUMERIC(12, 2) NOT NULL CHECK (price >= 0),
                    original_price NUMERIC(12, 2),
                    rating NUMERIC(3, 2) NOT NULL DEFAULT 0,
                    review_count INTEGER NOT NULL DEFAULT 0,
                    stock_quantity INTEGER NOT NULL DEFAULT 0 CHECK (stock_quantity >= 0),
                    is_active BOOLEAN NOT NULL DEFAULT true,
                    is_featured BOOLEAN NOT NULL DEFAULT false,
                    is_authentic BOOLEAN NOT NULL DEFAULT true,
                    image_url TEXT,
                    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
                )
                "#
            ),

            // 3. Index for the shop listing (active rows, newest first)
            format!(
                "CREATE INDEX IF NOT EXISTS products_active_created_idx \
                 ON {schema}.products (is_active, created_at DESC)"
            ),
        ]
    }
}
