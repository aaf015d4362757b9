// shop/api/db.rs - Database connection pool setup

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::fixtures::tables::ProductsTable;
use crate::fixtures::TestTable;

/// Create a PostgreSQL connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Create the products table (and its schema) when missing
pub async fn ensure_schema(pool: &PgPool, schema: &str) -> Result<(), sqlx::Error> {
    for statement in ProductsTable::setup_sql(schema) {
        sqlx::query(&statement).execute(pool).await?;
    }
    tracing::info!("Products table ready in schema '{}'", schema);
    Ok(())
}

/// Drop a schema and everything in it
pub async fn drop_schema(pool: &PgPool, schema: &str) -> Result<(), sqlx::Error> {
    let sql = format!("DROP SCHEMA IF EXISTS {} CASCADE", schema);
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}
