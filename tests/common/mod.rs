// common/mod.rs - Shared test utilities for database setup and teardown
//
// Each test gets its own schema so runs are isolated and idempotent.
// When DATABASE_URL is not set the database tests are skipped.

use std::env;
use std::time::Duration;

use marketplace_catalog::fixtures::sample_products;
use marketplace_catalog::shop::api::{db, queries};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a database connection pool for testing, `None` without DATABASE_URL
pub async fn create_test_pool() -> anyhow::Result<Option<PgPool>> {
    dotenv::dotenv().ok();
    let Ok(database_url) = env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(60))
        .connect(&database_url)
        .await?;

    Ok(Some(pool))
}

/// Generate a unique schema name for a test
pub fn generate_test_schema_name(test_name: &str) -> String {
    // Sanitize test name to be a valid schema name (alphanumeric + underscore)
    let sanitized = test_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect::<String>();

    // PostgreSQL identifiers stop at 63 bytes
    let truncated = if sanitized.len() > 50 {
        &sanitized[..50]
    } else {
        &sanitized
    };

    format!("test_{}", truncated)
}

/// Create the schema and table, seeded with the sample catalog
pub async fn setup_test_db(pool: &PgPool, schema: &str) -> anyhow::Result<()> {
    db::drop_schema(pool, schema).await?;
    db::ensure_schema(pool, schema).await?;
    queries::seed_products_with_schema(pool, &sample_products(), schema).await?;
    Ok(())
}

/// Full setup and teardown wrapper for tests with an isolated schema
pub async fn with_test_db<F, Fut>(test_name: &str, test_fn: F) -> anyhow::Result<()>
where
    F: FnOnce(PgPool, String) -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<()>>,
{
    let Some(pool) = create_test_pool().await? else {
        return Ok(());
    };
    let schema = generate_test_schema_name(test_name);

    setup_test_db(&pool, &schema).await?;

    let result = test_fn(pool.clone(), schema.clone()).await;

    // Always cleanup, even if test fails
    db::drop_schema(&pool, &schema).await?;

    result
}
