// shop/api/queries.rs - Product table queries
//
// The shop pulls every active product and filters in memory, so these are
// plain reads plus a seeding helper. Every query takes the schema name so
// tests can run against an isolated one.

use sqlx::{PgPool, Row};

use crate::shop::model::Product;

// Stock units written for sample products that are in stock
const SEED_STOCK_QUANTITY: i32 = 25;

/// Helper struct for mapping SQL rows to Product
#[derive(Clone, sqlx::FromRow)]
struct ProductRow {
    id: String,
    vendor_name: String,
    name: String,
    description: String,
    category: String,
    price: rust_decimal::Decimal,
    original_price: Option<rust_decimal::Decimal>,
    rating: rust_decimal::Decimal,
    review_count: i32,
    in_stock: bool,
    is_featured: bool,
    is_authentic: bool,
    image_url: Option<String>,
    created_at: chrono::NaiveDateTime,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            original_price: row.original_price,
            category: row.category,
            vendor: row.vendor_name,
            rating: row.rating,
            review_count: row.review_count,
            in_stock: row.in_stock,
            is_authentic: row.is_authentic,
            featured: row.is_featured,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

fn select_columns() -> &'static str {
    r#"
        id, vendor_name, name, description, category,
        price, original_price, rating, review_count,
        stock_quantity > 0 AS in_stock,
        is_featured, is_authentic, image_url, created_at
    "#
}

/// Active products, newest first
pub async fn list_active_products_with_schema(
    pool: &PgPool,
    schema: &str,
) -> Result<Vec<Product>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {}
        FROM {}.products
        WHERE is_active = TRUE
        ORDER BY created_at DESC, id
        "#,
        select_columns(),
        schema
    );

    let rows = sqlx::query_as::<_, ProductRow>(&sql).fetch_all(pool).await?;
    tracing::debug!("Loaded {} active products from {}.products", rows.len(), schema);

    Ok(rows.into_iter().map(Product::from).collect())
}

/// A single active product by id
pub async fn find_product_with_schema(
    pool: &PgPool,
    id: &str,
    schema: &str,
) -> Result<Option<Product>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {}
        FROM {}.products
        WHERE id = $1 AND is_active = TRUE
        "#,
        select_columns(),
        schema
    );

    let row = sqlx::query_as::<_, ProductRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Product::from))
}

pub async fn count_products_with_schema(pool: &PgPool, schema: &str) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}.products", schema);
    let row = sqlx::query(&sql).fetch_one(pool).await?;
    Ok(row.get(0))
}

/// Insert products, skipping ids that already exist. Returns rows inserted.
pub async fn seed_products_with_schema(
    pool: &PgPool,
    products: &[Product],
    schema: &str,
) -> Result<u64, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO {}.products (
            id, vendor_name, name, description, category,
            price, original_price, rating, review_count, stock_quantity,
            is_active, is_featured, is_authentic, image_url, created_at
        ) VALUES (
            $1, $2, $3, $4, $5,
            $6, $7, $8, $9, $10,
            TRUE, $11, $12, $13, $14
        )
        ON CONFLICT (id) DO NOTHING
        "#,
        schema
    );

    let mut inserted = 0;
    for product in products {
        let stock_quantity = if product.in_stock { SEED_STOCK_QUANTITY } else { 0 };
        let result = sqlx::query(&sql)
            .bind(&product.id)
            .bind(&product.vendor)
            .bind(&product.name)
            .bind(&product.description)
            .bind(&product.category)
            .bind(product.price)
            .bind(product.original_price)
            .bind(product.rating)
            .bind(product.review_count)
            .bind(stock_quantity)
            .bind(product.featured)
            .bind(product.is_authentic)
            .bind(&product.image_url)
            .bind(product.created_at)
            .execute(pool)
            .await?;
        inserted += result.rows_affected();
    }

    Ok(inserted)
}

/// Seed the table from `products` when it holds no rows yet
pub async fn seed_if_empty(
    pool: &PgPool,
    products: &[Product],
    schema: &str,
) -> Result<u64, sqlx::Error> {
    let count = count_products_with_schema(pool, schema).await?;
    if count > 0 {
        tracing::info!("Database already contains {} products, skipping seed.", count);
        return Ok(0);
    }

    tracing::info!("Seeding {}.products with {} sample products...", schema, products.len());
    let inserted = seed_products_with_schema(pool, products, schema).await?;
    tracing::info!("Database seeded successfully ({} rows).", inserted);
    Ok(inserted)
}
