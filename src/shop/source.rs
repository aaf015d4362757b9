// shop/source.rs - Where product records come from
//
// The filter engine only needs "all products". The shop runs either on the
// bundled sample catalog or on the Postgres products table.

use std::sync::Arc;

use crate::shop::error::CatalogError;
use crate::shop::model::Product;

#[derive(Clone, Debug)]
pub enum ProductSource {
    /// Fixed in-memory catalog
    Fixture(Arc<Vec<Product>>),
    /// Active rows of `<schema>.products`
    #[cfg(feature = "db-tools")]
    Postgres { pool: sqlx::PgPool, schema: String },
}

impl ProductSource {
    pub fn fixture(products: Vec<Product>) -> Self {
        ProductSource::Fixture(Arc::new(products))
    }

    #[cfg(feature = "db-tools")]
    pub fn postgres(pool: sqlx::PgPool, schema: impl Into<String>) -> Self {
        ProductSource::Postgres {
            pool,
            schema: schema.into(),
        }
    }

    /// The sample catalog shown by the shop page
    pub fn sample() -> Self {
        Self::fixture(crate::fixtures::sample_products())
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ProductSource::Fixture(_) => "fixture",
            #[cfg(feature = "db-tools")]
            ProductSource::Postgres { .. } => "postgres",
        }
    }

    /// Every product a shopper may see. The fixture catalog is shared, not copied.
    pub async fn load_all(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        match self {
            ProductSource::Fixture(products) => Ok(Arc::clone(products)),
            #[cfg(feature = "db-tools")]
            ProductSource::Postgres { pool, schema } => {
                let products =
                    crate::shop::api::queries::list_active_products_with_schema(pool, schema).await?;
                Ok(Arc::new(products))
            }
        }
    }

    pub async fn find(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        match self {
            ProductSource::Fixture(products) => {
                Ok(products.iter().find(|p| p.id == id).cloned())
            }
            #[cfg(feature = "db-tools")]
            ProductSource::Postgres { pool, schema } => {
                Ok(crate::shop::api::queries::find_product_with_schema(pool, id, schema).await?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixture_source_loads_and_finds() {
        let source = ProductSource::sample();
        assert_eq!(source.describe(), "fixture");

        let products = source.load_all().await.unwrap();
        assert_eq!(products.len(), 6);

        let laddu = source.find("2").await.unwrap().unwrap();
        assert!(laddu.name.contains("Laddu"));
        assert!(source.find("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fixture_loads_share_one_catalog() {
        let source = ProductSource::sample();
        let first = source.load_all().await.unwrap();
        let second = source.load_all().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
