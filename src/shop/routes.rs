// shop/routes.rs - JSON API for the shop page
//
// Handlers load the catalog from the configured source and run the filter
// engine on every request. Query parameters are the raw shop controls;
// malformed numbers are ignored, never rejected.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::config::AppConfig;
use crate::shop::error::CatalogError;
use crate::shop::filter::{category_facets, CatalogQuery};
use crate::shop::model::ShopQuery;
use crate::shop::source::ProductSource;

/// Shared, read-only state for all workers
#[derive(Clone, Debug)]
pub struct AppState {
    pub source: ProductSource,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(source: ProductSource, config: AppConfig) -> Self {
        Self { source, config }
    }
}

/// Mount the API under `/api`
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health))
            .route("/products", web::get().to(list_products))
            .route("/products/{id}", web::get().to(get_product))
            .route("/categories", web::get().to(list_categories)),
    );
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "source": state.source.describe(),
    }))
}

async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ShopQuery>,
) -> Result<HttpResponse, CatalogError> {
    let criteria = query.to_criteria();
    let sort = query.sort();
    let page = query.page_request(state.config.default_page_size, state.config.max_page_size);

    tracing::info!(
        "Product listing: criteria={:?}, sort={}, page={:?}",
        criteria,
        sort.key(),
        page
    );

    let products = state.source.load_all().await?;
    let result = CatalogQuery::from_criteria(&criteria)
        .sorted_by(sort)
        .paginate(page)
        .run(&products);

    tracing::info!("Listing returned {} of {} matches", result.products.len(), result.total_count);
    Ok(HttpResponse::Ok().json(result))
}

async fn get_product(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, CatalogError> {
    let id = path.into_inner();
    match state.source.find(&id).await? {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => Err(CatalogError::ProductNotFound(id)),
    }
}

async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, CatalogError> {
    let products = state.source.load_all().await?;
    Ok(HttpResponse::Ok().json(category_facets(&products)))
}
