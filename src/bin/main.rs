// Marketplace catalog server
//
// This binary starts the web server with:
// - Actix-web for the JSON API
// - PostgreSQL product source when DATABASE_URL is set, the sample catalog otherwise

use actix_web::{web, App, HttpServer};
use marketplace_catalog::config::AppConfig;
use marketplace_catalog::fixtures::sample_products;
use marketplace_catalog::shop::api::{db, queries};
use marketplace_catalog::shop::routes::{self, AppState};
use marketplace_catalog::shop::ProductSource;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let source = connect_source(&config).await?;
    tracing::info!("Serving products from the {} source", source.describe());

    let state = web::Data::new(AppState::new(source, config.clone()));

    tracing::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(actix_web::middleware::Logger::default())
            .configure(routes::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}

async fn connect_source(config: &AppConfig) -> anyhow::Result<ProductSource> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, using the sample catalog");
        return Ok(ProductSource::sample());
    };

    // Create PostgreSQL connection pool
    let pool = db::create_pool(database_url, config.max_connections).await?;
    tracing::info!("Connected to database");

    db::ensure_schema(&pool, &config.database_schema).await?;

    if config.seed_database {
        // Seed database if empty
        if let Err(e) = queries::seed_if_empty(&pool, &sample_products(), &config.database_schema).await {
            tracing::error!("Failed to seed database: {}", e);
        }
    }

    Ok(ProductSource::postgres(pool, config.database_schema.clone()))
}
