// shop/error.rs - Error type for catalog, cart and product source

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[cfg(feature = "db-tools")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("product not found: {0}")]
    ProductNotFound(String),

    #[error("product is out of stock: {0}")]
    OutOfStock(String),

    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(feature = "ssr")]
mod http {
    use actix_web::http::StatusCode;
    use actix_web::{HttpResponse, ResponseError};
    use serde_json::json;

    use super::CatalogError;

    impl ResponseError for CatalogError {
        fn status_code(&self) -> StatusCode {
            match self {
                CatalogError::ProductNotFound(_) => StatusCode::NOT_FOUND,
                CatalogError::OutOfStock(_) => StatusCode::CONFLICT,
                CatalogError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
                CatalogError::Database(_) | CatalogError::Config(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            }
        }

        fn error_response(&self) -> HttpResponse {
            let status = self.status_code();
            if status.is_server_error() {
                tracing::error!("Request failed: {}", self);
                // internal details stay in the log
                return HttpResponse::build(status).json(json!({ "error": "internal server error" }));
            }
            HttpResponse::build(status).json(json!({ "error": self.to_string() }))
        }
    }

}
