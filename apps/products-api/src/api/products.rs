//! Products API routes

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);
    handlers::router(service)
}

/// Create the `products` table if needed
pub async fn sync_schema(state: &AppState) -> eyre::Result<()> {
    let repository = PgProductRepository::new(state.db.clone());
    repository.sync_schema().await?;
    Ok(())
}
