use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{ToResponse, ToSchema};

/// Message returned to clients when a product id does not exist.
pub const PRODUCT_NOT_FOUND: &str = "El producto no existe.";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Body of a 404 for a missing product: `{"error": "El producto no existe."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotFoundBody {
    pub error: String,
}

#[derive(ToResponse)]
#[response(
    description = "Product not found",
    content_type = "application/json",
    example = json!({ "error": "El producto no existe." })
)]
pub struct ProductNotFoundResponse(pub NotFoundBody);

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => AppError::NotFound(format!("Product {} not found", id)),
            ProductError::InvalidInput(msg) => AppError::BadRequest(msg),
            ProductError::Database(err) => AppError::Database(err),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        match self {
            ProductError::NotFound(id) => {
                tracing::info!(product_id = id, "Product not found");
                let body = NotFoundBody {
                    error: PRODUCT_NOT_FOUND.to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}
