//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    Validated,
    errors::responses::{InternalServerErrorResponse, ValidationErrorsResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{NotFoundBody, ProductNotFoundResponse, ProductResult};
use crate::models::{CreateProduct, DataResponse, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation::{CreateProductRules, ProductIdRules, UpdateProductRules, product_id};

/// Body of a successful `DELETE /{id}`.
pub const PRODUCT_DELETED: &str = "Success: Producto eliminado";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, NotFoundBody),
        responses(
            ProductNotFoundResponse,
            ValidationErrorsResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "API operations related to Products")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// Get a list of products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "Products ordered by price, highest first", body = DataResponse<Vec<Product>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<DataResponse<Vec<Product>>>> {
    let products = service.list_products().await?;
    Ok(Json(DataResponse::new(products)))
}

/// Creates a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = DataResponse<Product>),
        (status = 400, response = ValidationErrorsResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    request: Validated<CreateProductRules>,
) -> ProductResult<impl IntoResponse> {
    let input = CreateProduct::try_from(&*request)?;
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(product))))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "The ID of the product to retrieve")
    ),
    responses(
        (status = 200, description = "Successful response", body = DataResponse<Product>),
        (status = 400, response = ValidationErrorsResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    request: Validated<ProductIdRules>,
) -> ProductResult<Json<DataResponse<Product>>> {
    let product = service.get_product(product_id(&request)?).await?;
    Ok(Json(DataResponse::new(product)))
}

/// Updates a product with user input
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "The ID of the product to update")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = DataResponse<Product>),
        (status = 400, response = ValidationErrorsResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    request: Validated<UpdateProductRules>,
) -> ProductResult<Json<DataResponse<Product>>> {
    let id = product_id(&request)?;
    let input = UpdateProduct::try_from(&*request)?;
    let product = service.update_product(id, input).await?;
    Ok(Json(DataResponse::new(product)))
}

/// Toggles the availability of a product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "The ID of the product to update")
    ),
    responses(
        (status = 200, description = "Availability toggled", body = DataResponse<Product>),
        (status = 400, response = ValidationErrorsResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    request: Validated<ProductIdRules>,
) -> ProductResult<Json<DataResponse<Product>>> {
    let product = service.toggle_availability(product_id(&request)?).await?;
    Ok(Json(DataResponse::new(product)))
}

/// Deletes a product by ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "The ID of the product to delete")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DataResponse<String>,
            example = json!({ "data": "Success: Producto eliminado" })),
        (status = 400, response = ValidationErrorsResponse),
        (status = 404, response = ProductNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    request: Validated<ProductIdRules>,
) -> ProductResult<Json<DataResponse<&'static str>>> {
    service.delete_product(product_id(&request)?).await?;
    Ok(Json(DataResponse::new(PRODUCT_DELETED)))
}
