//! Handler tests for Products domain
//!
//! These tests drive the products router end to end over the in-memory
//! repository:
//! - Validation pipeline (status codes and `errors` payloads)
//! - Not-found handling on every parameterized route
//! - Response envelopes (`data` / `error`)
//!
//! They exercise only the products domain router, not the full application
//! with docs, CORS and health routes.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app_with(repository: InMemoryProductRepository) -> Router {
    handlers::router(ProductService::new(repository))
}

fn app() -> Router {
    app_with(InMemoryProductRepository::new())
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn seed(repository: &InMemoryProductRepository, name: &str, price: f64) -> Product {
    repository
        .create(CreateProduct {
            name: name.to_string(),
            price,
            availability: true,
        })
        .await
        .unwrap()
}

fn error_count(body: &Value) -> usize {
    body["errors"].as_array().map(Vec::len).unwrap_or_default()
}

// POST /

#[tokio::test]
async fn test_create_with_empty_body_shows_validation_errors() {
    let (status, body) = send(app(), "POST", "/", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 4);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_create_with_zero_price_reports_one_error() {
    let (status, body) = send(
        app(),
        "POST",
        "/",
        Some(json!({"name": "Monitor - TEST", "price": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
    assert_eq!(body["errors"][0]["msg"], "El precio no es válido.");
    assert_eq!(body["errors"][0]["path"], "price");
    assert_eq!(body["errors"][0]["location"], "body");
}

#[tokio::test]
async fn test_create_with_string_price_reports_errors() {
    let (status, body) = send(
        app(),
        "POST",
        "/",
        Some(json!({"name": "Monitor - TEST", "price": "Hola"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 2);
}

#[tokio::test]
async fn test_create_without_name_is_never_created() {
    let (status, body) = send(app(), "POST", "/", Some(json!({"price": 50}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["msg"], "El nombre del producto es obligatorio.");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_create_valid_product_returns_201() {
    let (status, body) = send(
        app(),
        "POST",
        "/",
        Some(json!({"name": "Mouse - TEST", "price": 50})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["name"], "Mouse - TEST");
    assert_eq!(body["data"]["availability"], true);
    assert!(body["data"]["id"].is_number());
}

#[tokio::test]
async fn test_create_without_json_content_type_is_validated_as_empty() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(r#"{"name":"Mouse","price":50}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// GET /

#[tokio::test]
async fn test_list_returns_data_ordered_by_price_desc() {
    let repository = InMemoryProductRepository::new();
    seed(&repository, "Cable", 10.0).await;
    seed(&repository, "Mouse", 50.0).await;
    seed(&repository, "Pegatina", 5.0).await;

    let (status, body) = send(app_with(repository), "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("errors").is_none());
    let prices: Vec<f64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect();
    assert_eq!(prices, vec![50.0, 10.0, 5.0]);
}

#[tokio::test]
async fn test_list_is_truncated_to_fifty() {
    let repository = InMemoryProductRepository::new();
    for i in 0..55 {
        seed(&repository, &format!("Producto {i}"), f64::from(i) + 1.0).await;
    }

    let (status, body) = send(app_with(repository), "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 50);
}

// GET /{id}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let (status, body) = send(app(), "GET", "/2000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "El producto no existe."}));
}

#[tokio::test]
async fn test_get_with_invalid_id_returns_400() {
    let (status, body) = send(app(), "GET", "/not-valid-id", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
    assert_eq!(body["errors"][0]["msg"], "ID no válido.");
    assert_eq!(body["errors"][0]["location"], "params");
    assert_eq!(body["errors"][0]["value"], "not-valid-id");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_get_with_undecodable_id_returns_400() {
    let (status, body) = send(app(), "GET", "/%FF", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
    assert_eq!(body["errors"][0]["msg"], "ID no válido.");
}

#[tokio::test]
async fn test_get_existing_product_returns_200() {
    let repository = InMemoryProductRepository::new();
    let product = seed(&repository, "Monitor", 300.0).await;

    let (status, body) = send(app_with(repository), "GET", &format!("/{}", product.id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"data": {"id": product.id, "name": "Monitor", "price": 300.0, "availability": true}})
    );
}

// PUT /{id}

#[tokio::test]
async fn test_update_with_invalid_id_returns_400() {
    let (status, body) = send(
        app(),
        "PUT",
        "/not-valid-id",
        Some(json!({"name": "Monitor Curvo", "availability": true, "price": 300})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
    assert_eq!(body["errors"][0]["msg"], "ID no válido.");
}

#[tokio::test]
async fn test_update_with_empty_body_reports_five_errors() {
    let repository = InMemoryProductRepository::new();
    let product = seed(&repository, "Monitor", 300.0).await;

    let (status, body) = send(
        app_with(repository),
        "PUT",
        &format!("/{}", product.id),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 5);
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_update_with_zero_length_json_body_reports_five_errors() {
    let repository = InMemoryProductRepository::new();
    let product = seed(&repository, "Monitor", 300.0).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", product.id))
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();

    let response = app_with(repository).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error_count(&body), 5);
    assert!(body.get("code").is_none());
}

#[tokio::test]
async fn test_update_with_negative_price_reports_one_error() {
    let repository = InMemoryProductRepository::new();
    let product = seed(&repository, "Monitor", 300.0).await;

    let (status, body) = send(
        app_with(repository),
        "PUT",
        &format!("/{}", product.id),
        Some(json!({"name": "Monitor Curvo", "availability": true, "price": -300})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
    assert_eq!(body["errors"][0]["msg"], "El precio no es válido.");
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let (status, body) = send(
        app(),
        "PUT",
        "/2000",
        Some(json!({"name": "Monitor Curvo", "availability": true, "price": 300})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "El producto no existe.");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_update_existing_product_is_idempotent() {
    let repository = InMemoryProductRepository::new();
    let product = seed(&repository, "Monitor", 300.0).await;
    let uri = format!("/{}", product.id);
    let payload = json!({"name": "Monitor Curvo", "availability": false, "price": 350});

    let (status, first) = send(app_with(repository.clone()), "PUT", &uri, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["data"]["name"], "Monitor Curvo");
    assert_eq!(first["data"]["availability"], false);

    let (status, second) = send(app_with(repository.clone()), "PUT", &uri, Some(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);

    let stored = repository.find_by_id(product.id).await.unwrap().unwrap();
    assert_eq!(stored.price, 350.0);
}

// PATCH /{id}

#[tokio::test]
async fn test_toggle_missing_product_returns_404() {
    let (status, body) = send(app(), "PATCH", "/2000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "El producto no existe."}));
}

#[tokio::test]
async fn test_toggle_flips_availability() {
    let repository = InMemoryProductRepository::new();
    let product = seed(&repository, "Monitor", 300.0).await;

    let (status, body) = send(
        app_with(repository),
        "PATCH",
        &format!("/{}", product.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["availability"], false);
}

#[tokio::test]
async fn test_toggle_with_invalid_id_returns_400() {
    let (status, body) = send(app(), "PATCH", "/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["msg"], "ID no válido.");
}

// DELETE /{id}

#[tokio::test]
async fn test_delete_with_invalid_id_returns_400() {
    let (status, body) = send(app(), "DELETE", "/not-valid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_count(&body), 1);
    assert_eq!(body["errors"][0]["msg"], "ID no válido.");
}

#[tokio::test]
async fn test_delete_missing_product_returns_404() {
    let (status, body) = send(app(), "DELETE", "/2000", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "El producto no existe.");
}

#[tokio::test]
async fn test_delete_existing_product() {
    let repository = InMemoryProductRepository::new();
    let product = seed(&repository, "Monitor", 300.0).await;

    let (status, body) = send(
        app_with(repository),
        "DELETE",
        &format!("/{}", product.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "Success: Producto eliminado");
}

// Full lifecycle

#[tokio::test]
async fn test_create_toggle_delete_lifecycle() {
    let repository = InMemoryProductRepository::new();

    let (status, created) = send(
        app_with(repository.clone()),
        "POST",
        "/",
        Some(json!({"name": "Mouse - TEST", "price": 50, "availability": false})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["availability"], false);
    let uri = format!("/{}", created["data"]["id"]);

    let (status, toggled) = send(app_with(repository.clone()), "PATCH", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["data"]["availability"], true);

    let (status, deleted) = send(app_with(repository.clone()), "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["data"], PRODUCT_DELETED);

    let (status, missing) = send(app_with(repository), "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["error"], PRODUCT_NOT_FOUND);
}
