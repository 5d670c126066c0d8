use axum_helpers::{RequestContext, checks};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{ProductError, ProductResult};

/// Maximum number of products returned by a listing.
pub const DEFAULT_LIST_LIMIT: u64 = 50;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"id": 1, "name": "Monitor Curvo 49 Pulgadas", "price": 300, "availability": true}))]
pub struct Product {
    /// The Product ID
    pub id: i32,
    /// The Product name
    pub name: String,
    /// The Product price
    pub price: f64,
    /// The Product availability
    pub availability: bool,
}

impl Product {
    /// Overwrite every mutable field with `input`.
    pub fn apply_update(&mut self, input: UpdateProduct) {
        self.name = input.name;
        self.price = input.price;
        self.availability = input.availability;
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
    }
}

/// DTO for creating a new product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Monitor Curvo 49 Pulgadas", "price": 399}))]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    /// Defaults to `true`
    #[serde(default = "default_availability")]
    pub availability: bool,
}

fn default_availability() -> bool {
    true
}

/// DTO for replacing a product's fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Monitor Curvo 49 Pulgadas", "price": 399, "availability": true}))]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Listing parameters. Listings are ordered by descending price, ties
/// broken by ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductQuery {
    pub limit: u64,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIST_LIMIT,
        }
    }
}

/// Success envelope: `{"data": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

fn price_field(context: &RequestContext) -> ProductResult<f64> {
    checks::as_number(context.body_field("price"))
        .ok_or_else(|| ProductError::InvalidInput("price is not a number".to_string()))
}

fn name_field(context: &RequestContext) -> String {
    checks::as_text(context.body_field("name")).into_owned()
}

impl TryFrom<&RequestContext> for CreateProduct {
    type Error = ProductError;

    fn try_from(context: &RequestContext) -> ProductResult<Self> {
        let availability = match context.body_field("availability") {
            Some(Value::Bool(value)) => *value,
            _ => default_availability(),
        };

        Ok(Self {
            name: name_field(context),
            price: price_field(context)?,
            availability,
        })
    }
}

impl TryFrom<&RequestContext> for UpdateProduct {
    type Error = ProductError;

    fn try_from(context: &RequestContext) -> ProductResult<Self> {
        let availability = context
            .body_field("availability")
            .and_then(Value::as_bool)
            .ok_or_else(|| ProductError::InvalidInput("availability is not a boolean".to_string()))?;

        Ok(Self {
            name: name_field(context),
            price: price_field(context)?,
            availability,
        })
    }
}
