//! Input rules for the product routes.
//!
//! Chains run to completion, so an empty body on `PUT /{id}` reports five
//! violations (name 1, price 3, availability 1) and on `POST /` four.

use std::sync::LazyLock;

use axum_helpers::{
    FieldRules, RequestContext, RuleSet, ValidationRules,
    checks::{self, Check},
};
use serde_json::Value;

use crate::error::{ProductError, ProductResult};

pub const INVALID_ID: &str = "ID no válido.";
pub const NAME_REQUIRED: &str = "El nombre del producto es obligatorio.";
pub const INVALID_PRICE: &str = "El precio no es válido.";
pub const PRICE_REQUIRED: &str = "El precio del producto es obligatorio.";
pub const INVALID_AVAILABILITY: &str = "El valor de disponibilidad no es válido.";

/// A JSON number or numeric string strictly greater than zero.
pub fn is_positive_price(value: Option<&Value>) -> bool {
    checks::as_number(value).is_some_and(|price| price > 0.0)
}

fn id_rules() -> FieldRules {
    FieldRules::param("id").check(checks::is_int().with_message(INVALID_ID))
}

fn name_rules() -> FieldRules {
    FieldRules::body("name").check(checks::not_empty().with_message(NAME_REQUIRED))
}

fn price_rules() -> FieldRules {
    FieldRules::body("price")
        .check(checks::is_numeric().with_message(INVALID_PRICE))
        .check(checks::not_empty().with_message(PRICE_REQUIRED))
        .check(Check::new(is_positive_price).with_message(INVALID_PRICE))
}

fn availability_rules() -> FieldRules {
    FieldRules::body("availability").check(checks::is_boolean().with_message(INVALID_AVAILABILITY))
}

/// `GET`, `PATCH` and `DELETE /{id}`
pub struct ProductIdRules;

impl ValidationRules for ProductIdRules {
    fn rule_set() -> &'static RuleSet {
        static RULES: LazyLock<RuleSet> = LazyLock::new(|| RuleSet::new().field(id_rules()));
        &RULES
    }
}

/// `POST /`
pub struct CreateProductRules;

impl ValidationRules for CreateProductRules {
    fn rule_set() -> &'static RuleSet {
        static RULES: LazyLock<RuleSet> =
            LazyLock::new(|| RuleSet::new().field(name_rules()).field(price_rules()));
        &RULES
    }
}

/// `PUT /{id}`
pub struct UpdateProductRules;

impl ValidationRules for UpdateProductRules {
    fn rule_set() -> &'static RuleSet {
        static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
            RuleSet::new()
                .field(id_rules())
                .field(name_rules())
                .field(price_rules())
                .field(availability_rules())
        });
        &RULES
    }
}

/// The validated `id` path parameter.
pub fn product_id(context: &RequestContext) -> ProductResult<i32> {
    context
        .param_as("id")
        .ok_or_else(|| ProductError::InvalidInput(INVALID_ID.to_string()))
}
