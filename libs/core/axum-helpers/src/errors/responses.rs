//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
use crate::validation::InputErrors;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 2003,
        "error": "DATABASE_ERROR",
        "message": "Database error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Input validation failed",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": "abc",
            "msg": "Invalid value",
            "path": "id",
            "location": "params"
        }]
    })
)]
pub struct ValidationErrorsResponse(pub InputErrors);
