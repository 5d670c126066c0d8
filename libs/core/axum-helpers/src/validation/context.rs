use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use super::{Location, Violation};

/// Per-request input as seen by validation and handlers.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    params: HashMap<String, String>,
    body: Value,
    violations: Vec<Violation>,
}

impl RequestContext {
    pub fn new(params: HashMap<String, String>, body: Value) -> Self {
        Self {
            params,
            body,
            violations: Vec::new(),
        }
    }

    /// Raw path parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Path parameter parsed as `T`.
    pub fn param_as<T: FromStr>(&self, name: &str) -> Option<T> {
        self.param(name)?.parse().ok()
    }

    /// Parsed JSON body, `null` when the route does not read one.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Top-level body key. `None` when absent or when the body is not an object.
    pub fn body_field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn record(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub(crate) fn record_all(&mut self, violations: Vec<Violation>) {
        self.violations.extend(violations);
    }

    pub(crate) fn lookup(&self, location: Location, field: &str) -> Option<Value> {
        match location {
            Location::Params => self.param(field).map(|v| Value::String(v.to_string())),
            Location::Body => self.body_field(field).cloned(),
        }
    }

    /// Pass the context through when it holds no violations.
    pub fn gate(self) -> Result<Self, InputErrors> {
        if self.has_violations() {
            Err(InputErrors {
                errors: self.violations,
            })
        } else {
            Ok(self)
        }
    }
}

/// Body of a 400 rejection: every violation recorded for the request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InputErrors {
    pub errors: Vec<Violation>,
}

impl IntoResponse for InputErrors {
    fn into_response(self) -> Response {
        tracing::debug!(violations = self.errors.len(), "Rejecting request input");
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}
