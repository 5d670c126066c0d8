//! Declarative request input validation.
//!
//! A [`RuleSet`] is an ordered list of [`FieldRules`]. Each `FieldRules`
//! names one field in a request location (path params or JSON body) and an
//! ordered chain of [`Check`]s. Evaluating a rule set against a
//! [`RequestContext`] appends one [`Violation`] per failing check, in
//! declaration order. Chains do not stop at the first failure unless
//! [`FieldRules::bail`] is set.
//!
//! Rule sets are evaluated by the [`Validated`](crate::extractors::Validated)
//! extractor, which rejects the request with `400 {"errors": [...]}` when any
//! violation was recorded.
//!
//! ```rust
//! use axum_helpers::validation::{checks, FieldRules, RequestContext, RuleSet};
//! use serde_json::json;
//!
//! let rules = RuleSet::new()
//!     .field(FieldRules::body("name").check(checks::not_empty().with_message("Name is required")));
//!
//! let mut context = RequestContext::new(Default::default(), json!({ "name": "" }));
//! rules.evaluate(&mut context);
//!
//! assert_eq!(context.violations().len(), 1);
//! assert_eq!(context.violations()[0].msg, "Name is required");
//! ```

pub mod checks;
mod context;

pub use checks::Check;
pub use context::{InputErrors, RequestContext};

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Where a validated field is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Named path parameter
    Params,
    /// Top-level key of the JSON body
    Body,
}

/// One failed check on one field.
///
/// ```json
/// { "type": "field", "value": "abc", "msg": "Invalid value", "path": "id", "location": "params" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Violation {
    /// Always `"field"`
    #[serde(rename = "type")]
    pub kind: String,
    /// The offending value; omitted when the field was absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Message of the failing check
    pub msg: String,
    /// Field name
    pub path: String,
    /// Where the field was read from
    pub location: Location,
}

impl Violation {
    pub fn new(
        path: impl Into<String>,
        location: Location,
        value: Option<Value>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }
}

/// Ordered checks for a single field.
#[derive(Clone)]
pub struct FieldRules {
    field: String,
    location: Location,
    checks: Vec<Check>,
    bail: bool,
}

impl FieldRules {
    /// Rules for the path parameter `field`.
    pub fn param(field: impl Into<String>) -> Self {
        Self::at(field, Location::Params)
    }

    /// Rules for the top-level body key `field`.
    pub fn body(field: impl Into<String>) -> Self {
        Self::at(field, Location::Body)
    }

    fn at(field: impl Into<String>, location: Location) -> Self {
        Self {
            field: field.into(),
            location,
            checks: Vec::new(),
            bail: false,
        }
    }

    /// Append a check to the chain.
    pub fn check(mut self, check: Check) -> Self {
        self.checks.push(check);
        self
    }

    /// Stop evaluating this chain after its first failure.
    pub fn bail(mut self) -> Self {
        self.bail = true;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn location(&self) -> Location {
        self.location
    }

    fn evaluate(&self, context: &RequestContext, violations: &mut Vec<Violation>) {
        let value = context.lookup(self.location, &self.field);

        for check in &self.checks {
            if check.passes(value.as_ref()) {
                continue;
            }

            violations.push(Violation::new(
                &self.field,
                self.location,
                value.clone(),
                check.message(),
            ));

            if self.bail {
                break;
            }
        }
    }
}

impl std::fmt::Debug for FieldRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRules")
            .field("field", &self.field)
            .field("location", &self.location)
            .field("checks", &self.checks.len())
            .field("bail", &self.bail)
            .finish()
    }
}

/// Ordered collection of field rules evaluated as one unit.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the rules for one field.
    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    /// Whether any rule reads a path parameter.
    pub fn reads_params(&self) -> bool {
        self.fields.iter().any(|f| f.location == Location::Params)
    }

    /// Whether any rule reads the JSON body.
    pub fn reads_body(&self) -> bool {
        self.fields.iter().any(|f| f.location == Location::Body)
    }

    /// Run every chain and record the failures on `context`.
    pub fn evaluate(&self, context: &mut RequestContext) {
        let mut violations = Vec::new();
        for rules in &self.fields {
            rules.evaluate(context, &mut violations);
        }
        context.record_all(violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn body_context(body: Value) -> RequestContext {
        RequestContext::new(HashMap::new(), body)
    }

    #[test]
    fn test_chain_collects_every_failure_without_bail() {
        let rules = RuleSet::new().field(
            FieldRules::body("price")
                .check(checks::is_numeric().with_message("first"))
                .check(checks::not_empty().with_message("second")),
        );

        let mut context = body_context(json!({}));
        rules.evaluate(&mut context);

        let messages: Vec<_> = context.violations().iter().map(|v| v.msg.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_bail_stops_after_first_failure() {
        let rules = RuleSet::new().field(
            FieldRules::body("price")
                .check(checks::is_numeric().with_message("first"))
                .check(checks::not_empty().with_message("second"))
                .bail(),
        );

        let mut context = body_context(json!({}));
        rules.evaluate(&mut context);

        assert_eq!(context.violations().len(), 1);
        assert_eq!(context.violations()[0].msg, "first");
    }

    #[test]
    fn test_violations_follow_declaration_order_across_fields() {
        let rules = RuleSet::new()
            .field(FieldRules::body("b").check(checks::not_empty().with_message("b")))
            .field(FieldRules::body("a").check(checks::not_empty().with_message("a")));

        let mut context = body_context(json!({ "a": "", "b": "" }));
        rules.evaluate(&mut context);

        let paths: Vec<_> = context.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["b", "a"]);
    }

    #[test]
    fn test_passing_input_records_nothing() {
        let rules = RuleSet::new()
            .field(FieldRules::body("name").check(checks::not_empty()))
            .field(FieldRules::body("price").check(checks::is_numeric()));

        let mut context = body_context(json!({ "name": "Monitor", "price": 300 }));
        rules.evaluate(&mut context);

        assert!(!context.has_violations());
    }

    #[test]
    fn test_param_violation_carries_raw_value() {
        let rules = RuleSet::new().field(FieldRules::param("id").check(checks::is_int()));

        let params = HashMap::from([("id".to_string(), "abc".to_string())]);
        let mut context = RequestContext::new(params, Value::Null);
        rules.evaluate(&mut context);

        let violation = &context.violations()[0];
        assert_eq!(violation.value, Some(json!("abc")));
        assert_eq!(violation.location, Location::Params);
        assert_eq!(violation.msg, "Invalid value");
    }

    #[test]
    fn test_violation_serialization_shape() {
        let violation = Violation::new("id", Location::Params, Some(json!("abc")), "bad id");
        assert_eq!(
            serde_json::to_value(&violation).unwrap(),
            json!({
                "type": "field",
                "value": "abc",
                "msg": "bad id",
                "path": "id",
                "location": "params"
            })
        );

        let absent = Violation::new("name", Location::Body, None, "required");
        let value = serde_json::to_value(&absent).unwrap();
        assert!(value.get("value").is_none());
        assert_eq!(value["location"], "body");
    }

    #[test]
    fn test_rule_set_reports_locations_read() {
        let params_only = RuleSet::new().field(FieldRules::param("id"));
        assert!(params_only.reads_params());
        assert!(!params_only.reads_body());

        let both = RuleSet::new()
            .field(FieldRules::param("id"))
            .field(FieldRules::body("name"));
        assert!(both.reads_params());
        assert!(both.reads_body());
    }
}
