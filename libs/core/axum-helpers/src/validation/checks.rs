//! Built-in checks and value coercion helpers.
//!
//! String checks run against the textual form of a value (see [`as_text`]):
//! absent and `null` become `""`, numbers and booleans are rendered as JSON
//! would render them.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::Value;

const DEFAULT_MESSAGE: &str = "Invalid value";

static INT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("integer pattern is valid"));

static NUMERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("numeric pattern is valid"));

type Predicate = dyn Fn(Option<&Value>) -> bool + Send + Sync;

/// A single predicate over a field value with the message reported when it
/// fails.
#[derive(Clone)]
pub struct Check {
    message: Cow<'static, str>,
    predicate: Arc<Predicate>,
}

impl Check {
    /// Build a check from a predicate. The message defaults to
    /// `"Invalid value"`.
    pub fn new(predicate: impl Fn(Option<&Value>) -> bool + Send + Sync + 'static) -> Self {
        Self {
            message: Cow::Borrowed(DEFAULT_MESSAGE),
            predicate: Arc::new(predicate),
        }
    }

    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn passes(&self, value: Option<&Value>) -> bool {
        (self.predicate)(value)
    }
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check").field("message", &self.message).finish()
    }
}

/// Textual form of a field value.
pub fn as_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Bool(b)) => Cow::Owned(b.to_string()),
        Some(Value::Number(n)) => Cow::Owned(n.to_string()),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// Numeric reading of a field value: JSON numbers as-is, strings when they
/// are numeric text. Anything else is `None`.
pub fn as_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if NUMERIC_PATTERN.is_match(s) => s.parse().ok(),
        _ => None,
    }
}

/// Integer text that fits in an `i32`.
pub fn is_int() -> Check {
    Check::new(|value| {
        let text = as_text(value);
        INT_PATTERN.is_match(&text) && text.parse::<i32>().is_ok()
    })
}

/// Decimal text such as `"12"`, `"-3.5"` or `".5"`. Exponents are rejected.
pub fn is_numeric() -> Check {
    Check::new(|value| NUMERIC_PATTERN.is_match(&as_text(value)))
}

/// Text that is not empty after trimming whitespace.
pub fn not_empty() -> Check {
    Check::new(|value| !as_text(value).trim().is_empty())
}

/// A JSON boolean. Strings such as `"true"` and absent values fail.
pub fn is_boolean() -> Check {
    Check::new(|value| matches!(value, Some(Value::Bool(_))))
}

/// Arbitrary predicate.
pub fn custom(predicate: impl Fn(Option<&Value>) -> bool + Send + Sync + 'static) -> Check {
    Check::new(predicate)
}
