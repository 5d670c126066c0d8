//! Machine-readable error identifiers carried by [`super::ErrorResponse`].
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client errors live in 1000-1999, persistence errors in 2000-2999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadRequest,
    /// Body declared as JSON but could not be parsed
    JsonExtraction,
    NotFound,
    DatabaseError,
    /// No pooled connection could be acquired
    DatabaseUnavailable,
}

impl ErrorCode {
    const fn spec(self) -> (&'static str, i32, &'static str) {
        match self {
            Self::BadRequest => ("BAD_REQUEST", 1000, "Bad request"),
            Self::JsonExtraction => ("JSON_EXTRACTION", 1003, "Failed to parse request body"),
            Self::NotFound => ("NOT_FOUND", 1004, "Resource not found"),
            Self::DatabaseError => ("DATABASE_ERROR", 2003, "Database error occurred"),
            Self::DatabaseUnavailable => (
                "DATABASE_UNAVAILABLE",
                2013,
                "Database is temporarily unavailable",
            ),
        }
    }

    pub const fn as_str(self) -> &'static str {
        self.spec().0
    }

    /// Integer code, logged as the `error_code` field.
    pub const fn code(self) -> i32 {
        self.spec().1
    }

    pub const fn default_message(self) -> &'static str {
        self.spec().2
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
