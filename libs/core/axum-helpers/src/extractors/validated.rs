//! Extractor that runs a [`RuleSet`] before the handler body executes.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::ops::Deref;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::validation::{RequestContext, RuleSet};

/// Binds a static rule set to a type usable with [`Validated`].
///
/// ```ignore
/// struct NameRules;
///
/// impl ValidationRules for NameRules {
///     fn rule_set() -> &'static RuleSet {
///         static RULES: LazyLock<RuleSet> = LazyLock::new(|| {
///             RuleSet::new().field(FieldRules::body("name").check(checks::not_empty()))
///         });
///         &RULES
///     }
/// }
/// ```
pub trait ValidationRules: Send + Sync + 'static {
    fn rule_set() -> &'static RuleSet;
}

/// Request input that passed `R`'s rule set.
///
/// Path parameters are read only when `R` has param rules and the JSON body
/// only when it has body rules. Any violation rejects the request with
/// `400 {"errors": [...]}` before the handler runs.
///
/// ```ignore
/// async fn update(request: Validated<UpdateRules>) -> impl IntoResponse {
///     let id: i32 = request.param_as("id").unwrap_or_default();
///     let name = request.body_field("name");
///     // ...
/// }
/// ```
pub struct Validated<R> {
    context: RequestContext,
    _rules: PhantomData<fn() -> R>,
}

impl<R> Validated<R> {
    pub fn into_inner(self) -> RequestContext {
        self.context
    }
}

impl<R> Deref for Validated<R> {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.context
    }
}

impl<R, S> FromRequest<S> for Validated<R>
where
    R: ValidationRules,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let rules = R::rule_set();
        let (mut parts, body) = req.into_parts();

        // An undecodable segment is left out so its rule chain reports it.
        let params = if rules.reads_params() {
            match Path::<HashMap<String, String>>::from_request_parts(&mut parts, state).await {
                Ok(Path(params)) => params,
                Err(rejection) => {
                    tracing::debug!(%rejection, "Path parameters could not be decoded");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        let body = if rules.reads_body() {
            read_json_body(Request::from_parts(parts, body), state).await?
        } else {
            Value::Null
        };

        let mut context = RequestContext::new(params, body);
        rules.evaluate(&mut context);

        let context = context.gate().map_err(IntoResponse::into_response)?;
        Ok(Self {
            context,
            _rules: PhantomData,
        })
    }
}

/// Requests without a JSON content type, or with a blank body, are treated
/// as an empty object.
async fn read_json_body<S>(req: Request, state: &S) -> Result<Value, Response>
where
    S: Send + Sync,
{
    if !has_json_content_type(req.headers()) {
        return Ok(Value::Object(Map::new()));
    }

    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(IntoResponse::into_response)?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let Json(value) =
        Json::<Value>::from_bytes(&bytes).map_err(|e| AppError::from(e).into_response())?;
    Ok(value)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
