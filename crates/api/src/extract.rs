//! Request extractors that report failures through [`AppError`].
//!
//! Axum's stock `Json` and `Query` answer bad input with plain-text
//! rejections. These wrappers keep every client error in the JSON envelope,
//! and a body field of the wrong type comes back as a field error.

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Key used when a failure belongs to the body as a whole rather than a
/// single field (missing field, non-object body).
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// JSON body extractor. Type errors are reported against the offending field:
///
/// ```text
/// {"error": "Validation failed", "code": "VALIDATION_ERROR",
///  "fields": {"due_date": ["input contains invalid characters"]}}
/// ```
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state).await?;

        serde_path_to_error::deserialize(value)
            .map(ApiJson)
            .map_err(|err| {
                let path = err.path().to_string();
                let field = if path == "." {
                    NON_FIELD_ERRORS.to_string()
                } else {
                    path
                };
                AppError::InvalidField {
                    field,
                    message: err.into_inner().to_string(),
                }
            })
    }
}

/// Query string extractor with JSON-envelope rejections.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(params))
    }
}
