//! Shared response envelope types for API handlers.
//!
//! Single-object responses use a `{ "data": ... }` envelope; paginated lists
//! add the total match count and the bounds that were applied.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: todo }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": [...], "total", "limit", "offset" }` for paginated listings.
///
/// `total` counts every match, not just the rows on this page.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub data: Vec<T>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// `{ "status": "...", "data": T }` returned by action endpoints.
#[derive(Debug, Serialize)]
pub struct ActionResponse<T: Serialize> {
    pub status: String,
    pub data: T,
}
