pub mod auth;
pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/signup                       register (public)
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
/// /auth/me                           current user (requires auth)
///
/// /todos                             list, create
/// /todos/completed                   completed list
/// /todos/pending                     pending list
/// /todos/clear_completed             bulk delete completed (DELETE)
/// /todos/{id}                        get, replace, update, delete
/// /todos/{id}/mark_completed         status action (PATCH)
/// /todos/{id}/mark_pending           status action (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/todos", todos::router())
}
