//! Route definitions for the `/todos` resource.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Routes mounted at `/todos`.
///
/// Static segments take precedence over `/{id}`, so `/completed` is never
/// parsed as an id.
///
/// ```text
/// GET    /                      -> list_todos
/// POST   /                      -> create_todo
/// GET    /completed             -> list_completed
/// GET    /pending               -> list_pending
/// DELETE /clear_completed       -> clear_completed
/// GET    /{id}                  -> get_todo
/// PUT    /{id}                  -> replace_todo
/// PATCH  /{id}                  -> update_todo
/// DELETE /{id}                  -> delete_todo
/// PATCH  /{id}/mark_completed   -> mark_completed
/// PATCH  /{id}/mark_pending     -> mark_pending
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list_todos).post(todos::create_todo))
        .route("/completed", get(todos::list_completed))
        .route("/pending", get(todos::list_pending))
        .route("/clear_completed", delete(todos::clear_completed))
        .route(
            "/{id}",
            get(todos::get_todo)
                .put(todos::replace_todo)
                .patch(todos::update_todo)
                .delete(todos::delete_todo),
        )
        .route("/{id}/mark_completed", patch(todos::mark_completed))
        .route("/{id}/mark_pending", patch(todos::mark_pending))
}
