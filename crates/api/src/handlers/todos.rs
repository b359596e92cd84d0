//! Handlers for the `/todos` resource.
//!
//! Every handler takes [`AuthUser`] and passes its `user_id` to the
//! repository as the owner scope. A todo owned by someone else is reported
//! exactly like a missing one.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::todo::{TodoStatus, TODO_ENTITY};
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, ReplaceTodo, TodoDetail, TodoListItem, UpdateTodo};
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::auth::AuthUser;
use crate::query::TodoListParams;
use crate::response::{ActionResponse, DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Response header carrying the number of rows removed by a bulk delete.
pub const DELETED_COUNT_HEADER: &str = "x-deleted-count";

/// Response header carrying a human-readable outcome for bodiless responses.
pub const STATUS_MESSAGE_HEADER: &str = "x-status-message";

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/todos
///
/// List the caller's todos. Supports `search`, `ordering`, `status`,
/// `priority`, `limit`, and `offset`.
pub async fn list_todos(
    user: AuthUser,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TodoListParams>,
) -> AppResult<impl IntoResponse> {
    list_page(&state, user, params, None).await
}

/// GET /api/v1/todos/completed
///
/// Like the main listing, restricted to completed todos.
pub async fn list_completed(
    user: AuthUser,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TodoListParams>,
) -> AppResult<impl IntoResponse> {
    list_page(&state, user, params, Some(TodoStatus::Completed)).await
}

/// GET /api/v1/todos/pending
///
/// Like the main listing, restricted to pending todos.
pub async fn list_pending(
    user: AuthUser,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TodoListParams>,
) -> AppResult<impl IntoResponse> {
    list_page(&state, user, params, Some(TodoStatus::Pending)).await
}

async fn list_page(
    state: &AppState,
    user: AuthUser,
    params: TodoListParams,
    fixed_status: Option<TodoStatus>,
) -> AppResult<Json<PaginatedResponse<TodoListItem>>> {
    let query = params.into_query(fixed_status)?;
    tracing::debug!(user_id = user.user_id, ?query, "Listing todos");

    let (data, total) = TodoRepo::page(&state.pool, user.user_id, &query).await?;

    Ok(Json(PaginatedResponse {
        data,
        total,
        limit: query.limit,
        offset: query.offset,
    }))
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /api/v1/todos
///
/// Create a todo owned by the caller. Any `owner`, `id`, or timestamp in
/// the body is ignored.
pub async fn create_todo(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    let new = input.into_new()?;
    let todo = TodoRepo::create(&state.pool, user.user_id, &new).await?;

    tracing::info!(
        todo_id = todo.id,
        user_id = user.user_id,
        status = %todo.status,
        priority = %todo.priority,
        "Todo created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: todo })))
}

/// GET /api/v1/todos/{id}
pub async fn get_todo(
    user: AuthUser,
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::find_by_id(&state.pool, user.user_id, todo_id)
        .await?
        .ok_or_else(|| not_found(todo_id))?;

    Ok(Json(DataResponse { data: todo }))
}

/// PUT /api/v1/todos/{id}
///
/// Full update: `title` is required. Omitted optional fields keep their
/// values; `due_date: null` clears the date.
pub async fn replace_todo(
    user: AuthUser,
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
    ApiJson(input): ApiJson<ReplaceTodo>,
) -> AppResult<impl IntoResponse> {
    let changes = input.into_changes()?;
    let todo = TodoRepo::update(&state.pool, user.user_id, todo_id, &changes)
        .await?
        .ok_or_else(|| not_found(todo_id))?;

    tracing::info!(todo_id, user_id = user.user_id, "Todo replaced");

    Ok(Json(DataResponse { data: todo }))
}

/// PATCH /api/v1/todos/{id}
///
/// Partial update of any subset of the writable fields.
pub async fn update_todo(
    user: AuthUser,
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
    ApiJson(input): ApiJson<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let changes = input.into_changes()?;
    let todo = TodoRepo::update(&state.pool, user.user_id, todo_id, &changes)
        .await?
        .ok_or_else(|| not_found(todo_id))?;

    tracing::info!(todo_id, user_id = user.user_id, "Todo updated");

    Ok(Json(DataResponse { data: todo }))
}

/// DELETE /api/v1/todos/{id}
pub async fn delete_todo(
    user: AuthUser,
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TodoRepo::delete(&state.pool, user.user_id, todo_id).await?;
    if !deleted {
        return Err(not_found(todo_id));
    }

    tracing::info!(todo_id, user_id = user.user_id, "Todo deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// PATCH /api/v1/todos/{id}/mark_completed
///
/// Set status to `completed` from any status. Repeating it changes nothing.
pub async fn mark_completed(
    user: AuthUser,
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    mark(&state, user, todo_id, TodoStatus::Completed).await
}

/// PATCH /api/v1/todos/{id}/mark_pending
///
/// Set status to `pending` from any status. Repeating it changes nothing.
pub async fn mark_pending(
    user: AuthUser,
    State(state): State<AppState>,
    Path(todo_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    mark(&state, user, todo_id, TodoStatus::Pending).await
}

async fn mark(
    state: &AppState,
    user: AuthUser,
    todo_id: DbId,
    status: TodoStatus,
) -> AppResult<Json<ActionResponse<TodoDetail>>> {
    let todo = TodoRepo::set_status(&state.pool, user.user_id, todo_id, status)
        .await?
        .ok_or_else(|| not_found(todo_id))?;

    tracing::info!(todo_id, user_id = user.user_id, %status, "Todo status set");

    Ok(Json(ActionResponse {
        status: format!("todo marked as {status}"),
        data: todo,
    }))
}

/// DELETE /api/v1/todos/clear_completed
///
/// Delete all of the caller's completed todos in one statement. Always 204;
/// the number removed is reported in `x-deleted-count`.
pub async fn clear_completed(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let deleted = TodoRepo::delete_by_status(&state.pool, user.user_id, TodoStatus::Completed)
        .await?;

    tracing::info!(user_id = user.user_id, deleted, "Completed todos cleared");

    let mut headers = HeaderMap::new();
    headers.insert(DELETED_COUNT_HEADER, HeaderValue::from(deleted));
    headers.insert(
        STATUS_MESSAGE_HEADER,
        HeaderValue::try_from(format!("{deleted} completed todos deleted"))
            .map_err(|e| AppError::InternalError(format!("Invalid header value: {e}")))?,
    );

    Ok((StatusCode::NO_CONTENT, headers))
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: TODO_ENTITY,
        id,
    })
}
