//! Shared query parameter types for API handlers.

use serde::Deserialize;
use todo_core::listing::{clamp_limit, clamp_offset, search_terms, TodoOrdering};
use todo_core::todo::{TodoPriority, TodoStatus};
use todo_db::models::todo::{TodoFilter, TodoListQuery};
use validator::{ValidationError, ValidationErrors};

/// Query parameters accepted by `GET /todos`.
///
/// Every parameter arrives as a raw string so a bad value is reported as a
/// field error instead of a generic deserialization failure. `limit` /
/// `offset` are clamped via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct TodoListParams {
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl TodoListParams {
    /// Parse into a repository query. A fixed `status` (from the
    /// `/completed` and `/pending` views) overrides any `status` parameter.
    pub fn into_query(
        self,
        fixed_status: Option<TodoStatus>,
    ) -> Result<TodoListQuery, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let status = match fixed_status {
            Some(status) => Some(status),
            None => parse_param::<TodoStatus>(&mut errors, "status", self.status.as_deref()),
        };
        let priority = parse_param::<TodoPriority>(&mut errors, "priority", self.priority.as_deref());
        let limit = parse_integer(&mut errors, "limit", self.limit.as_deref());
        let offset = parse_integer(&mut errors, "offset", self.offset.as_deref());

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        Ok(TodoListQuery {
            filter: TodoFilter {
                status,
                priority,
                search: self.search.as_deref().map(search_terms).unwrap_or_default(),
            },
            ordering: TodoOrdering::parse(self.ordering.as_deref()),
            limit: clamp_limit(limit),
            offset: clamp_offset(offset),
        })
    }
}

/// Parse an optional enumerated parameter; empty strings mean "unset".
fn parse_param<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: Option<&str>,
) -> Option<T>
where
    T: std::str::FromStr<Err = String>,
{
    let raw = raw.filter(|s| !s.is_empty())?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(msg) => {
            let mut err = ValidationError::new("invalid_choice");
            err.message = Some(msg.into());
            errors.add(field, err);
            None
        }
    }
}

/// Parse an optional integer parameter; empty strings mean "unset".
fn parse_integer(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: Option<&str>,
) -> Option<i64> {
    let raw = raw.filter(|s| !s.is_empty())?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            let mut err = ValidationError::new("invalid_integer");
            err.message = Some(format!("A valid integer is required, got '{raw}'").into());
            errors.add(field, err);
            None
        }
    }
}
