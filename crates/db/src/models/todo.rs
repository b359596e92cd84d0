//! Todo representations, input DTOs, and list-query parameters.
//!
//! One entity, three wire shapes:
//! - [`TodoDetail`]: every field, owner rendered as a username.
//! - [`TodoListItem`]: the reduced projection returned by listings.
//! - [`CreateTodo`] / [`ReplaceTodo`] / [`UpdateTodo`]: accepted input.
//!
//! Which shape an endpoint speaks is fixed by the repository call it makes,
//! so the choice is visible in the types rather than decided at runtime.
//! Input DTOs never carry `id`, `owner`, or timestamps; any such keys in a
//! request body are dropped during deserialization. Only `due_date` accepts
//! an explicit `null`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::listing::TodoOrdering;
use todo_core::patch::{non_null, nullable};
use todo_core::todo::{
    validate_priority, validate_status, validate_title, TodoPriority, TodoStatus,
};
use todo_core::types::{Date, DbId, Timestamp};
use validator::{Validate, ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Representations (query output)
// ---------------------------------------------------------------------------

/// Detail representation: a `todos` row joined with its owner's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TodoDetail {
    pub id: DbId,
    pub title: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: TodoStatus,
    #[sqlx(try_from = "String")]
    pub priority: TodoPriority,
    pub due_date: Option<Date>,
    /// Owner's username; the internal user id is never exposed.
    pub owner: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// List representation: just enough to render a row in a list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TodoListItem {
    pub id: DbId,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub status: TodoStatus,
    #[sqlx(try_from = "String")]
    pub priority: TodoPriority,
    pub due_date: Option<Date>,
}

// ---------------------------------------------------------------------------
// Input DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Creation input. Unset `status`/`priority` take the entity defaults.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTodo {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(
        required(message = "This field is required"),
        custom(function = "validate_title")
    )]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_priority"))]
    pub priority: Option<String>,
    pub due_date: Option<Date>,
}

/// Full update (PUT). `title` is required; omitted optional fields keep
/// their stored values and `due_date: null` clears the date.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReplaceTodo {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(
        required(message = "This field is required"),
        custom(function = "validate_title")
    )]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_priority"))]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub due_date: Option<Option<Date>>,
}

/// Partial update (PATCH). Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTodo {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_title"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(custom(function = "validate_priority"))]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub due_date: Option<Option<Date>>,
}

// ---------------------------------------------------------------------------
// Validated inputs (what the repository accepts)
// ---------------------------------------------------------------------------

/// A fully validated new todo with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub due_date: Option<Date>,
}

/// A validated set of field changes. `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    pub due_date: Option<Option<Date>>,
}

impl CreateTodo {
    /// Validate and convert into a [`NewTodo`]. Titles are trimmed.
    pub fn into_new(self) -> Result<NewTodo, ValidationErrors> {
        self.validate()?;
        let status = parse_choice::<TodoStatus>("status", self.status.as_deref())?;
        let priority = parse_choice::<TodoPriority>("priority", self.priority.as_deref())?;

        Ok(NewTodo {
            title: self.title.as_deref().map(str::trim).unwrap_or_default().to_string(),
            description: self.description.unwrap_or_default(),
            status: status.unwrap_or_default(),
            priority: priority.unwrap_or_default(),
            due_date: self.due_date,
        })
    }
}

impl ReplaceTodo {
    pub fn into_changes(self) -> Result<TodoChanges, ValidationErrors> {
        self.validate()?;
        Ok(TodoChanges {
            title: self.title.map(|t| t.trim().to_string()),
            description: self.description,
            status: parse_choice("status", self.status.as_deref())?,
            priority: parse_choice("priority", self.priority.as_deref())?,
            due_date: self.due_date,
        })
    }
}

impl UpdateTodo {
    pub fn into_changes(self) -> Result<TodoChanges, ValidationErrors> {
        self.validate()?;
        Ok(TodoChanges {
            title: self.title.map(|t| t.trim().to_string()),
            description: self.description,
            status: parse_choice("status", self.status.as_deref())?,
            priority: parse_choice("priority", self.priority.as_deref())?,
            due_date: self.due_date,
        })
    }
}

/// Parse an enumerated field, reporting failure against `field`.
fn parse_choice<T>(field: &'static str, value: Option<&str>) -> Result<Option<T>, ValidationErrors>
where
    T: FromStr<Err = String>,
{
    value.map(str::parse::<T>).transpose().map_err(|msg| {
        let mut err = ValidationError::new("invalid_choice");
        err.message = Some(msg.into());
        let mut errors = ValidationErrors::new();
        errors.add(field, err);
        errors
    })
}

// ---------------------------------------------------------------------------
// List query parameters
// ---------------------------------------------------------------------------

/// Row filter applied on top of the mandatory owner scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    pub status: Option<TodoStatus>,
    pub priority: Option<TodoPriority>,
    /// Every term must match `title` or `description` (case-insensitive).
    pub search: Vec<String>,
}

impl TodoFilter {
    pub fn with_status(status: TodoStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// A complete page request: filter, ordering, and bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoListQuery {
    pub filter: TodoFilter,
    pub ordering: TodoOrdering,
    pub limit: i64,
    pub offset: i64,
}
