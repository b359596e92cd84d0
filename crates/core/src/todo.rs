//! Todo status/priority value sets and input validators.
//!
//! Status and priority are persisted as text; the enums here are the single
//! source of truth for which strings are accepted and how they rank when
//! sorted. Validators return [`ValidationError`] so they plug straight into
//! `#[validate(custom(...))]` on the input DTOs.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a todo title in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Entity name used in `NotFound` errors.
pub const TODO_ENTITY: &str = "Todo";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a todo. Any status may move to any other through a
/// direct update; there is no enforced workflow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 4] = [
        TodoStatus::Pending,
        TodoStatus::InProgress,
        TodoStatus::Completed,
        TodoStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::InProgress => "in_progress",
            TodoStatus::Completed => "completed",
            TodoStatus::Cancelled => "cancelled",
        }
    }

    /// Sort rank used when ordering by status.
    pub fn rank(self) -> i16 {
        match self {
            TodoStatus::Pending => 1,
            TodoStatus::InProgress => 2,
            TodoStatus::Completed => 3,
            TodoStatus::Cancelled => 4,
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TodoStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| invalid_choice("status", s, &TodoStatus::ALL.map(TodoStatus::as_str)))
    }
}

impl TryFrom<String> for TodoStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Todo priority. Sorting "descending" means high before low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TodoPriority {
    pub const ALL: [TodoPriority; 3] = [TodoPriority::Low, TodoPriority::Medium, TodoPriority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            TodoPriority::Low => "low",
            TodoPriority::Medium => "medium",
            TodoPriority::High => "high",
        }
    }

    /// Sort rank used when ordering by priority.
    pub fn rank(self) -> i16 {
        match self {
            TodoPriority::Low => 1,
            TodoPriority::Medium => 2,
            TodoPriority::High => 3,
        }
    }
}

impl fmt::Display for TodoPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TodoPriority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| {
                invalid_choice("priority", s, &TodoPriority::ALL.map(TodoPriority::as_str))
            })
    }
}

impl TryFrom<String> for TodoPriority {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

fn invalid_choice(field: &str, value: &str, allowed: &[&str]) -> String {
    format!(
        "Invalid {field} '{value}'. Must be one of: {}",
        allowed.join(", ")
    )
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// Title must contain at least one non-whitespace character and fit the
/// column limit. Both checks apply to the trimmed value, which is what gets
/// stored.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(field_error("blank", "Title cannot be blank".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(field_error(
            "max_length",
            format!("Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Status must be one of the enumerated values.
pub fn validate_status(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<TodoStatus>()
        .map(|_| ())
        .map_err(|msg| field_error("invalid_choice", msg))
}

/// Priority must be one of the enumerated values.
pub fn validate_priority(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<TodoPriority>()
        .map(|_| ())
        .map_err(|msg| field_error("invalid_choice", msg))
}

fn field_error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}
