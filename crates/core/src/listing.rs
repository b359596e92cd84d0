//! List-query vocabulary: ordering, free-text search, and page bounds.
//!
//! These are parsed from raw query-string values here so the repository only
//! ever sees validated, typed inputs.

/// Default page size for list endpoints.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Maximum page size for list endpoints.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a requested page size into `1..=MAX_PAGE_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT)
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Fields a todo listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    DueDate,
    Priority,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::DueDate,
        SortField::Priority,
        SortField::Status,
        SortField::CreatedAt,
        SortField::UpdatedAt,
    ];

    /// Query-string name of the field.
    pub fn name(self) -> &'static str {
        match self {
            SortField::DueDate => "due_date",
            SortField::Priority => "priority",
            SortField::Status => "status",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        SortField::ALL.into_iter().find(|f| f.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub const fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// An ordered list of sort keys. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoOrdering {
    keys: Vec<SortKey>,
}

impl Default for TodoOrdering {
    /// Priority high to low, then soonest due date, then newest first.
    fn default() -> Self {
        Self {
            keys: vec![
                SortKey::desc(SortField::Priority),
                SortKey::asc(SortField::DueDate),
                SortKey::desc(SortField::CreatedAt),
            ],
        }
    }
}

impl TodoOrdering {
    /// Parse an `ordering` query value such as `"-due_date,priority"`.
    ///
    /// Unknown field names are skipped, as are repeats of a field already
    /// seen. When nothing valid remains the default ordering is returned.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let mut keys: Vec<SortKey> = Vec::new();
        for term in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (name, direction) = match term.strip_prefix('-') {
                Some(name) => (name, SortDirection::Desc),
                None => (term, SortDirection::Asc),
            };
            let Some(field) = SortField::from_name(name) else {
                continue;
            };
            if keys.iter().any(|k| k.field == field) {
                continue;
            }
            keys.push(SortKey { field, direction });
        }

        if keys.is_empty() {
            Self::default()
        } else {
            Self { keys }
        }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Split a `search` value into terms on whitespace and commas.
///
/// Every term must match for a record to be included.
pub fn search_terms(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Escape `LIKE` metacharacters (`\`, `%`, `_`) with a backslash.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a case-insensitive "contains" pattern for `ILIKE`.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
