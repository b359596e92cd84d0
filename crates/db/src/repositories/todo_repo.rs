//! Repository for the `todos` table.
//!
//! Every method takes the owner's user id and adds `owner_id = $n` to its
//! `WHERE` clause. A todo belonging to someone else is indistinguishable from
//! one that does not exist: reads return `None`, deletes return `false`.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgExecutor, PgPool, Postgres};
use todo_core::listing::{contains_pattern, SortDirection, SortField, TodoOrdering};
use todo_core::todo::{TodoPriority, TodoStatus};
use todo_core::types::DbId;

use crate::models::todo::{
    NewTodo, TodoChanges, TodoDetail, TodoFilter, TodoListItem, TodoListQuery,
};

/// Detail projection over `todos t JOIN users o`.
const DETAIL_COLUMNS: &str = "\
    t.id, t.title, t.description, t.status, t.priority, t.due_date, \
    o.username AS owner, t.created_at, t.updated_at";

/// List projection over `todos`.
const LIST_COLUMNS: &str = "id, title, status, priority, due_date";

/// Provides owner-scoped data access for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a todo for `owner_id`, returning its detail representation.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &NewTodo,
    ) -> Result<TodoDetail, sqlx::Error> {
        let query = format!(
            "WITH t AS ( \
                 INSERT INTO todos (title, description, status, priority, due_date, owner_id) \
                 VALUES ($1, $2, $3, $4, $5, $6) \
                 RETURNING * \
             ) \
             SELECT {DETAIL_COLUMNS} FROM t JOIN users o ON o.id = t.owner_id"
        );
        sqlx::query_as::<_, TodoDetail>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status.as_str())
            .bind(input.priority.as_str())
            .bind(input.due_date)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find one of the owner's todos by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<TodoDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM todos t JOIN users o ON o.id = t.owner_id \
             WHERE t.id = $1 AND t.owner_id = $2"
        );
        sqlx::query_as::<_, TodoDetail>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// One page of the owner's todos together with the total match count.
    ///
    /// Both queries read the same snapshot, so `total` always agrees with the
    /// returned page.
    pub async fn page(
        pool: &PgPool,
        owner_id: DbId,
        params: &TodoListQuery,
    ) -> Result<(Vec<TodoListItem>, i64), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let items = Self::list(&mut *tx, owner_id, params).await?;
        let total = Self::count(&mut *tx, owner_id, &params.filter).await?;
        tx.commit().await?;

        Ok((items, total))
    }

    /// One page of the owner's todos, filtered and ordered.
    pub async fn list(
        executor: impl PgExecutor<'_>,
        owner_id: DbId,
        params: &TodoListQuery,
    ) -> Result<Vec<TodoListItem>, sqlx::Error> {
        let (where_clause, next_idx) = where_clause(&params.filter);
        let query = format!(
            "SELECT {LIST_COLUMNS} FROM todos \
             WHERE {where_clause} \
             ORDER BY {order_by} \
             LIMIT ${next_idx} OFFSET ${offset_idx}",
            order_by = order_by_clause(&params.ordering),
            offset_idx = next_idx + 1,
        );

        bind_filter(sqlx::query_as::<_, TodoListItem>(&query), owner_id, &params.filter)
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(executor)
            .await
    }

    /// Number of the owner's todos matching `filter` (ignores paging).
    pub async fn count(
        executor: impl PgExecutor<'_>,
        owner_id: DbId,
        filter: &TodoFilter,
    ) -> Result<i64, sqlx::Error> {
        let (where_clause, _) = where_clause(filter);
        let query = format!("SELECT COUNT(*) FROM todos WHERE {where_clause}");

        let (count,) = bind_filter(sqlx::query_as::<_, (i64,)>(&query), owner_id, filter)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// Apply `changes` to one of the owner's todos.
    ///
    /// Only the provided fields are written. Every successful update refreshes
    /// `updated_at`, even when the written values equal the stored ones.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        changes: &TodoChanges,
    ) -> Result<Option<TodoDetail>, sqlx::Error> {
        let query = format!(
            "WITH t AS ( \
                 UPDATE todos SET \
                     title       = COALESCE($3, title), \
                     description = COALESCE($4, description), \
                     status      = COALESCE($5, status), \
                     priority    = COALESCE($6, priority), \
                     due_date    = CASE WHEN $7 THEN $8 ELSE due_date END \
                 WHERE id = $1 AND owner_id = $2 \
                 RETURNING * \
             ) \
             SELECT {DETAIL_COLUMNS} FROM t JOIN users o ON o.id = t.owner_id"
        );
        sqlx::query_as::<_, TodoDetail>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(changes.title.as_deref())
            .bind(changes.description.as_deref())
            .bind(changes.status.map(TodoStatus::as_str))
            .bind(changes.priority.map(TodoPriority::as_str))
            .bind(changes.due_date.is_some())
            .bind(changes.due_date.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Move one of the owner's todos to `status`, whatever its current status.
    ///
    /// A todo already in `status` is returned untouched, `updated_at`
    /// included.
    pub async fn set_status(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        status: TodoStatus,
    ) -> Result<Option<TodoDetail>, sqlx::Error> {
        let query = format!(
            "WITH t AS ( \
                 UPDATE todos SET status = $3 \
                 WHERE id = $1 AND owner_id = $2 AND status IS DISTINCT FROM $3 \
                 RETURNING * \
             ) \
             SELECT {DETAIL_COLUMNS} FROM t JOIN users o ON o.id = t.owner_id"
        );
        let updated = sqlx::query_as::<_, TodoDetail>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await?;

        match updated {
            Some(todo) => Ok(Some(todo)),
            None => Self::find_by_id(pool, owner_id, id).await,
        }
    }

    /// Permanently delete one of the owner's todos.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete all of the owner's todos with `status` in one
    /// statement. Returns exactly the number of rows that statement removed.
    pub async fn delete_by_status(
        pool: &PgPool,
        owner_id: DbId,
        status: TodoStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE owner_id = $1 AND status = $2")
            .bind(owner_id)
            .bind(status.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

// ---------------------------------------------------------------------------
// Query building
// ---------------------------------------------------------------------------

/// Build the `WHERE` body for `filter`. `$1` is always the owner id.
///
/// Returns the clause and the next free bind index.
fn where_clause(filter: &TodoFilter) -> (String, usize) {
    let mut conditions = vec!["owner_id = $1".to_string()];
    let mut bind_idx = 2;

    if filter.status.is_some() {
        conditions.push(format!("status = ${bind_idx}"));
        bind_idx += 1;
    }
    if filter.priority.is_some() {
        conditions.push(format!("priority = ${bind_idx}"));
        bind_idx += 1;
    }
    for _ in &filter.search {
        conditions.push(format!(
            "(title ILIKE ${bind_idx} OR description ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
    }

    (conditions.join(" AND "), bind_idx)
}

/// Bind the parameters referenced by [`where_clause`], in the same order.
fn bind_filter<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    owner_id: DbId,
    filter: &TodoFilter,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    let mut query = query.bind(owner_id);
    if let Some(status) = filter.status {
        query = query.bind(status.as_str());
    }
    if let Some(priority) = filter.priority {
        query = query.bind(priority.as_str());
    }
    for term in &filter.search {
        query = query.bind(contains_pattern(term));
    }
    query
}

/// Build the `ORDER BY` body. `id DESC` is appended so pages are stable.
///
/// Priority and status sort by rank rather than alphabetically; todos
/// without a due date sort after dated ones in either direction.
fn order_by_clause(ordering: &TodoOrdering) -> String {
    let mut terms: Vec<String> = ordering
        .keys()
        .iter()
        .map(|key| {
            let direction = match key.direction {
                SortDirection::Asc => "ASC",
                SortDirection::Desc => "DESC",
            };
            match key.field {
                SortField::DueDate => format!("due_date {direction} NULLS LAST"),
                SortField::Priority => format!(
                    "{} {direction}",
                    rank_expr("priority", TodoPriority::ALL.map(|p| (p.as_str(), p.rank())))
                ),
                SortField::Status => format!(
                    "{} {direction}",
                    rank_expr("status", TodoStatus::ALL.map(|s| (s.as_str(), s.rank())))
                ),
                SortField::CreatedAt => format!("created_at {direction}"),
                SortField::UpdatedAt => format!("updated_at {direction}"),
            }
        })
        .collect();
    terms.push("id DESC".to_string());
    terms.join(", ")
}

/// `CASE column WHEN 'a' THEN 1 ... END` from `(value, rank)` pairs.
fn rank_expr<const N: usize>(column: &str, ranks: [(&str, i16); N]) -> String {
    let arms: String = ranks
        .iter()
        .map(|(value, rank)| format!(" WHEN '{value}' THEN {rank}"))
        .collect();
    format!("CASE {column}{arms} END")
}
