//! Todo repository for database operations
//!
//! Every function issues exactly one SQL statement.

use crate::db::connection::DatabasePool;
use crate::db::error::{DatabaseError, DbResult};
use crate::db::models::{Todo, TodoSummary};

const TODO_COLUMNS: &str = "id, title, content, done, created_at, updated_at";

/// Todo repository for managing todo database operations
pub struct TodoRepository;

impl TodoRepository {
    /// List every todo, most recently updated first
    ///
    /// Rows sharing an `updated_at` value are ordered by descending id, so
    /// todos inserted in the same millisecond still come back newest first.
    pub async fn list(pool: &DatabasePool) -> DbResult<Vec<TodoSummary>> {
        let todos = sqlx::query_as::<_, TodoSummary>(
            "SELECT id, title, done, created_at, updated_at FROM todos
             ORDER BY updated_at DESC, id DESC",
        )
        .fetch_all(pool)
        .await?;

        Ok(todos)
    }

    /// Get a todo by ID
    ///
    /// # Returns
    /// The full row, or `DatabaseError::NotFound` when no row has this id
    pub async fn get_by_id(pool: &DatabasePool, id: i32) -> DbResult<Todo> {
        sqlx::query_as::<_, Todo>(&format!("SELECT {TODO_COLUMNS} FROM todos WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found(format!("todo {id}")))
    }

    /// Insert a new todo
    ///
    /// # Arguments
    /// * `pool` - Database connection pool
    /// * `title` - Todo title
    /// * `content` - Todo content; an empty string is stored as NULL
    /// * `done` - Initial completion flag
    ///
    /// # Returns
    /// The row as persisted, with the store-assigned id and timestamps
    pub async fn create(
        pool: &DatabasePool,
        title: &str,
        content: &str,
        done: bool,
    ) -> DbResult<Todo> {
        let todo = sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos (title, content, done) VALUES (?, ?, ?)
             RETURNING {TODO_COLUMNS}"
        ))
        .bind(title)
        .bind(non_empty(content))
        .bind(done)
        .fetch_one(pool)
        .await?;

        Ok(todo)
    }

    /// Overwrite the mutable fields of a todo and bump its `updated_at`
    ///
    /// # Returns
    /// The row after the update, or `DatabaseError::NotFound` when no row
    /// has this id
    pub async fn update(
        pool: &DatabasePool,
        id: i32,
        title: &str,
        content: &str,
        done: bool,
    ) -> DbResult<Todo> {
        sqlx::query_as::<_, Todo>(&format!(
            "UPDATE todos
             SET title = ?, content = ?, done = ?,
                 updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE id = ?
             RETURNING {TODO_COLUMNS}"
        ))
        .bind(title)
        .bind(non_empty(content))
        .bind(done)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found(format!("todo {id}")))
    }

    /// Delete a todo
    ///
    /// Deleting an id that does not exist is not an error.
    ///
    /// # Returns
    /// Number of rows removed (0 or 1)
    pub async fn delete(pool: &DatabasePool, id: i32) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn non_empty(content: &str) -> Option<&str> {
    (!content.is_empty()).then_some(content)
}
