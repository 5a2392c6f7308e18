//! Todo model for database persistence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A full row of the `todos` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    /// Store-assigned identifier
    ///
    /// SQLite hands out 64-bit ids; one past `i32::MAX` fails to decode
    /// instead of wrapping.
    #[sqlx(try_from = "i64")]
    pub id: i32,

    /// Todo title
    pub title: String,

    /// Optional free-form content
    pub content: Option<String>,

    /// Completion flag
    pub done: bool,

    /// Insertion time, set by the store
    pub created_at: DateTime<Utc>,

    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

/// List view of a todo, without its content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TodoSummary {
    #[sqlx(try_from = "i64")]
    pub id: i32,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
