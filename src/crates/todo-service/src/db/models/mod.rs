//! Database models
//!
//! Row types for the todo database. Timestamps are stored as RFC 3339 text
//! generated by SQLite and decoded into `chrono::DateTime<Utc>`.

pub mod todo;

pub use todo::{Todo, TodoSummary};
