//! gRPC CRUD service for todo items
//!
//! Exposes `todo.TodoService` (list, get, create, update, delete) over a
//! single SQLite `todos` table. Each call maps to one SQL statement.

pub mod config;
pub mod db;
pub mod proto;
pub mod proto_conv;
pub mod server;
pub mod services;

pub use config::{ConfigError, ServerConfig};
pub use db::{DatabaseConnection, DatabaseError, DatabasePool, DbResult};
pub use server::{serve_with_shutdown, shutdown_signal, ServerError};
pub use services::TodoServiceImpl;
