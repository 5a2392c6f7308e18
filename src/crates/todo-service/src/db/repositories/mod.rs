//! Repository pattern implementations for database access

pub mod todo_repo;

pub use todo_repo::TodoRepository;
