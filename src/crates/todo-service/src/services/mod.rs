/// gRPC Service implementations for the todo server

pub mod todo;

pub use todo::TodoServiceImpl;
