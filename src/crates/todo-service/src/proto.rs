//! gRPC Protocol Buffer message definitions and service traits
//!
//! Generated from `proto/todo.proto` by `build.rs`.

pub mod todo {
    tonic::include_proto!("todo");
}

/// Encoded file descriptor set for gRPC server reflection
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("todo_descriptor");
