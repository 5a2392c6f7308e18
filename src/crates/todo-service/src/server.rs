//! gRPC server assembly
//!
//! Wires the todo service (and optionally server reflection) into a tonic
//! router and runs it on an already bound listener.

use std::future::Future;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use crate::proto::todo::todo_service_server::TodoServiceServer;
use crate::proto::FILE_DESCRIPTOR_SET;
use crate::services::TodoServiceImpl;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to build reflection service: {0}")]
    Reflection(#[from] tonic_reflection::server::Error),
    #[error("gRPC transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Serve `service` on `listener` until `shutdown` resolves
///
/// In-flight calls are allowed to finish once `shutdown` fires.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    service: TodoServiceImpl,
    reflection: bool,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()>,
{
    // Older clients (evans, grpcurl before 1.8.8) only speak v1alpha
    let (reflection_v1, reflection_v1alpha) = if reflection {
        (
            Some(reflection_builder().build_v1()?),
            Some(reflection_builder().build_v1alpha()?),
        )
    } else {
        (None, None)
    };

    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, reflection, "Serving todo.TodoService");
    }

    Server::builder()
        .add_service(TodoServiceServer::new(service))
        .add_optional_service(reflection_v1)
        .add_optional_service(reflection_v1alpha)
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await?;

    Ok(())
}

fn reflection_builder() -> tonic_reflection::server::Builder<'static> {
    tonic_reflection::server::Builder::configure()
        .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL-C signal handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
