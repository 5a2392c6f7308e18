use crate::db::{repositories::TodoRepository, DatabaseError, DatabasePool};
use crate::proto::todo::{
    todo_service_server::TodoService, CreateTodoRequest, TodoDetail, TodoDetailRequest,
    TodoDetailResponse, TodoListResponse,
};
use crate::proto_conv::{summary_to_proto, todo_to_proto};
use tonic::{Request, Response, Status};

/// gRPC front for the `todos` table
///
/// Holds nothing but the pool; every call is an independent unit of work.
#[derive(Clone, Debug)]
pub struct TodoServiceImpl {
    pool: DatabasePool,
}

impl TodoServiceImpl {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Log a repository failure and turn it into a gRPC status
fn to_status(action: &str, err: DatabaseError) -> Status {
    if err.is_not_found() || err.is_constraint_violation() {
        tracing::warn!("Failed to {}: {}", action, err);
    } else {
        tracing::error!("Failed to {}: {}", action, err);
    }
    err.into()
}

#[tonic::async_trait]
impl TodoService for TodoServiceImpl {
    async fn get_todo_list(
        &self,
        _request: Request<()>,
    ) -> Result<Response<TodoListResponse>, Status> {
        tracing::info!("todo.TodoService/GetTodoList");

        let todos = TodoRepository::list(&self.pool)
            .await
            .map_err(|e| to_status("list todos", e))?;

        tracing::debug!("Listed {} todos", todos.len());
        Ok(Response::new(TodoListResponse {
            todos: todos.iter().map(summary_to_proto).collect(),
        }))
    }

    async fn get_todo_detail(
        &self,
        request: Request<TodoDetailRequest>,
    ) -> Result<Response<TodoDetailResponse>, Status> {
        tracing::info!("todo.TodoService/GetTodoDetail");
        let req = request.into_inner();

        let todo = TodoRepository::get_by_id(&self.pool, req.id)
            .await
            .map_err(|e| to_status(&format!("get todo {}", req.id), e))?;

        Ok(Response::new(todo_to_proto(&todo)))
    }

    async fn create_todo(
        &self,
        request: Request<CreateTodoRequest>,
    ) -> Result<Response<TodoDetailResponse>, Status> {
        tracing::info!("todo.TodoService/CreateTodo");
        let req = request.into_inner();

        let todo = TodoRepository::create(&self.pool, &req.title, &req.content, req.done)
            .await
            .map_err(|e| to_status("create todo", e))?;

        tracing::debug!("Created todo {}", todo.id);
        Ok(Response::new(todo_to_proto(&todo)))
    }

    async fn update_todo(
        &self,
        request: Request<TodoDetail>,
    ) -> Result<Response<TodoDetailResponse>, Status> {
        tracing::info!("todo.TodoService/UpdateTodo");
        let req = request.into_inner();

        let todo = TodoRepository::update(&self.pool, req.id, &req.title, &req.content, req.done)
            .await
            .map_err(|e| to_status(&format!("update todo {}", req.id), e))?;

        tracing::debug!("Updated todo {}", todo.id);
        Ok(Response::new(todo_to_proto(&todo)))
    }

    async fn delete_todo(&self, request: Request<TodoDetailRequest>) -> Result<Response<()>, Status> {
        tracing::info!("todo.TodoService/DeleteTodo");
        let req = request.into_inner();

        let removed = TodoRepository::delete(&self.pool, req.id)
            .await
            .map_err(|e| to_status(&format!("delete todo {}", req.id), e))?;

        if removed == 0 {
            tracing::debug!("Delete of todo {} matched no rows", req.id);
        }
        Ok(Response::new(()))
    }
}
