//! Todo endpoints
//!
//! Single-item CRUD plus the batch creation endpoint. Single-item create and
//! update require a non-empty title; batch titles are not validated.
//! Single-item create returns 500 on a store failure, while batch create always answers 200 and
//! reports per-item failures in the body.

use crate::core::batch::BatchRequest;
use crate::core::models::{CreateTodoRequest, MessageResponse, UpdateTodo, UpdateTodoRequest};
use crate::server::state::AppState;
use crate::utils::error::{Result, ServiceError};
use actix_web::{HttpResponse, web};
use tracing::{debug, info};

/// Configure todo routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/todos")
            .route("", web::get().to(list_todos))
            .route("", web::post().to(create_todo))
            .route("/batch", web::post().to(create_batch))
            .route("/{id}", web::put().to(update_todo))
            .route("/{id}", web::delete().to(delete_todo)),
    );
}

/// List all todos, newest first
async fn list_todos(state: web::Data<AppState>) -> Result<HttpResponse> {
    let todos = state.store.list_todos().await?;
    debug!("Listed {} todos", todos.len());
    Ok(HttpResponse::Ok().json(todos))
}

/// Single-item writes reject an empty title; batch inserts take titles as given
fn require_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(ServiceError::bad_request("title is required"));
    }
    Ok(())
}

/// Create one todo
async fn create_todo(
    state: web::Data<AppState>,
    request: web::Json<CreateTodoRequest>,
) -> Result<HttpResponse> {
    require_title(&request.title)?;
    let todo = state.store.create_todo(&request.title).await?;
    info!(id = todo.id, "Created todo");
    Ok(HttpResponse::Created().json(todo))
}

/// Replace the title and completion flag of one todo
async fn update_todo(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    request: web::Json<UpdateTodoRequest>,
) -> Result<HttpResponse> {
    let id = path.into_inner();
    require_title(&request.title)?;
    let update = UpdateTodo::from(request.into_inner());

    if !state.store.update_todo(id, &update).await? {
        return Err(ServiceError::not_found(format!(
            "Todo {} not found or not updated",
            id
        )));
    }

    info!(id, "Updated todo");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Todo updated")))
}

/// Delete one todo
async fn delete_todo(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let id = path.into_inner();

    if !state.store.delete_todo(id).await? {
        return Err(ServiceError::not_found(format!(
            "Todo {} not found or not deleted",
            id
        )));
    }

    info!(id, "Deleted todo");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Todo deleted")))
}

/// Create one todo per title concurrently
///
/// Responds 200 with one outcome per title even when every insert failed.
async fn create_batch(
    state: web::Data<AppState>,
    request: web::Json<BatchRequest>,
) -> HttpResponse {
    let titles = request.into_inner().titles;
    debug!("Batch create requested for {} titles", titles.len());

    let report = state.batch.create_batch(titles).await;
    HttpResponse::Ok().json(report)
}
