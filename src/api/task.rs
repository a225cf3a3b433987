use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::model::task::{CreateTask, Task, TaskStatus, UpdateTask};
use crate::store::Store;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    pub project_id: Option<String>,
    pub assignee_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/tasks",
    params(TaskQuery),
    responses((status = 200, description = "Tasks, optionally filtered", body = Vec<Task>)),
    tag = "Task"
)]
pub async fn list_tasks(store: web::Data<Store>, query: web::Query<TaskQuery>) -> impl Responder {
    let tasks = if let Some(project_id) = &query.project_id {
        store.tasks_by_project(project_id)
    } else if let Some(assignee_id) = &query.assignee_id {
        store.tasks_by_assignee(assignee_id)
    } else {
        store.tasks.list()
    };
    HttpResponse::Ok().json(tasks)
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    params(("id", Path, description = "Task id")),
    responses(
        (status = 200, body = Task),
        (status = 404, description = "Task not found")
    ),
    tag = "Task"
)]
pub async fn get_task(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.tasks.get(&path.into_inner()) {
        Some(task) => HttpResponse::Ok().json(task),
        None => HttpResponse::NotFound().json(json!({ "message": "Task not found" })),
    }
}

#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Validation failure")
    ),
    tag = "Task"
)]
pub async fn create_task(store: web::Data<Store>, payload: web::Json<CreateTask>) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid task data", "errors": errors }));
    }

    let task = store.create_task(payload.into_inner());
    info!(task_id = %task.id, "Task created");
    HttpResponse::Created().json(task)
}

/// Update Task. Transitioning to `completed` stamps `completedAt` here in
/// the facade when the caller did not supply one; the store itself never
/// infers it from the status field.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    params(("id", Path, description = "Task id")),
    request_body = UpdateTask,
    responses(
        (status = 200, body = Task),
        (status = 404, description = "Task not found")
    ),
    tag = "Task"
)]
pub async fn update_task(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdateTask>,
) -> impl Responder {
    let mut patch = body.into_inner();
    if patch.status == Some(TaskStatus::Completed) && patch.completed_at.is_none() {
        patch.completed_at = Some(Utc::now());
    }

    match store.update_task(&path.into_inner(), patch) {
        Some(task) => HttpResponse::Ok().json(task),
        None => HttpResponse::NotFound().json(json!({ "message": "Task not found" })),
    }
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    params(("id", Path, description = "Task id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Task not found")
    ),
    tag = "Task"
)]
pub async fn delete_task(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    if store.delete_task(&path.into_inner()) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "message": "Task not found" }))
    }
}
