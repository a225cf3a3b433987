use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::info;

use crate::model::project::{CreateProject, Project, UpdateProject};
use crate::stats;
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/api/projects",
    responses((status = 200, description = "All projects", body = Vec<Project>)),
    tag = "Project"
)]
pub async fn list_projects(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(store.projects.list())
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(("id", Path, description = "Project id")),
    responses(
        (status = 200, body = Project),
        (status = 404, description = "Project not found")
    ),
    tag = "Project"
)]
pub async fn get_project(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.projects.get(&path.into_inner()) {
        Some(project) => HttpResponse::Ok().json(project),
        None => HttpResponse::NotFound().json(json!({ "message": "Project not found" })),
    }
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProject,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Validation failure")
    ),
    tag = "Project"
)]
pub async fn create_project(
    store: web::Data<Store>,
    payload: web::Json<CreateProject>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid project data", "errors": errors }));
    }

    let project = store.create_project(payload.into_inner());
    info!(project_id = %project.id, "Project created");
    HttpResponse::Created().json(project)
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id", Path, description = "Project id")),
    request_body = UpdateProject,
    responses(
        (status = 200, body = Project),
        (status = 404, description = "Project not found")
    ),
    tag = "Project"
)]
pub async fn update_project(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdateProject>,
) -> impl Responder {
    match store.update_project(&path.into_inner(), body.into_inner()) {
        Some(project) => HttpResponse::Ok().json(project),
        None => HttpResponse::NotFound().json(json!({ "message": "Project not found" })),
    }
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(("id", Path, description = "Project id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Project not found")
    ),
    tag = "Project"
)]
pub async fn delete_project(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    if store.delete_project(&path.into_inner()) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "message": "Project not found" }))
    }
}

/// Rollup of the project's monitoring evaluations: latest score and count.
/// Works for unknown project ids too (empty rollup), since evaluations may
/// reference deleted projects.
#[utoipa::path(
    get,
    path = "/api/projects/{id}/evaluation-summary",
    params(("id", Path, description = "Project id")),
    responses((status = 200, body = stats::EvaluationSummary)),
    tag = "Project"
)]
pub async fn project_evaluation_summary(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> impl Responder {
    HttpResponse::Ok().json(stats::evaluation_summary(&store, &path.into_inner()))
}
