use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::model::evaluation::{CreateEvaluation, Evaluation, UpdateEvaluation};
use crate::store::Store;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationQuery {
    pub project_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/evaluations",
    params(EvaluationQuery),
    responses((status = 200, description = "Evaluations, optionally by project", body = Vec<Evaluation>)),
    tag = "Evaluation"
)]
pub async fn list_evaluations(
    store: web::Data<Store>,
    query: web::Query<EvaluationQuery>,
) -> impl Responder {
    let evaluations = if let Some(project_id) = &query.project_id {
        store.evaluations_by_project(project_id)
    } else {
        store.evaluations.list()
    };
    HttpResponse::Ok().json(evaluations)
}

#[utoipa::path(
    get,
    path = "/api/evaluations/{id}",
    params(("id", Path, description = "Evaluation id")),
    responses(
        (status = 200, body = Evaluation),
        (status = 404, description = "Evaluation not found")
    ),
    tag = "Evaluation"
)]
pub async fn get_evaluation(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.evaluations.get(&path.into_inner()) {
        Some(evaluation) => HttpResponse::Ok().json(evaluation),
        None => HttpResponse::NotFound().json(json!({ "message": "Evaluation not found" })),
    }
}

#[utoipa::path(
    post,
    path = "/api/evaluations",
    request_body = CreateEvaluation,
    responses(
        (status = 201, description = "Evaluation recorded", body = Evaluation),
        (status = 400, description = "Validation failure")
    ),
    tag = "Evaluation"
)]
pub async fn create_evaluation(
    store: web::Data<Store>,
    payload: web::Json<CreateEvaluation>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid evaluation data", "errors": errors }));
    }

    HttpResponse::Created().json(store.create_evaluation(payload.into_inner()))
}

#[utoipa::path(
    put,
    path = "/api/evaluations/{id}",
    params(("id", Path, description = "Evaluation id")),
    request_body = UpdateEvaluation,
    responses(
        (status = 200, body = Evaluation),
        (status = 404, description = "Evaluation not found")
    ),
    tag = "Evaluation"
)]
pub async fn update_evaluation(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdateEvaluation>,
) -> impl Responder {
    match store.update_evaluation(&path.into_inner(), body.into_inner()) {
        Some(evaluation) => HttpResponse::Ok().json(evaluation),
        None => HttpResponse::NotFound().json(json!({ "message": "Evaluation not found" })),
    }
}
