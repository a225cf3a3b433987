use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::model::proposal::{CreateProposal, Proposal, UpdateProposal};
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/api/proposals",
    responses((status = 200, description = "All proposals", body = Vec<Proposal>)),
    tag = "Proposal"
)]
pub async fn list_proposals(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(store.proposals.list())
}

#[utoipa::path(
    get,
    path = "/api/proposals/{id}",
    params(("id", Path, description = "Proposal id")),
    responses(
        (status = 200, body = Proposal),
        (status = 404, description = "Proposal not found")
    ),
    tag = "Proposal"
)]
pub async fn get_proposal(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.proposals.get(&path.into_inner()) {
        Some(proposal) => HttpResponse::Ok().json(proposal),
        None => HttpResponse::NotFound().json(json!({ "message": "Proposal not found" })),
    }
}

#[utoipa::path(
    post,
    path = "/api/proposals",
    request_body = CreateProposal,
    responses(
        (status = 201, description = "Proposal created", body = Proposal),
        (status = 400, description = "Validation failure")
    ),
    tag = "Proposal"
)]
pub async fn create_proposal(
    store: web::Data<Store>,
    payload: web::Json<CreateProposal>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid proposal data", "errors": errors }));
    }

    HttpResponse::Created().json(store.create_proposal(payload.into_inner()))
}

#[utoipa::path(
    put,
    path = "/api/proposals/{id}",
    params(("id", Path, description = "Proposal id")),
    request_body = UpdateProposal,
    responses(
        (status = 200, body = Proposal),
        (status = 404, description = "Proposal not found")
    ),
    tag = "Proposal"
)]
pub async fn update_proposal(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdateProposal>,
) -> impl Responder {
    match store.update_proposal(&path.into_inner(), body.into_inner()) {
        Some(proposal) => HttpResponse::Ok().json(proposal),
        None => HttpResponse::NotFound().json(json!({ "message": "Proposal not found" })),
    }
}

#[utoipa::path(
    delete,
    path = "/api/proposals/{id}",
    params(("id", Path, description = "Proposal id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Proposal not found")
    ),
    tag = "Proposal"
)]
pub async fn delete_proposal(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    if store.delete_proposal(&path.into_inner()) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "message": "Proposal not found" }))
    }
}
