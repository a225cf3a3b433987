use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::model::kpi::{CreateKpi, Kpi, UpdateKpi};
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/api/kpis",
    responses((status = 200, description = "All KPIs", body = Vec<Kpi>)),
    tag = "KPI"
)]
pub async fn list_kpis(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(store.kpis.list())
}

#[utoipa::path(
    get,
    path = "/api/kpis/{id}",
    params(("id", Path, description = "KPI id")),
    responses(
        (status = 200, body = Kpi),
        (status = 404, description = "KPI not found")
    ),
    tag = "KPI"
)]
pub async fn get_kpi(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.kpis.get(&path.into_inner()) {
        Some(kpi) => HttpResponse::Ok().json(kpi),
        None => HttpResponse::NotFound().json(json!({ "message": "KPI not found" })),
    }
}

#[utoipa::path(
    post,
    path = "/api/kpis",
    request_body = CreateKpi,
    responses(
        (status = 201, description = "KPI created", body = Kpi),
        (status = 400, description = "Validation failure")
    ),
    tag = "KPI"
)]
pub async fn create_kpi(store: web::Data<Store>, payload: web::Json<CreateKpi>) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid KPI data", "errors": errors }));
    }

    HttpResponse::Created().json(store.create_kpi(payload.into_inner()))
}

#[utoipa::path(
    put,
    path = "/api/kpis/{id}",
    params(("id", Path, description = "KPI id")),
    request_body = UpdateKpi,
    responses(
        (status = 200, body = Kpi),
        (status = 404, description = "KPI not found")
    ),
    tag = "KPI"
)]
pub async fn update_kpi(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdateKpi>,
) -> impl Responder {
    match store.update_kpi(&path.into_inner(), body.into_inner()) {
        Some(kpi) => HttpResponse::Ok().json(kpi),
        None => HttpResponse::NotFound().json(json!({ "message": "KPI not found" })),
    }
}

#[utoipa::path(
    delete,
    path = "/api/kpis/{id}",
    params(("id", Path, description = "KPI id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "KPI not found")
    ),
    tag = "KPI"
)]
pub async fn delete_kpi(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    if store.delete_kpi(&path.into_inner()) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "message": "KPI not found" }))
    }
}
