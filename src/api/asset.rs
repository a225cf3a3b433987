use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::model::asset::{Asset, CreateAsset, UpdateAsset};
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/api/assets",
    responses((status = 200, description = "All assets", body = Vec<Asset>)),
    tag = "Asset"
)]
pub async fn list_assets(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(store.assets.list())
}

#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    params(("id", Path, description = "Asset id")),
    responses(
        (status = 200, body = Asset),
        (status = 404, description = "Asset not found")
    ),
    tag = "Asset"
)]
pub async fn get_asset(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.assets.get(&path.into_inner()) {
        Some(asset) => HttpResponse::Ok().json(asset),
        None => HttpResponse::NotFound().json(json!({ "message": "Asset not found" })),
    }
}

#[utoipa::path(
    post,
    path = "/api/assets",
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset registered", body = Asset),
        (status = 400, description = "Validation failure")
    ),
    tag = "Asset"
)]
pub async fn create_asset(store: web::Data<Store>, payload: web::Json<CreateAsset>) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid asset data", "errors": errors }));
    }

    HttpResponse::Created().json(store.create_asset(payload.into_inner()))
}

#[utoipa::path(
    put,
    path = "/api/assets/{id}",
    params(("id", Path, description = "Asset id")),
    request_body = UpdateAsset,
    responses(
        (status = 200, body = Asset),
        (status = 404, description = "Asset not found")
    ),
    tag = "Asset"
)]
pub async fn update_asset(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdateAsset>,
) -> impl Responder {
    match store.update_asset(&path.into_inner(), body.into_inner()) {
        Some(asset) => HttpResponse::Ok().json(asset),
        None => HttpResponse::NotFound().json(json!({ "message": "Asset not found" })),
    }
}

#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    params(("id", Path, description = "Asset id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Asset not found")
    ),
    tag = "Asset"
)]
pub async fn delete_asset(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    if store.delete_asset(&path.into_inner()) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "message": "Asset not found" }))
    }
}
