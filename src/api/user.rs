use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::info;

use crate::auth::password::hash_password;
use crate::model::user::{CreateUser, UpdateUser, User};
use crate::store::Store;

/// Account administration. Responses never carry the password hash (the
/// `User` serializer skips it) and accounts are never hard-deleted;
/// deactivation goes through `isActive`.

#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "All accounts, passwords stripped", body = Vec<User>)),
    tag = "User"
)]
pub async fn list_users(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(store.users.list())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id", Path, description = "User id")),
    responses(
        (status = 200, body = User),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn get_user(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.users.get(&path.into_inner()) {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::NotFound().json(json!({ "message": "User not found" })),
    }
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation failure"),
        (status = 409, description = "Email already registered")
    ),
    tag = "User"
)]
pub async fn create_user(store: web::Data<Store>, payload: web::Json<CreateUser>) -> impl Responder {
    let mut input = payload.into_inner();

    if let Err(errors) = input.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid user data", "errors": errors }));
    }

    if store.user_by_email(&input.email).is_some() {
        return HttpResponse::Conflict().json(json!({ "message": "Email already registered" }));
    }

    input.password = hash_password(&input.password);
    let user = store.create_user(input);
    info!(user_id = %user.id, "User created");
    HttpResponse::Created().json(user)
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id", Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, body = User),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn update_user(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdateUser>,
) -> impl Responder {
    let mut patch = body.into_inner();
    if let Some(password) = patch.password.take() {
        patch.password = Some(hash_password(&password));
    }

    match store.update_user(&path.into_inner(), patch) {
        Some(user) => HttpResponse::Ok().json(user),
        None => HttpResponse::NotFound().json(json!({ "message": "User not found" })),
    }
}
