use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::config::Config;
use crate::model::user::CreateUser;
use crate::store::Store;

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin@governancesystemsint.com")]
    pub email: String,
    pub password: String,
}

/// Login. Unknown email, deactivated account and wrong password all
/// produce the identical 401 body, so callers cannot probe which emails
/// exist.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated; returns the user (password stripped) and a session token"),
        (status = 401, description = "Invalid credentials", body = Object, example = json!({
            "message": "Invalid credentials"
        }))
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip(store, config, body), fields(email = %body.email))]
pub async fn login(
    store: web::Data<Store>,
    config: web::Data<Config>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    info!("Login request received");

    let user = match store.user_by_email(&body.email) {
        Some(user) if user.is_active => user,
        _ => {
            info!("Invalid credentials: unknown or inactive account");
            return HttpResponse::Unauthorized().json(json!({ "message": "Invalid credentials" }));
        }
    };

    if verify_password(&body.password, &user.password).is_err() {
        info!("Invalid credentials: password mismatch");
        return HttpResponse::Unauthorized().json(json!({ "message": "Invalid credentials" }));
    }

    debug!(user_id = %user.id, "Password verified, issuing token");
    let token = generate_access_token(&user, &config.jwt_secret, config.access_token_ttl);

    // User's Serialize impl skips the password hash.
    HttpResponse::Ok().json(json!({ "user": user, "token": token }))
}

/// Register a new account. The password is argon2-hashed before the store
/// ever sees it.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created (password stripped)"),
        (status = 400, description = "Validation failure", body = Object, example = json!({
            "message": "Invalid user data",
            "errors": [ { "field": "email", "message": "email is required" } ]
        })),
        (status = 409, description = "Email already registered")
    ),
    tag = "Auth"
)]
pub async fn register(store: web::Data<Store>, body: web::Json<CreateUser>) -> impl Responder {
    let mut input = body.into_inner();

    if let Err(errors) = input.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid user data", "errors": errors }));
    }

    if store.user_by_email(&input.email).is_some() {
        return HttpResponse::Conflict().json(json!({ "message": "Email already registered" }));
    }

    input.password = hash_password(&input.password);
    let user = store.create_user(input);
    info!(user_id = %user.id, "User registered");

    HttpResponse::Created().json(user)
}
