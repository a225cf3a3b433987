use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::info;

use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>)
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(store.employees.list())
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee id")),
    responses(
        (status = 200, body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.employees.get(&path.into_inner()) {
        Some(employee) => HttpResponse::Ok().json(employee),
        None => HttpResponse::NotFound().json(json!({ "message": "Employee not found" })),
    }
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failure", body = Object, example = json!({
            "message": "Invalid employee data",
            "errors": [ { "field": "email", "message": "email is required" } ]
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<Store>,
    payload: web::Json<CreateEmployee>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid employee data", "errors": errors }));
    }

    let employee = store.create_employee(payload.into_inner());
    info!(employee_id = %employee.id, "Employee created");
    HttpResponse::Created().json(employee)
}

#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee id")),
    request_body = UpdateEmployee,
    responses(
        (status = 200, body = Employee),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdateEmployee>,
) -> impl Responder {
    match store.update_employee(&path.into_inner(), body.into_inner()) {
        Some(employee) => HttpResponse::Ok().json(employee),
        None => HttpResponse::NotFound().json(json!({ "message": "Employee not found" })),
    }
}

#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    if store.delete_employee(&id) {
        info!(employee_id = %id, "Employee deleted");
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "message": "Employee not found" }))
    }
}
