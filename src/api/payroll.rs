use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::model::payroll::{CreatePayroll, PayrollRecord, UpdatePayroll};
use crate::stats;
use crate::store::Store;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayrollQuery {
    pub employee_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/payroll",
    params(PayrollQuery),
    responses((status = 200, description = "Payroll records, optionally by employee", body = Vec<PayrollRecord>)),
    tag = "Payroll"
)]
pub async fn list_payroll(
    store: web::Data<Store>,
    query: web::Query<PayrollQuery>,
) -> impl Responder {
    let records = if let Some(employee_id) = &query.employee_id {
        store.payroll_by_employee(employee_id)
    } else {
        store.payroll.list()
    };
    HttpResponse::Ok().json(records)
}

#[utoipa::path(
    get,
    path = "/api/payroll/{id}",
    params(("id", Path, description = "Payroll record id")),
    responses(
        (status = 200, body = PayrollRecord),
        (status = 404, description = "Payroll record not found")
    ),
    tag = "Payroll"
)]
pub async fn get_payroll(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.payroll.get(&path.into_inner()) {
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::NotFound().json(json!({ "message": "Payroll record not found" })),
    }
}

/// Create a payroll record. `netPay` is computed here once from
/// base + allowances - deductions and never recomputed by later edits.
#[utoipa::path(
    post,
    path = "/api/payroll",
    request_body = CreatePayroll,
    responses(
        (status = 201, description = "Payroll record created", body = PayrollRecord),
        (status = 400, description = "Validation failure")
    ),
    tag = "Payroll"
)]
pub async fn create_payroll(
    store: web::Data<Store>,
    payload: web::Json<CreatePayroll>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid payroll data", "errors": errors }));
    }

    let record = store.create_payroll(payload.into_inner());
    info!(payroll_id = %record.id, employee_id = %record.employee_id, net_pay = record.net_pay, "Payroll record created");
    HttpResponse::Created().json(record)
}

#[utoipa::path(
    put,
    path = "/api/payroll/{id}",
    params(("id", Path, description = "Payroll record id")),
    request_body = UpdatePayroll,
    responses(
        (status = 200, body = PayrollRecord),
        (status = 404, description = "Payroll record not found")
    ),
    tag = "Payroll"
)]
pub async fn update_payroll(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdatePayroll>,
) -> impl Responder {
    match store.update_payroll(&path.into_inner(), body.into_inner()) {
        Some(record) => HttpResponse::Ok().json(record),
        None => HttpResponse::NotFound().json(json!({ "message": "Payroll record not found" })),
    }
}

/// Net-pay sums grouped by status plus the grand total.
#[utoipa::path(
    get,
    path = "/api/payroll/totals",
    responses((status = 200, body = stats::PayrollTotals)),
    tag = "Payroll"
)]
pub async fn payroll_totals(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(stats::payroll_totals(&store))
}
