use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::info;

use crate::model::transaction::{CreateTransaction, Transaction, UpdateTransaction};
use crate::stats;
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/api/transactions",
    responses((status = 200, description = "All transactions", body = Vec<Transaction>)),
    tag = "Finance"
)]
pub async fn list_transactions(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(store.transactions.list())
}

#[utoipa::path(
    get,
    path = "/api/transactions/{id}",
    params(("id", Path, description = "Transaction id")),
    responses(
        (status = 200, body = Transaction),
        (status = 404, description = "Transaction not found")
    ),
    tag = "Finance"
)]
pub async fn get_transaction(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.transactions.get(&path.into_inner()) {
        Some(tx) => HttpResponse::Ok().json(tx),
        None => HttpResponse::NotFound().json(json!({ "message": "Transaction not found" })),
    }
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = CreateTransaction,
    responses(
        (status = 201, description = "Transaction recorded", body = Transaction),
        (status = 400, description = "Validation failure")
    ),
    tag = "Finance"
)]
pub async fn create_transaction(
    store: web::Data<Store>,
    payload: web::Json<CreateTransaction>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid transaction data", "errors": errors }));
    }

    let tx = store.create_transaction(payload.into_inner());
    info!(transaction_id = %tx.id, kind = %tx.kind, amount = tx.amount, "Transaction recorded");
    HttpResponse::Created().json(tx)
}

#[utoipa::path(
    put,
    path = "/api/transactions/{id}",
    params(("id", Path, description = "Transaction id")),
    request_body = UpdateTransaction,
    responses(
        (status = 200, body = Transaction),
        (status = 404, description = "Transaction not found")
    ),
    tag = "Finance"
)]
pub async fn update_transaction(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<UpdateTransaction>,
) -> impl Responder {
    match store.update_transaction(&path.into_inner(), body.into_inner()) {
        Some(tx) => HttpResponse::Ok().json(tx),
        None => HttpResponse::NotFound().json(json!({ "message": "Transaction not found" })),
    }
}

#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    params(("id", Path, description = "Transaction id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Transaction not found")
    ),
    tag = "Finance"
)]
pub async fn delete_transaction(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    if store.delete_transaction(&path.into_inner()) {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().json(json!({ "message": "Transaction not found" }))
    }
}

/// Income/expense sums and their balance over the whole ledger.
#[utoipa::path(
    get,
    path = "/api/finance/totals",
    responses((status = 200, body = stats::FinanceTotals)),
    tag = "Finance"
)]
pub async fn finance_totals(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(stats::finance_totals(&store))
}
