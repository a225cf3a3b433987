use actix_web::{HttpResponse, Responder, web};

use crate::stats;
use crate::store::Store;

/// Headline numbers for the dashboard cards. Recomputed from the store on
/// every call; nothing is cached server-side.
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses((status = 200, body = stats::DashboardStats)),
    tag = "Dashboard"
)]
pub async fn dashboard_stats(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(stats::dashboard_stats(&store))
}
