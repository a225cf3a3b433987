use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::model::report::{CreateReport, Report};
use crate::stats;
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/api/reports",
    responses((status = 200, description = "All generated reports", body = Vec<Report>)),
    tag = "Report"
)]
pub async fn list_reports(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(store.reports.list())
}

#[utoipa::path(
    get,
    path = "/api/reports/{id}",
    params(("id", Path, description = "Report id")),
    responses(
        (status = 200, body = Report),
        (status = 404, description = "Report not found")
    ),
    tag = "Report"
)]
pub async fn get_report(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.reports.get(&path.into_inner()) {
        Some(report) => HttpResponse::Ok().json(report),
        None => HttpResponse::NotFound().json(json!({ "message": "Report not found" })),
    }
}

/// Generate a report. Materialization is synchronous: the record comes
/// back already `completed`, there is no background job queue.
#[utoipa::path(
    post,
    path = "/api/reports",
    request_body = CreateReport,
    responses(
        (status = 201, description = "Report generated", body = Report),
        (status = 400, description = "Validation failure")
    ),
    tag = "Report"
)]
pub async fn create_report(
    store: web::Data<Store>,
    payload: web::Json<CreateReport>,
) -> impl Responder {
    if let Err(errors) = payload.validate() {
        return HttpResponse::BadRequest()
            .json(json!({ "message": "Invalid report data", "errors": errors }));
    }

    let input = payload.into_inner();
    let name = input.display_name();
    let report = store.create_report(name, input.report_type, input.description, input.created_by);
    info!(report_id = %report.id, report_type = %report.report_type, "Report generated");
    HttpResponse::Created().json(report)
}

/// Same descriptor the GET returns; kept as a distinct route for the
/// dashboard's report viewer.
#[utoipa::path(
    get,
    path = "/api/reports/{id}/view",
    params(("id", Path, description = "Report id")),
    responses(
        (status = 200, body = Report),
        (status = 404, description = "Report not found")
    ),
    tag = "Report"
)]
pub async fn view_report(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.reports.get(&path.into_inner()) {
        Some(report) => HttpResponse::Ok().json(report),
        None => HttpResponse::NotFound().json(json!({ "message": "Report not found" })),
    }
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DownloadQuery {
    /// "excel" or "pdf".
    pub format: String,
}

#[utoipa::path(
    get,
    path = "/api/reports/{id}/download",
    params(("id", Path, description = "Report id"), DownloadQuery),
    responses(
        (status = 200, description = "Report artifact as an attachment"),
        (status = 400, description = "Unsupported format"),
        (status = 404, description = "Report not found")
    ),
    tag = "Report"
)]
pub async fn download_report(
    store: web::Data<Store>,
    path: web::Path<String>,
    query: web::Query<DownloadQuery>,
) -> impl Responder {
    let report = match store.reports.get(&path.into_inner()) {
        Some(report) => report,
        None => {
            return HttpResponse::NotFound().json(json!({ "message": "Report not found" }));
        }
    };

    let (content_type, extension) = match query.format.as_str() {
        "excel" => (
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "xlsx",
        ),
        "pdf" => ("application/pdf", "pdf"),
        other => {
            return HttpResponse::BadRequest().json(json!({
                "message": "Unsupported format",
                "errors": [ { "field": "format", "message": format!("unknown format '{other}'") } ],
            }));
        }
    };

    let body = render_report(&store, &report);
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"report-{}.{}\"", report.id, extension),
        ))
        .body(body)
}

/// Turns a report descriptor into artifact bytes. This is the seam for the
/// spreadsheet/PDF encoding collaborator; the tabular content below is what
/// such an encoder would be fed.
fn render_report(store: &Store, report: &Report) -> Vec<u8> {
    let mut lines = vec![
        report.name.clone(),
        format!("Generated: {}", report.generated_at.to_rfc3339()),
        String::new(),
    ];

    match report.report_type.as_str() {
        "financial-summary" => {
            let totals = stats::finance_totals(store);
            lines.push("Total Income,Total Expenses,Net Balance".into());
            lines.push(format!(
                "{:.2},{:.2},{:.2}",
                totals.total_income, totals.total_expenses, totals.net_balance
            ));
        }
        "employee-performance" => {
            lines.push("Employee,Position,Department,Status".into());
            for emp in store.employees.list() {
                lines.push(format!(
                    "{} {},{},{},{}",
                    emp.first_name, emp.last_name, emp.position, emp.department, emp.status
                ));
            }
        }
        "project-progress" => {
            lines.push("Project,Client,Status,Progress".into());
            for project in store.projects.list() {
                lines.push(format!(
                    "{},{},{},{}%",
                    project.name, project.client, project.status, project.progress
                ));
            }
        }
        "task-completion" => {
            lines.push("Task,Status,Priority".into());
            for task in store.tasks.list() {
                lines.push(format!("{},{},{}", task.title, task.status, task.priority));
            }
        }
        "kpi-analysis" => {
            lines.push("KPI,Category,Period,Progress".into());
            for kpi in store.kpis.list() {
                lines.push(format!(
                    "{},{},{},{:.1}%",
                    kpi.name,
                    kpi.category,
                    kpi.period,
                    stats::kpi_progress(&kpi)
                ));
            }
        }
        _ => {
            lines.push(format!("No tabular view for report type '{}'", report.report_type));
        }
    }

    lines.join("\n").into_bytes()
}
