use actix_web::{App, test, web};
use serde_json::{Value, json};

use gsi_management::config::Config;
use gsi_management::store::{Store, seed};
use gsi_management::{routes, validation};

fn test_config() -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        jwt_secret: "integration-test-secret".to_string(),
        access_token_ttl: 900,
        rate_login_per_min: 10_000,
        rate_api_per_min: 10_000,
        api_prefix: "/api".to_string(),
    }
}

// PeerIpKeyExtractor needs a peer address on every request.
fn peer() -> std::net::SocketAddr {
    "127.0.0.1:9000".parse().unwrap()
}

macro_rules! spawn_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Store::seeded()))
                .app_data(web::Data::new(test_config()))
                .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
                .configure(|cfg| routes::configure(cfg, test_config())),
        )
        .await
    };
}

#[actix_web::test]
async fn seeded_employees_list_in_stable_order() {
    let app = spawn_app!();

    let req = test::TestRequest::get()
        .uri("/api/employees")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let list = body.as_array().expect("array body");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], "emp-1");
    assert_eq!(list[1]["id"], "emp-2");
    assert_eq!(list[0]["employeeId"], "GSI001");
}

#[actix_web::test]
async fn unknown_employee_returns_resource_not_found() {
    let app = spawn_app!();

    let req = test::TestRequest::get()
        .uri("/api/employees/no-such-id")
        .peer_addr(peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Employee not found" }));
}

#[actix_web::test]
async fn invalid_employee_payload_is_rejected_without_side_effects() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .peer_addr(peer())
        .set_json(json!({
            "employeeId": "GSI009",
            "firstName": "Nora",
            "lastName": "Okello",
            "email": "",
            "position": "Accountant",
            "department": "Finance",
            "hireDate": "2024-01-15T00:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid employee data");
    let errors = body["errors"].as_array().expect("errors array");
    assert!(errors.iter().any(|e| e["field"] == "email"));

    let req = test::TestRequest::get()
        .uri("/api/employees")
        .peer_addr(peer())
        .to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn employee_crud_roundtrip() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .peer_addr(peer())
        .set_json(json!({
            "employeeId": "GSI010",
            "firstName": "Nora",
            "lastName": "Okello",
            "email": "nora.okello@governancesystemsint.com",
            "position": "Accountant",
            "department": "Finance",
            "hireDate": "2024-01-15T00:00:00Z",
            "salary": 42000.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().expect("id").to_string();
    assert!(created["createdAt"].is_string());
    assert_eq!(created["status"], "active");

    let req = test::TestRequest::put()
        .uri(&format!("/api/employees/{id}"))
        .peer_addr(peer())
        .set_json(json!({ "position": "Senior Accountant" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["position"], "Senior Accountant");
    assert_eq!(updated["firstName"], "Nora");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/employees/{id}"))
        .peer_addr(peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    // Second delete finds nothing
    let req = test::TestRequest::delete()
        .uri(&format!("/api/employees/{id}"))
        .peer_addr(peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn omitted_required_field_is_named_in_errors() {
    let app = spawn_app!();

    // No email key at all, so the payload never reaches validate()
    let req = test::TestRequest::post()
        .uri("/api/employees")
        .peer_addr(peer())
        .set_json(json!({
            "employeeId": "GSI012",
            "firstName": "Grace",
            "lastName": "Auma",
            "position": "Officer",
            "department": "Programs",
            "hireDate": "2024-01-15T00:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_array().expect("errors array");
    assert!(errors.iter().any(|e| e["field"] == "email"));

    let req = test::TestRequest::get()
        .uri("/api/employees")
        .peer_addr(peer())
        .to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn malformed_json_body_yields_field_errors() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/employees")
        .peer_addr(peer())
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid request body");
    assert_eq!(body["errors"][0]["field"], "body");
}

#[actix_web::test]
async fn login_succeeds_for_seeded_admin_and_strips_password() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .peer_addr(peer())
        .set_json(json!({
            "email": seed::ADMIN_EMAIL,
            "password": seed::ADMIN_PASSWORD
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], seed::ADMIN_EMAIL);
    assert!(body["user"].get("password").is_none());
}

#[actix_web::test]
async fn login_failures_share_one_body() {
    let app = spawn_app!();

    let cases = [
        json!({ "email": "ghost@governancesystemsint.com", "password": "whatever" }),
        json!({ "email": seed::ADMIN_EMAIL, "password": "wrong-password" }),
    ];
    for payload in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .peer_addr(peer())
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Invalid credentials" }));
    }
}

#[actix_web::test]
async fn register_rejects_duplicate_email() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .peer_addr(peer())
        .set_json(json!({
            "firstName": "Second",
            "lastName": "Admin",
            "email": seed::ADMIN_EMAIL,
            "password": "s3cret-pass"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn task_completion_gets_a_timestamp() {
    let app = spawn_app!();

    // Seeded task-1 is in progress with no completedAt
    let req = test::TestRequest::put()
        .uri("/api/tasks/task-1")
        .peer_addr(peer())
        .set_json(json!({ "status": "completed" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "completed");
    assert!(body["completedAt"].is_string());
}

#[actix_web::test]
async fn task_list_filters_by_project() {
    let app = spawn_app!();

    let req = test::TestRequest::get()
        .uri("/api/tasks?projectId=proj-2")
        .peer_addr(peer())
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let list = body.as_array().unwrap();
    assert!(!list.is_empty());
    assert!(list.iter().all(|t| t["projectId"] == "proj-2"));
}

#[actix_web::test]
async fn net_pay_is_fixed_at_creation() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/payroll")
        .peer_addr(peer())
        .set_json(json!({
            "employeeId": "emp-1",
            "period": "2024-03",
            "baseSalary": 1000.0,
            "allowances": 200.0,
            "deductions": 50.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["netPay"], 1150.0);
    let id = created["id"].as_str().unwrap().to_string();

    // A later base salary change does not recompute netPay
    let req = test::TestRequest::put()
        .uri(&format!("/api/payroll/{id}"))
        .peer_addr(peer())
        .set_json(json!({ "baseSalary": 2000.0 }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["baseSalary"], 2000.0);
    assert_eq!(updated["netPay"], 1150.0);
}

#[actix_web::test]
async fn approval_timestamp_is_stamped_once() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/payroll")
        .peer_addr(peer())
        .set_json(json!({
            "employeeId": "emp-2",
            "period": "2024-04",
            "baseSalary": 900.0
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    assert!(created["approvedAt"].is_null());
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/payroll/{id}"))
        .peer_addr(peer())
        .set_json(json!({ "approvedBy": "admin-1", "status": "approved" }))
        .to_request();
    let approved: Value = test::call_and_read_body_json(&app, req).await;
    let first_stamp = approved["approvedAt"].as_str().expect("stamped").to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/payroll/{id}"))
        .peer_addr(peer())
        .set_json(json!({ "approvedBy": "someone-else" }))
        .to_request();
    let again: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(again["approvedAt"], first_stamp.as_str());
}

#[actix_web::test]
async fn payroll_totals_route_is_not_shadowed_by_id() {
    let app = spawn_app!();

    let req = test::TestRequest::get()
        .uri("/api/payroll/totals")
        .peer_addr(peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("total").is_some());
    assert!(body.get("pending").is_some());
}

#[actix_web::test]
async fn transaction_kind_serializes_as_type() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/transactions")
        .peer_addr(peer())
        .set_json(json!({
            "type": "income",
            "amount": 2500.0,
            "description": "Quarterly grant disbursement",
            "category": "grants",
            "date": "2024-03-10T00:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["type"], "income");
    assert!(body.get("kind").is_none());
}

#[actix_web::test]
async fn finance_totals_reflect_transactions() {
    let app = spawn_app!();

    for (kind, amount) in [("income", 1000.0), ("expense", 300.0)] {
        let req = test::TestRequest::post()
            .uri("/api/transactions")
            .peer_addr(peer())
            .set_json(json!({
                "type": kind,
                "amount": amount,
                "description": "ledger entry",
                "category": "operations",
                "date": "2024-03-10T00:00:00Z"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/api/finance/totals")
        .peer_addr(peer())
        .to_request();
    let totals: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(totals["totalIncome"], 1000.0);
    assert_eq!(totals["totalExpenses"], 300.0);
    assert_eq!(totals["netBalance"], 700.0);
}

#[actix_web::test]
async fn dashboard_stats_have_the_expected_shape() {
    let app = spawn_app!();

    let req = test::TestRequest::get()
        .uri("/api/dashboard/stats")
        .peer_addr(peer())
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["totalEmployees"], 2);
    assert_eq!(stats["activeProjects"], 2);
    assert!(stats["pendingTasks"].is_number());
    assert!(stats["monthlyRevenue"].is_number());
}

#[actix_web::test]
async fn report_creation_names_known_types() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/reports")
        .peer_addr(peer())
        .set_json(json!({ "type": "financial-summary" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let report: Value = test::read_body_json(resp).await;
    assert_eq!(report["name"], "Financial Summary Report");
    assert_eq!(report["status"], "completed");
    assert!(report["generatedAt"].is_string());
}

#[actix_web::test]
async fn report_download_sets_content_type_per_format() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/reports")
        .peer_addr(peer())
        .set_json(json!({ "type": "kpi-analysis" }))
        .to_request();
    let report: Value = test::call_and_read_body_json(&app, req).await;
    let id = report["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/reports/{id}/download?format=excel"))
        .peer_addr(peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert_eq!(
        ct,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains(".xlsx"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/reports/{id}/download?format=csv"))
        .peer_addr(peer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn evaluation_summary_for_project() {
    let app = spawn_app!();

    for (kind, score, date) in [
        ("baseline", 70, "2024-01-10T00:00:00Z"),
        ("midterm", 85, "2024-03-10T00:00:00Z"),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/evaluations")
            .peer_addr(peer())
            .set_json(json!({
                "projectId": "proj-1",
                "evaluationType": kind,
                "evaluationDate": date,
                "score": score
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/api/projects/proj-1/evaluation-summary")
        .peer_addr(peer())
        .to_request();
    let summary: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(summary["evaluationCount"], 2);
    assert_eq!(summary["latestScore"], 85);
}

#[actix_web::test]
async fn user_updates_rehash_passwords() {
    let app = spawn_app!();

    let req = test::TestRequest::post()
        .uri("/api/users")
        .peer_addr(peer())
        .set_json(json!({
            "firstName": "Field",
            "lastName": "Officer",
            "email": "officer@governancesystemsint.com",
            "password": "initial-pass",
            "role": "user"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let user: Value = test::read_body_json(resp).await;
    assert!(user.get("password").is_none());
    let id = user["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/{id}"))
        .peer_addr(peer())
        .set_json(json!({ "password": "rotated-pass" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The rotated credential works for login
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .peer_addr(peer())
        .set_json(json!({
            "email": "officer@governancesystemsint.com",
            "password": "rotated-pass"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}
