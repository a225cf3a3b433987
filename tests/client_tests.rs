use actix_web::{App, web};
use serde_json::json;

use gsi_management::client::ApiClient;
use gsi_management::config::Config;
use gsi_management::store::Store;
use gsi_management::{routes, validation};

fn test_config() -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        jwt_secret: "client-test-secret".to_string(),
        access_token_ttl: 900,
        rate_login_per_min: 10_000,
        rate_api_per_min: 10_000,
        api_prefix: "/api".to_string(),
    }
}

fn spawn_server() -> actix_test::TestServer {
    actix_test::start(|| {
        App::new()
            .app_data(web::Data::new(Store::seeded()))
            .app_data(web::Data::new(test_config()))
            .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
            .configure(|cfg| routes::configure(cfg, test_config()))
    })
}

#[actix_web::test]
async fn cached_list_is_refreshed_after_create() {
    let srv = spawn_server();
    let client = ApiClient::new(srv.url(""));

    let before = client.get("/api/employees").await.unwrap();
    assert_eq!(before.as_array().unwrap().len(), 2);

    // Warm cache again, then write through the client
    let cached = client.get("/api/employees").await.unwrap();
    assert_eq!(cached, before);

    client
        .post(
            "/api/employees",
            &json!({
                "employeeId": "GSI011",
                "firstName": "Peter",
                "lastName": "Lokwang",
                "email": "peter.lokwang@governancesystemsint.com",
                "position": "Driver",
                "department": "Operations",
                "hireDate": "2024-02-01T00:00:00Z"
            }),
        )
        .await
        .unwrap();

    let after = client.get("/api/employees").await.unwrap();
    assert_eq!(after.as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn item_update_invalidates_item_and_collection() {
    let srv = spawn_server();
    let client = ApiClient::new(srv.url(""));

    let emp = client.get("/api/employees/emp-1").await.unwrap();
    assert_eq!(emp["position"], "Project Manager");

    client
        .put(
            "/api/employees/emp-1",
            &json!({ "position": "Country Director" }),
        )
        .await
        .unwrap();

    let emp = client.get("/api/employees/emp-1").await.unwrap();
    assert_eq!(emp["position"], "Country Director");

    let list = client.get("/api/employees").await.unwrap();
    assert!(
        list.as_array()
            .unwrap()
            .iter()
            .any(|e| e["position"] == "Country Director")
    );
}

#[actix_web::test]
async fn delete_drops_the_record_and_the_cache_entry() {
    let srv = spawn_server();
    let client = ApiClient::new(srv.url(""));

    client.get("/api/employees/emp-2").await.unwrap();
    client.delete("/api/employees/emp-2").await.unwrap();

    // Entry is gone from cache and server alike
    let err = client.get("/api/employees/emp-2").await.unwrap_err();
    assert!(err.to_string().contains("404"));

    let list = client.get("/api/employees").await.unwrap();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn error_responses_surface_as_errors() {
    let srv = spawn_server();
    let client = ApiClient::new(srv.url(""));

    let err = client
        .post("/api/employees", &json!({ "firstName": "No Email" }))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("POST /api/employees"));
}
