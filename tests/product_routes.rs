//! Product Route Tests
//!
//! Drive the full Axum application in-process against a JSON file in a
//! temporary directory: status codes, envelopes, dispatch and error mapping.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use products_api::http_server::{HttpServer, RunMode, ServerConfig};
use products_api::products::ProductRepository;
use products_api::storage::JsonFileStore;

// =============================================================================
// Test Utilities
// =============================================================================

struct TestApp {
    router: Router,
    _dir: TempDir,
}

fn create_test_app() -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ServerConfig {
        data_file: dir.path().join("db.json"),
        run_mode: RunMode::Development,
        ..Default::default()
    };
    let repository = ProductRepository::new(JsonFileStore::new(&config.data_file));
    let router = HttpServer::new(config, repository).router();
    TestApp { router, _dir: dir }
}

impl TestApp {
    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn create(&self, product: Value) -> Value {
        let (status, body) = self.send(Method::POST, "/api/products", Some(product)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body["data"].clone()
    }
}

fn product(name: &str, unit_cost: f64, total_sales: f64) -> Value {
    json!({
        "name": name,
        "unitCost": unit_cost,
        "totalSales": total_sales,
        "inventory": 10,
        "description": "Test description",
        "imageUrl": "https://example.com/image.jpg"
    })
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn post_creates_product_and_echoes_fields() {
    let app = create_test_app();
    let input = product("Test Product", 10.0, 0.0);

    let (status, body) = app.send(Method::POST, "/api/products", Some(input.clone())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    let data = &body["data"];
    assert!(!data["id"].as_str().unwrap().is_empty());
    assert_eq!(data["name"], input["name"]);
    assert_eq!(data["unitCost"].as_f64(), Some(10.0));
    assert_eq!(data["totalSales"].as_f64(), Some(0.0));
    assert_eq!(data["inventory"].as_f64(), Some(10.0));
    assert_eq!(data["unitCost"], json!(10));
    assert_eq!(data["inventory"], json!(10));
    assert_eq!(data["description"], input["description"]);
    assert_eq!(data["imageUrl"], input["imageUrl"]);
}

#[tokio::test]
async fn post_with_missing_field_is_bad_request() {
    let app = create_test_app();
    let mut input = product("Test Product", 10.0, 0.0);
    input.as_object_mut().unwrap().remove("imageUrl");

    let (status, body) = app.send(Method::POST, "/api/products", Some(input)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "All fields are required" }));
}

#[tokio::test]
async fn post_with_malformed_json_is_bad_request() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["message"].is_string());
}

// =============================================================================
// Read
// =============================================================================

#[tokio::test]
async fn get_all_returns_every_product_with_count() {
    let app = create_test_app();
    app.create(product("First", 1.0, 1.0)).await;
    app.create(product("Second", 2.0, 2.0)).await;

    let (status, body) = app.get("/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["dataCount"], 2);
    assert_eq!(names(&body), vec!["First", "Second"]);
}

#[tokio::test]
async fn get_all_on_empty_store() {
    let app = create_test_app();
    let (status, body) = app.get("/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "success", "dataCount": 0, "data": [] }));
}

#[tokio::test]
async fn list_is_idempotent() {
    let app = create_test_app();
    app.create(product("Only", 1.0, 1.0)).await;

    let (_, first) = app.get("/api/products").await;
    let (_, second) = app.get("/api/products").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn get_by_id_round_trips() {
    let app = create_test_app();
    let created = app.create(product("Test Product", 10.0, 0.0)).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.get(&format!("/api/products/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created);
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let app = create_test_app();
    let (status, body) = app.get("/api/products/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Product not found" }));
}

// =============================================================================
// Search and filter
// =============================================================================

#[tokio::test]
async fn search_by_name_is_case_insensitive() {
    let app = create_test_app();
    app.create(product("Laptop", 1000.0, 5.0)).await;
    app.create(product("Phone", 500.0, 5.0)).await;

    let (status, body) = app.get("/api/products?name=laptop").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dataCount"], 1);
    assert_eq!(names(&body), vec!["Laptop"]);
}

#[tokio::test]
async fn filter_by_cost_with_operators() {
    let app = create_test_app();
    app.create(product("A", 1000.0, 0.0)).await;
    app.create(product("B", 1500.0, 0.0)).await;

    let (_, lte) = app.get("/api/products?cost=1000&costOp=lte").await;
    assert_eq!(names(&lte), vec!["A"]);

    let (_, gt) = app.get("/api/products?cost=1000&costOp=gt").await;
    assert_eq!(names(&gt), vec!["B"]);

    // gt is the default operator
    let (_, default_op) = app.get("/api/products?cost=1000").await;
    assert_eq!(names(&default_op), vec!["B"]);
}

#[tokio::test]
async fn filter_by_cost_and_sales_combined() {
    let app = create_test_app();
    app.create(product("Cheap bestseller", 10.0, 900.0)).await;
    app.create(product("Cheap dud", 10.0, 1.0)).await;
    app.create(product("Pricey bestseller", 900.0, 900.0)).await;

    let (status, body) = app
        .get("/api/products?cost=100&costOp=lt&sales=100&salesOp=gte")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Cheap bestseller"]);
}

#[tokio::test]
async fn name_takes_priority_over_filters() {
    let app = create_test_app();
    app.create(product("Laptop", 1000.0, 0.0)).await;

    let (_, body) = app.get("/api/products?name=lap&cost=5000").await;
    assert_eq!(names(&body), vec!["Laptop"]);
}

#[tokio::test]
async fn pagination_params_are_accepted_but_ignored() {
    let app = create_test_app();
    for i in 0..3 {
        app.create(product(&format!("P{}", i), 1.0, 1.0)).await;
    }

    let (status, body) = app.get("/api/products?page=2&limit=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["dataCount"], 3);
}

#[tokio::test]
async fn unknown_operator_is_bad_request() {
    let app = create_test_app();
    let (status, body) = app.get("/api/products?cost=10&costOp=eq").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid comparison operator: eq");
}

#[tokio::test]
async fn operator_without_its_threshold_is_ignored() {
    let app = create_test_app();
    app.create(product("Slow", 10.0, 1.0)).await;
    app.create(product("Fast", 10.0, 9.0)).await;

    let (status, body) = app.get("/api/products?sales=5&costOp=bogus").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Fast"]);
}

#[tokio::test]
async fn non_numeric_threshold_is_bad_request() {
    let app = create_test_app();
    let (status, _) = app.get("/api/products?cost=cheap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn put_updates_all_supplied_fields() {
    let app = create_test_app();
    let created = app.create(product("Test Product", 10.0, 0.0)).await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/api/products/{}", id);

    let updated = json!({
        "name": "Updated Product",
        "unitCost": 20,
        "totalSales": 5,
        "inventory": 15,
        "description": "Updated description",
        "imageUrl": "https://example.com/updated-image.jpg"
    });
    let (status, body) = app.send(Method::PUT, &uri, Some(updated)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Updated Product");
    assert_eq!(body["data"]["unitCost"].as_f64(), Some(20.0));

    let (status, fetched) = app.get(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], body["data"]);
}

#[tokio::test]
async fn put_with_only_name_preserves_other_fields() {
    let app = create_test_app();
    let created = app.create(product("Before", 10.0, 3.0)).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .send(Method::PUT, &uri, Some(json!({ "name": "After" })))
        .await;

    assert_eq!(status, StatusCode::OK);
    let mut expected = created.clone();
    expected["name"] = json!("After");
    assert_eq!(body["data"], expected);
}

#[tokio::test]
async fn put_cannot_change_id() {
    let app = create_test_app();
    let created = app.create(product("Fixed", 1.0, 1.0)).await;
    let id = created["id"].as_str().unwrap();

    let (_, body) = app
        .send(
            Method::PUT,
            &format!("/api/products/{}", id),
            Some(json!({ "id": "other" })),
        )
        .await;
    assert_eq!(body["data"]["id"], id);
}

#[tokio::test]
async fn put_without_body_leaves_product_unchanged() {
    let app = create_test_app();
    let created = app.create(product("Untouched", 3.0, 2.0)).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, body) = app.send(Method::PUT, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created);
}

#[tokio::test]
async fn put_unknown_id_is_not_found() {
    let app = create_test_app();
    let (status, _) = app
        .send(Method::PUT, "/api/products/missing", Some(json!({ "name": "x" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_with_wrong_field_type_is_bad_request() {
    let app = create_test_app();
    let created = app.create(product("Typed", 1.0, 1.0)).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, _) = app
        .send(Method::PUT, &uri, Some(json!({ "unitCost": "a lot" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_removes_product() {
    let app = create_test_app();
    let created = app.create(product("Doomed", 1.0, 1.0)).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    let (status, body) = app.send(Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "data": { "message": "Product deleted successfully" } })
    );

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = app.get("/api/products").await;
    assert_eq!(list["dataCount"], 0);
}

#[tokio::test]
async fn delete_unknown_id_fails() {
    let app = create_test_app();
    let (status, body) = app.send(Method::DELETE, "/api/products/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product not found");
}

// =============================================================================
// Routing
// =============================================================================

#[tokio::test]
async fn unmatched_route_is_json_not_found() {
    let app = create_test_app();
    let (status, body) = app.get("/api/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Not Found" }));
}

#[tokio::test]
async fn unregistered_method_is_json_not_found() {
    let app = create_test_app();
    let created = app.create(product("Static", 1.0, 1.0)).await;
    let uri = format!("/api/products/{}", created["id"].as_str().unwrap());

    for (method, uri) in [
        (Method::PATCH, uri.as_str()),
        (Method::POST, uri.as_str()),
        (Method::DELETE, "/api/products"),
    ] {
        let (status, body) = app.send(method.clone(), uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body, json!({ "message": "Not Found" }));
    }
}

#[tokio::test]
async fn trailing_slash_paths_are_served() {
    let app = create_test_app();
    let created = app.create(product("Slashed", 1.0, 1.0)).await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.get("/api/products/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Slashed"]);

    let (status, body) = app.get(&format!("/api/products/{}/", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created);
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = create_test_app();
    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/api/products")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
