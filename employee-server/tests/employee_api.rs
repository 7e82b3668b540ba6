//! End-to-end tests for the employee CRUD API.
//!
//! Drives the assembled router in-process against a fresh in-memory store per
//! test, asserting status codes and the response envelope the way a client
//! would see them.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use employee_server::{Config, ServerState, api, db};

const ROUTE: &str = "/api/v1/employees";

async fn test_app() -> Router {
    let db = db::connect().await.expect("in-memory db");
    let state = ServerState::new(Config::from_env(), db);
    api::app(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn with_json(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn employee_json(email: &str) -> Value {
    json!({
        "email": email,
        "firstName": "Ada",
        "lastName": "Lovelace",
    })
}

async fn create_employee(app: &Router, email: &str) {
    let (status, _) = send(
        app,
        with_json(Method::POST, ROUTE, &employee_json(email)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// Find the id assigned to the employee with the given email
async fn id_of(app: &Router, email: &str) -> Uuid {
    let (status, body) = send(app, get(ROUTE)).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["message"]
        .as_array()
        .expect("employee array")
        .iter()
        .find(|e| e["email"] == email)
        .expect("created employee")["id"]
        .as_str()
        .expect("id string")
        .to_string();
    id.parse().expect("uuid id")
}

#[tokio::test]
async fn get_all_returns_stored_employees_in_the_envelope() {
    let app = test_app().await;
    create_employee(&app, "ada@example.com").await;
    create_employee(&app, "grace@example.com").await;
    create_employee(&app, "edsger@example.com").await;

    let (status, body) = send(&app, get(ROUTE)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    let employees = body["message"].as_array().unwrap();
    assert_eq!(employees.len(), 3);
    let mut emails: Vec<&str> = employees
        .iter()
        .map(|e| e["email"].as_str().unwrap())
        .collect();
    emails.sort_unstable();
    assert_eq!(
        emails,
        vec![
            "ada@example.com",
            "edsger@example.com",
            "grace@example.com"
        ]
    );
}

#[tokio::test]
async fn get_all_respects_the_page_window() {
    let app = test_app().await;
    for i in 0..3 {
        create_employee(&app, &format!("employee{i}@example.com")).await;
    }

    let (_, first) = send(&app, get(&format!("{ROUTE}?page=0&size=2"))).await;
    let (_, second) = send(&app, get(&format!("{ROUTE}?page=1&size=2"))).await;

    assert_eq!(first["message"].as_array().unwrap().len(), 2);
    assert_eq!(second["message"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn get_by_id_returns_the_employee() {
    let app = test_app().await;
    create_employee(&app, "ada@example.com").await;
    let id = id_of(&app, "ada@example.com").await;

    let (status, body) = send(&app, get(&format!("{ROUTE}/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"]["id"], id.to_string());
    assert_eq!(body["message"]["email"], "ada@example.com");
    assert_eq!(body["message"]["firstName"], "Ada");
    assert_eq!(body["message"]["lastName"], "Lovelace");
}

#[tokio::test]
async fn get_by_unknown_id_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, get(&format!("{ROUTE}/{}", Uuid::new_v4()))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "NOT_FOUND");
    assert_eq!(
        body["message"],
        "Employee has been not found with the given id"
    );
}

#[tokio::test]
async fn post_creates_an_employee() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        with_json(Method::POST, ROUTE, &employee_json("ada@example.com")),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "CREATED");
    assert_eq!(body["message"], "Employee has been created");
    assert!(body["time"].as_str().is_some());
}

#[tokio::test]
async fn post_with_an_id_is_bad_request() {
    let app = test_app().await;
    let mut payload = employee_json("ada@example.com");
    payload["id"] = json!(Uuid::new_v4().to_string());

    let (status, body) = send(&app, with_json(Method::POST, ROUTE, &payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "BAD_REQUEST");
    assert_eq!(body["message"], "Employee Id must be null for saving");
}

#[tokio::test]
async fn post_with_a_taken_email_is_bad_request() {
    let app = test_app().await;
    create_employee(&app, "ada@example.com").await;

    let (status, body) = send(
        &app,
        with_json(Method::POST, ROUTE, &employee_json("ada@example.com")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "BAD_REQUEST");
    assert_eq!(body["message"], "Email is already exist");
}

#[tokio::test]
async fn post_with_invalid_fields_is_unprocessable() {
    let app = test_app().await;
    let cases = [
        json!({"email": "not-an-email", "firstName": "Ada", "lastName": "Lovelace"}),
        json!({"email": "ada@example.com", "firstName": "  ", "lastName": "Lovelace"}),
        json!({"email": "ada@example.com", "firstName": "Ada", "lastName": "x".repeat(101)}),
    ];

    for payload in cases {
        let (status, body) = send(&app, with_json(Method::POST, ROUTE, &payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["status"], "UNPROCESSABLE_ENTITY");
        assert!(body["message"].as_str().is_some());
    }

    // Nothing reached the store
    let (_, body) = send(&app, get(ROUTE)).await;
    assert_eq!(body["message"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn put_updates_an_employee() {
    let app = test_app().await;
    create_employee(&app, "ada@example.com").await;
    let id = id_of(&app, "ada@example.com").await;

    let replacement = json!({
        "email": "grace@example.com",
        "firstName": "Grace",
        "lastName": "Hopper",
    });
    let (status, body) = send(
        &app,
        with_json(Method::PUT, &format!("{ROUTE}/{id}"), &replacement),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body["status"], "NO_CONTENT");
    assert_eq!(body["message"], "Employee has been updated");

    let (_, fetched) = send(&app, get(&format!("{ROUTE}/{id}"))).await;
    assert_eq!(fetched["message"]["email"], "grace@example.com");
    assert_eq!(fetched["message"]["firstName"], "Grace");
    assert_eq!(fetched["message"]["lastName"], "Hopper");
}

#[tokio::test]
async fn put_prefers_the_path_id_over_the_body_id() {
    let app = test_app().await;
    create_employee(&app, "ada@example.com").await;
    let id = id_of(&app, "ada@example.com").await;

    let mut replacement = employee_json("grace@example.com");
    replacement["id"] = json!(Uuid::new_v4().to_string());
    let (status, _) = send(
        &app,
        with_json(Method::PUT, &format!("{ROUTE}/{id}"), &replacement),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, fetched) = send(&app, get(&format!("{ROUTE}/{id}"))).await;
    assert_eq!(fetched["message"]["email"], "grace@example.com");
}

#[tokio::test]
async fn put_with_unknown_id_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        with_json(
            Method::PUT,
            &format!("{ROUTE}/{}", Uuid::new_v4()),
            &employee_json("ada@example.com"),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "Employee has been not found with the given id"
    );
}

#[tokio::test]
async fn put_with_invalid_fields_is_unprocessable() {
    let app = test_app().await;
    create_employee(&app, "ada@example.com").await;
    let id = id_of(&app, "ada@example.com").await;

    let payload = json!({"email": "ada@example.com", "firstName": "", "lastName": "Lovelace"});
    let (status, _) = send(
        &app,
        with_json(Method::PUT, &format!("{ROUTE}/{id}"), &payload),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_removes_the_employee() {
    let app = test_app().await;
    create_employee(&app, "ada@example.com").await;
    let id = id_of(&app, "ada@example.com").await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method(Method::DELETE)
            .uri(format!("{ROUTE}/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body["status"], "NO_CONTENT");
    assert_eq!(body["message"], "Employee has been deleted");

    let (status, _) = send(&app, get(&format!("{ROUTE}/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_unknown_id_is_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method(Method::DELETE)
            .uri(format!("{ROUTE}/{}", Uuid::new_v4()))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "Employee has been not found with the given id"
    );
}

// The end-to-end scenario: empty store, create, list, duplicate create fails.
#[tokio::test]
async fn create_list_then_duplicate_create_fails() {
    let app = test_app().await;

    let (_, empty) = send(&app, get(ROUTE)).await;
    assert_eq!(empty["message"].as_array().unwrap().len(), 0);

    let payload = json!({"email": "a@x.com", "firstName": "A", "lastName": "B"});
    let (status, _) = send(&app, with_json(Method::POST, ROUTE, &payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, listed) = send(&app, get(ROUTE)).await;
    let employees = listed["message"].as_array().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0]["email"], "a@x.com");

    let (status, body) = send(&app, with_json(Method::POST, ROUTE, &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email is already exist");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
