#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use reservation_server::{Config, DbService, ServerState, build_app};
use serde_json::{Value, json};
use tower::ServiceExt;

/// 2035-06-13 is a Wednesday
pub const OPEN_DAY: &str = "2035-06-13";
/// 2035-06-12 is a Tuesday
pub const CLOSED_DAY: &str = "2035-06-12";

pub async fn app() -> Router {
    let db = DbService::in_memory().await.unwrap();
    build_app(ServerState::new(Config::default(), db.pool))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, data: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(json!({ "data": data }))).await
}

pub async fn put(app: &Router, uri: &str, data: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(json!({ "data": data }))).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub fn reservation_body(people: i64) -> Value {
    json!({
        "first_name": "Ann",
        "last_name": "Lee",
        "mobile_number": "555-123-4567",
        "reservation_date": OPEN_DAY,
        "reservation_time": "18:00",
        "people": people,
    })
}

/// Create a booked reservation and return its id
pub async fn book(app: &Router, people: i64) -> i64 {
    let (status, body) = post(app, "/reservations", reservation_body(people)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["reservation_id"].as_i64().unwrap()
}

/// Create a free table and return its id
pub async fn add_table(app: &Router, name: &str, capacity: i64) -> i64 {
    let (status, body) = post(app, "/tables", json!({ "table_name": name, "capacity": capacity })).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["data"]["table_id"].as_i64().unwrap()
}

pub async fn reservation_status(app: &Router, id: i64) -> String {
    let (_, body) = get(app, &format!("/reservations/{id}")).await;
    body["data"]["status"].as_str().unwrap().to_string()
}
