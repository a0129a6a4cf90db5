mod common;

use common::*;
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_create_and_list_tables() {
    let app = app().await;
    add_table(&app, "Table 2", 6).await;
    add_table(&app, "Bar #1", 1).await;

    let (code, res) = get(&app, "/tables").await;
    assert_eq!(code, StatusCode::OK);
    let names: Vec<_> = res["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["table_name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Bar #1", "Table 2"]);
    assert_eq!(res["data"][0]["occupied"], false);
    assert!(res["data"][0]["reservation_id"].is_null());
}

#[tokio::test]
async fn test_create_table_validation() {
    let app = app().await;

    let (code, res) = post(&app, "/tables", json!({ "table_name": "A", "capacity": 2 })).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Invalid table_name");

    let (code, res) = post(&app, "/tables", json!({ "table_name": "Patio", "capacity": 0 })).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Invalid capacity");

    let (code, res) = post(&app, "/tables", json!({ "table_name": "Patio", "capacity": "4" })).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Invalid capacity");

    let (code, res) = send(&app, Method::POST, "/tables", Some(json!({}))).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Data Missing!");
}

#[tokio::test]
async fn test_create_prebound_table() {
    let app = app().await;
    let reservation_id = book(&app, 2).await;

    let (code, res) = post(
        &app,
        "/tables",
        json!({ "table_name": "Patio", "capacity": 2, "reservation_id": reservation_id }),
    )
    .await;
    assert_eq!(code, StatusCode::CREATED);
    assert_eq!(res["data"]["occupied"], true);
    assert_eq!(res["data"]["reservation_id"], reservation_id);
    assert_eq!(reservation_status(&app, reservation_id).await, "seated");

    // already seated elsewhere
    let (code, res) = post(
        &app,
        "/tables",
        json!({ "table_name": "Patio 2", "capacity": 4, "reservation_id": reservation_id }),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Party already seated");

    let (code, _) = post(
        &app,
        "/tables",
        json!({ "table_name": "Patio 3", "capacity": 4, "reservation_id": 999 }),
    )
    .await;
    assert_eq!(code, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_read_table() {
    let app = app().await;
    let id = add_table(&app, "Bar #1", 1).await;

    let (code, res) = get(&app, &format!("/tables/{id}")).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(res["data"]["table_name"], "Bar #1");

    let (code, res) = get(&app, "/tables/999").await;
    assert_eq!(code, StatusCode::NOT_FOUND);
    assert_eq!(res["message"], "Table 999 cannot be found");
}

#[tokio::test]
async fn test_seat_then_finish() {
    let app = app().await;
    let reservation_id = book(&app, 4).await;
    let table_id = add_table(&app, "Table 1", 6).await;

    let (code, res) = put(
        &app,
        &format!("/tables/{table_id}/seat"),
        json!({ "reservation_id": reservation_id }),
    )
    .await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(res["data"]["occupied"], true);
    assert_eq!(res["data"]["reservation_id"], reservation_id);
    assert_eq!(reservation_status(&app, reservation_id).await, "seated");

    let (code, res) = delete(&app, &format!("/tables/{table_id}/seat")).await;
    assert_eq!(code, StatusCode::OK);
    assert_eq!(res["data"]["occupied"], false);
    assert!(res["data"]["reservation_id"].is_null());
    assert_eq!(reservation_status(&app, reservation_id).await, "finished");

    // finished reservations drop out of the day list
    let (_, res) = get(&app, &format!("/reservations?date={OPEN_DAY}")).await;
    assert!(res["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_seat_accepts_string_reservation_id() {
    let app = app().await;
    let reservation_id = book(&app, 2).await;
    let table_id = add_table(&app, "Table 1", 2).await;

    let (code, _) = put(
        &app,
        &format!("/tables/{table_id}/seat"),
        json!({ "reservation_id": reservation_id.to_string() }),
    )
    .await;
    assert_eq!(code, StatusCode::OK);
}

#[tokio::test]
async fn test_seat_over_capacity_changes_nothing() {
    let app = app().await;
    let reservation_id = book(&app, 4).await;
    let table_id = add_table(&app, "Bar #1", 2).await;

    let (code, res) = put(
        &app,
        &format!("/tables/{table_id}/seat"),
        json!({ "reservation_id": reservation_id }),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "The max capacity for Bar #1 is 2!");

    let (_, table) = get(&app, &format!("/tables/{table_id}")).await;
    assert_eq!(table["data"]["occupied"], false);
    assert_eq!(reservation_status(&app, reservation_id).await, "booked");
}

#[tokio::test]
async fn test_seat_rejections() {
    let app = app().await;
    let first = book(&app, 2).await;
    let second = book(&app, 2).await;
    let table_id = add_table(&app, "Table 1", 4).await;
    let other_table = add_table(&app, "Table 2", 4).await;
    let uri = format!("/tables/{table_id}/seat");

    let (code, res) = put(&app, &uri, json!({})).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Missing reservation_id");

    let (code, res) = put(&app, &uri, json!({ "reservation_id": 999 })).await;
    assert_eq!(code, StatusCode::NOT_FOUND);
    assert_eq!(res["message"], "999 does not exist");

    let (code, _) = put(&app, &uri, json!({ "reservation_id": first })).await;
    assert_eq!(code, StatusCode::OK);

    // table occupied
    let (code, res) = put(&app, &uri, json!({ "reservation_id": second })).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Table 1 is already occupied!");
    assert_eq!(reservation_status(&app, second).await, "booked");

    // party already seated
    let (code, res) = put(
        &app,
        &format!("/tables/{other_table}/seat"),
        json!({ "reservation_id": first }),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Party already seated");

    // unknown table
    let (code, _) = put(&app, "/tables/999/seat", json!({ "reservation_id": second })).await;
    assert_eq!(code, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seat_finished_reservation_rejected() {
    let app = app().await;
    let reservation_id = book(&app, 2).await;
    let table_id = add_table(&app, "Table 1", 4).await;
    put(
        &app,
        &format!("/reservations/{reservation_id}/status"),
        json!({ "status": "finished" }),
    )
    .await;

    let (code, res) = put(
        &app,
        &format!("/tables/{table_id}/seat"),
        json!({ "reservation_id": reservation_id }),
    )
    .await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "A finished reservation cannot be updated.");
}

#[tokio::test]
async fn test_unassign_free_table() {
    let app = app().await;
    let table_id = add_table(&app, "Table 1", 4).await;

    let (code, res) = delete(&app, &format!("/tables/{table_id}/seat")).await;
    assert_eq!(code, StatusCode::BAD_REQUEST);
    assert_eq!(res["message"], "Table 1 is not occupied");

    let (code, _) = delete(&app, "/tables/999/seat").await;
    assert_eq!(code, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cancel_seated_reservation_frees_table() {
    let app = app().await;
    let reservation_id = book(&app, 2).await;
    let table_id = add_table(&app, "Table 1", 4).await;
    put(
        &app,
        &format!("/tables/{table_id}/seat"),
        json!({ "reservation_id": reservation_id }),
    )
    .await;

    let (code, _) = put(
        &app,
        &format!("/reservations/{reservation_id}/status"),
        json!({ "status": "cancelled" }),
    )
    .await;
    assert_eq!(code, StatusCode::OK);

    let (_, table) = get(&app, &format!("/tables/{table_id}")).await;
    assert_eq!(table["data"]["occupied"], false);
    assert!(table["data"]["reservation_id"].is_null());
}

#[tokio::test]
async fn test_table_method_not_allowed() {
    let app = app().await;
    let (code, res) = delete(&app, "/tables/1").await;
    assert_eq!(code, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res["message"], "DELETE not allowed for /tables/1");

    let (code, _) = send(&app, Method::POST, "/tables/1/seat", Some(json!({}))).await;
    assert_eq!(code, StatusCode::METHOD_NOT_ALLOWED);
}
