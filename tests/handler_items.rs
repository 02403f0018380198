mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

// ─── Lifecycle ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let server = common::make_server();

    let created = server
        .post("/items")
        .json(&json!({ "name": "Widget", "price": 5.0 }))
        .await;
    created.assert_status(StatusCode::CREATED);

    let body = created.json::<Value>();
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"], 5.0);

    let fetched = server.get(&format!("/items/{id}")).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), body);
}

#[tokio::test]
async fn test_widget_scenario() {
    // POST → 201, GET → 200 identical, DELETE → 204, GET → 404.
    let server = common::make_server();

    let created = server
        .post("/items")
        .json(&json!({ "name": "Widget", "price": 5.0 }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let body = created.json::<Value>();
    let id = body["id"].as_str().unwrap().to_string();
    assert!(body.get("createdDate").is_some());
    assert_eq!(
        created.header("location").to_str().unwrap(),
        format!("/items/{id}")
    );

    let fetched = server.get(&format!("/items/{id}")).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), body);

    server
        .delete(&format!("/items/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/items/{id}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_created_dates_non_decreasing_with_call_order() {
    let server = common::make_server();
    let mut timestamps = Vec::new();

    for i in 0..5 {
        let response = server
            .post("/items")
            .json(&json!({ "name": format!("Item {i}"), "price": 1.0 }))
            .await;
        let raw = response.json::<Value>()["createdDate"]
            .as_str()
            .unwrap()
            .to_string();
        timestamps.push(chrono::DateTime::parse_from_rfc3339(&raw).unwrap());
    }

    for pair in timestamps.windows(2) {
        assert!(pair[1] >= pair[0], "createdDate went backwards: {pair:?}");
    }
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let server = common::make_server();
    let mut ids = Vec::new();

    for i in 0..10 {
        let response = server
            .post("/items")
            .json(&json!({ "name": format!("Item {i}"), "price": 1.0 }))
            .await;
        ids.push(response.json::<Value>()["id"].as_str().unwrap().to_string());
    }

    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_replaces_fields_and_preserves_identity() {
    let server = common::make_server();

    let created = server
        .post("/items")
        .json(&json!({ "name": "A", "price": 1.0 }))
        .await;
    let body = created.json::<Value>();
    let id = body["id"].as_str().unwrap().to_string();
    let created_date = body["createdDate"].clone();

    server
        .put(&format!("/items/{id}"))
        .json(&json!({ "name": "B", "price": 9.99 }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let fetched = server.get(&format!("/items/{id}")).await.json::<Value>();
    assert_eq!(fetched["id"].as_str().unwrap(), id);
    assert_eq!(fetched["name"], "B");
    assert_eq!(fetched["price"], 9.99);
    assert_eq!(fetched["createdDate"], created_date);
}

#[tokio::test]
async fn test_update_missing_item_not_found() {
    let server = common::make_server();

    server
        .put(&format!("/items/{}", Uuid::new_v4()))
        .json(&json!({ "name": "B", "price": 9.99 }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_update_rejects_invalid_body() {
    let server = common::make_server();

    let created = server
        .post("/items")
        .json(&json!({ "name": "A", "price": 1.0 }))
        .await;
    let id = created.json::<Value>()["id"].as_str().unwrap().to_string();

    server
        .put(&format!("/items/{id}"))
        .json(&json!({ "name": "", "price": 9.99 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    // The stored item is untouched.
    let fetched = server.get(&format!("/items/{id}")).await.json::<Value>();
    assert_eq!(fetched["name"], "A");
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_absent_id_is_idempotently_not_found() {
    let server = common::make_server();
    let id = Uuid::new_v4();

    server
        .delete(&format!("/items/{id}"))
        .await
        .assert_status_not_found();

    // Second attempt reports the same outcome, not a different error.
    server
        .delete(&format!("/items/{id}"))
        .await
        .assert_status_not_found();
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_empty_catalog() {
    let server = common::make_server();

    let response = server.get("/items").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_list_reflects_creates_and_deletes() {
    let server = common::make_server();
    let mut ids = Vec::new();

    for i in 0..5 {
        let response = server
            .post("/items")
            .json(&json!({ "name": format!("Item {i}"), "price": i as f64 }))
            .await;
        ids.push(response.json::<Value>()["id"].as_str().unwrap().to_string());
    }

    for id in ids.iter().take(2) {
        server
            .delete(&format!("/items/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    let listed = server.get("/items").await.json::<Value>();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 3);

    let surviving: std::collections::HashSet<_> = ids.iter().skip(2).collect();
    for entry in listed {
        let id = entry["id"].as_str().unwrap().to_string();
        assert!(surviving.contains(&id), "unexpected item {id} in list");
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_rejects_malformed_body_before_persisting() {
    let server = common::make_server();

    server
        .post("/items")
        .json(&json!({ "name": "", "price": 5.0 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/items")
        .json(&json!({ "name": "Widget", "price": -1.0 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    assert_eq!(server.get("/items").await.json::<Value>(), json!([]));
}
