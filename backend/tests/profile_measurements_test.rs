//! Integration tests for profile measurement endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

fn measurements_path(user_id: Uuid) -> String {
    format!("/api/v1/profiles/{}/measurements", user_id)
}

#[tokio::test]
async fn test_invalid_user_id_is_rejected() {
    let app = common::TestApp::stateless();

    let (status, body) = app.get("/api/v1/profiles/not-a-uuid/measurements").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("BAD_REQUEST"));
}

#[tokio::test]
async fn test_invalid_measurements_rejected_before_storage() {
    // Validation fails before the (unreachable) profile store is touched
    let app = common::TestApp::stateless();
    let body = json!({"weight": 65, "height": 260});

    let (status, response) = app
        .put(&measurements_path(Uuid::new_v4()), &body.to_string())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["field"], "height");
}

#[tokio::test]
async fn test_malformed_body_rejected_before_storage() {
    let app = common::TestApp::stateless();

    let (status, response) = app
        .put(&measurements_path(Uuid::new_v4()), r#"{"height": 170}"#)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_save_and_get_measurements() {
    let app = common::TestApp::new().await;
    let user_id = Uuid::new_v4();

    let body = json!({"weight": 65, "height": 170});
    let (status, response) = app.put(&measurements_path(user_id), &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["user_id"], user_id.to_string());
    assert_eq!(response["measurements"]["weight"], 65.0);
    assert_eq!(response["measurements"]["height"], 170.0);
    assert_eq!(response["recommendation"]["size"], "M");

    let (status, response) = app.get(&measurements_path(user_id)).await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["recommendation"]["bmi"], 22.5);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_saving_again_replaces_measurements() {
    let app = common::TestApp::new().await;
    let user_id = Uuid::new_v4();

    app.put(
        &measurements_path(user_id),
        &json!({"weight": 65, "height": 170}).to_string(),
    )
    .await;
    let (status, _) = app
        .put(
            &measurements_path(user_id),
            &json!({"weight": "90", "height": "185"}).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = app
        .get(&format!("/api/v1/profiles/{}/size-recommendation", user_id))
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["size"], "XL");
    assert_eq!(response["bodyFrame"], "tall");

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_profile_without_measurements_is_not_found() {
    let app = common::TestApp::new().await;
    let user_id = Uuid::new_v4();

    let (status, _) = app.get(&measurements_path(user_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .get(&format!("/api/v1/profiles/{}/size-recommendation", user_id))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_rejected_update_keeps_previous_measurements() {
    let app = common::TestApp::new().await;
    let user_id = Uuid::new_v4();

    app.put(
        &measurements_path(user_id),
        &json!({"weight": 50, "height": 155}).to_string(),
    )
    .await;
    let (status, _) = app
        .put(
            &measurements_path(user_id),
            &json!({"weight": 29, "height": 170}).to_string(),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, response) = app.get(&measurements_path(user_id)).await;
    let response: Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["measurements"]["weight"], 50.0);
    assert_eq!(response["recommendation"]["size"], "S");

    app.cleanup().await;
}
