// SPDX-License-Identifier: MIT

//! HTTP surface tests against the router with an offline database.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_db_health_failure_uses_bootstrap_error_shape() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/db")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Offline database: 500 with the success:false wire shape.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Database connection failed"));
}

#[tokio::test]
async fn test_calc_male_defaults() {
    let app = common::create_test_app().await;

    let payload = json!({ "height": 180.0, "weight": 80.0, "age": 30.0 });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calc")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // Defaults: sex=male, activity=1.55
    assert_eq!(body["bmr"], 1780);
    assert_eq!(body["tdee"], 2759);
}

#[tokio::test]
async fn test_calc_female() {
    let app = common::create_test_app().await;

    let payload = json!({
        "height": 165.0,
        "weight": 60.0,
        "age": 25.0,
        "sex": "female",
        "activity": 1.2
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calc")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["bmr"], 1345);
    assert_eq!(body["tdee"], 1614);
}

#[tokio::test]
async fn test_calc_rejects_non_positive_input() {
    let app = common::create_test_app().await;

    let payload = json!({ "height": -1.0, "weight": 80.0, "age": 30.0 });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calc")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_calc_rejects_missing_fields() {
    let app = common::create_test_app().await;

    let payload = json!({ "height": 180.0 });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calc")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
