//! Integration tests for the admin clinic update endpoint.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_app, create_test_pool, json_request, json_request_with_admin_key,
    parse_response_body, run_migrations, seed_clinic, test_config, TestClinic, TEST_ADMIN_KEY,
};
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

#[tokio::test]
async fn test_update_clinic_with_admin_key() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request_with_admin_key(
            Method::PUT,
            &format!("/api/v1/admin/clinics/{}", clinic_id),
            json!({
                "about_text": "Now with weekend hours.",
                "phone": "555-0111"
            }),
            TEST_ADMIN_KEY,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(
        body["clinic"]["about_text"].as_str().unwrap(),
        "Now with weekend hours."
    );
    assert_eq!(body["clinic"]["phone"].as_str().unwrap(), "555-0111");
    // Untouched fields keep their values; slug never changes.
    assert_eq!(body["clinic"]["slug"].as_str().unwrap(), clinic.slug);
    assert_eq!(
        body["clinic"]["business_name"].as_str().unwrap(),
        clinic.business_name
    );

    // The change is persisted, not just echoed.
    let stored: String =
        sqlx::query_scalar("SELECT about_text FROM clinics WHERE id = $1")
            .bind(clinic_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, "Now with weekend hours.");
}

#[tokio::test]
async fn test_update_clinic_without_key_is_unauthorized() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/admin/clinics/{}", clinic_id),
            json!({"about_text": "sneaky"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_clinic_with_wrong_key_is_unauthorized() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request_with_admin_key(
            Method::PUT,
            &format!("/api/v1/admin/clinics/{}", clinic_id),
            json!({"about_text": "sneaky"}),
            "wrong-key",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_unknown_clinic_is_not_found() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request_with_admin_key(
            Method::PUT,
            &format!("/api/v1/admin/clinics/{}", Uuid::new_v4()),
            json!({"about_text": "anyone home?"}),
            TEST_ADMIN_KEY,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_with_invalid_phone_is_rejected() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request_with_admin_key(
            Method::PUT,
            &format!("/api/v1/admin/clinics/{}", clinic_id),
            json!({"phone": "call us maybe"}),
            TEST_ADMIN_KEY,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_update_is_rejected() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request_with_admin_key(
            Method::PUT,
            &format!("/api/v1/admin/clinics/{}", clinic_id),
            json!({}),
            TEST_ADMIN_KEY,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = parse_response_body(response).await;
    assert_eq!(body["message"].as_str().unwrap(), "No fields to update");
}
