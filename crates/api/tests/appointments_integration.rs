//! Integration tests for appointment submission.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    count_appointments, create_test_app, create_test_pool, json_request, parse_response_body,
    run_migrations, seed_clinic, test_config, TestClinic,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_submit_appointment_persists_one_row_for_clinic() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/sites/{}/appointments", clinic.slug),
            json!({"name": "Jane", "phone": "555-0100"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["appointment"]["name"].as_str().unwrap(), "Jane");
    assert_eq!(
        body["appointment"]["clinic_id"].as_str().unwrap(),
        clinic_id.to_string()
    );
    assert_eq!(count_appointments(&pool, clinic_id).await, 1);
}

#[tokio::test]
async fn test_submit_appointment_unknown_clinic_writes_nothing() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    // Seed a real clinic so we can prove the write went nowhere.
    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/v1/sites/no-such-clinic/appointments",
            json!({"name": "Jane", "phone": "555-0100"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(count_appointments(&pool, clinic_id).await, 0);
}

#[tokio::test]
async fn test_submit_appointment_missing_phone_is_rejected() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/sites/{}/appointments", clinic.slug),
            json!({"name": "Jane", "phone": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count_appointments(&pool, clinic_id).await, 0);
}

#[tokio::test]
async fn test_optional_fields_are_stored_as_submitted() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(json_request(
            Method::POST,
            &format!("/api/v1/sites/{}/appointments", clinic.slug),
            json!({
                "name": "Jane",
                "phone": "555-0100",
                "email": "jane@example.com",
                "message": "Back molar pain",
                "preferred_time": "Monday mornings"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(
        body["appointment"]["email"].as_str().unwrap(),
        "jane@example.com"
    );
    assert_eq!(
        body["appointment"]["preferred_time"].as_str().unwrap(),
        "Monday mornings"
    );
}

#[tokio::test]
async fn test_duplicate_submission_produces_two_rows() {
    // There is deliberately no idempotency key: a double-click books
    // twice. This pins that behavior so changing it is a decision.
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                &format!("/api/v1/sites/{}/appointments", clinic.slug),
                json!({"name": "Jane", "phone": "555-0100"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    assert_eq!(count_appointments(&pool, clinic_id).await, 2);
}
