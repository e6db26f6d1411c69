//! Integration tests for the resolved content view-model.

mod common;

use axum::http::StatusCode;
use common::{
    create_test_app, create_test_pool, get_request, parse_response_body, run_migrations,
    seed_clinic, seed_clinic_full, seed_faq, seed_testimonial, test_config, TestClinic,
};
use tower::ServiceExt;

#[tokio::test]
async fn test_minimal_clinic_gets_default_content_per_field() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    // Seeded with a name but no about text, hours, or services.
    let clinic = TestClinic::new();
    seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(get_request(&format!("/api/v1/content/{}", clinic.slug)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    // Real name survives while the missing fields fall back.
    assert_eq!(
        body["display_name"].as_str().unwrap(),
        clinic.business_name
    );
    assert_eq!(body["hero_title"].as_str().unwrap(), clinic.business_name);
    assert!(body["about_text"]
        .as_str()
        .unwrap()
        .starts_with("With over 15 years of experience"));
    assert_eq!(body["services"].as_array().unwrap().len(), 6);
    assert_eq!(body["services"][0].as_str().unwrap(), "General Dentistry");
    assert!(body.get("place_url").is_none());

    // Default weekly schedule.
    let hours = body["office_hours"].as_array().unwrap();
    assert_eq!(hours.len(), 3);
    assert_eq!(hours[0]["label"].as_str().unwrap(), "Monday - Friday");
    assert_eq!(hours[2]["hours"].as_str().unwrap(), "Emergency Only");
}

#[tokio::test]
async fn test_zero_testimonials_render_default_three() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    seed_clinic(&pool, &clinic).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(get_request(&format!("/api/v1/content/{}", clinic.slug)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;

    let testimonials = body["testimonials"].as_array().unwrap();
    assert_eq!(testimonials.len(), 3);
    assert_eq!(
        testimonials[0]["patient_name"].as_str().unwrap(),
        "Sarah Johnson"
    );
    assert_eq!(
        testimonials[1]["patient_name"].as_str().unwrap(),
        "Michael Chen"
    );
    assert_eq!(
        testimonials[2]["patient_name"].as_str().unwrap(),
        "Emily Davis"
    );
}

#[tokio::test]
async fn test_zero_active_faqs_render_default_five() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;
    // An inactive FAQ must not count as content.
    seed_faq(&pool, clinic_id, "Hidden question?", 1, false).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(get_request(&format!("/api/v1/content/{}", clinic.slug)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;

    let faqs = body["faqs"].as_array().unwrap();
    assert_eq!(faqs.len(), 5);
    assert_eq!(
        faqs[0]["question"].as_str().unwrap(),
        "What services do you offer?"
    );
}

#[tokio::test]
async fn test_real_rows_replace_defaults() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    let clinic_id = seed_clinic(&pool, &clinic).await;
    seed_testimonial(&pool, clinic_id, "Ana Flores", 1).await;
    seed_faq(&pool, clinic_id, "Do you see kids?", 1, true).await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(get_request(&format!("/api/v1/content/{}", clinic.slug)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;

    let testimonials = body["testimonials"].as_array().unwrap();
    assert_eq!(testimonials.len(), 1);
    assert_eq!(
        testimonials[0]["patient_name"].as_str().unwrap(),
        "Ana Flores"
    );

    let faqs = body["faqs"].as_array().unwrap();
    assert_eq!(faqs.len(), 1);
    assert_eq!(faqs[0]["question"].as_str().unwrap(), "Do you see kids?");
}

#[tokio::test]
async fn test_structured_working_hours_and_full_fields() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;

    let clinic = TestClinic::new();
    seed_clinic_full(
        &pool,
        &clinic,
        "Family dentistry since 1998.",
        "Monday: 8:00 AM - 6:00 PM | Saturday: 9:00 AM - 4:00 PM",
        &["Dental Implants", "Orthodontics"],
    )
    .await;

    let app = create_test_app(test_config(), pool.clone());
    let response = app
        .oneshot(get_request(&format!("/api/v1/content/{}", clinic.slug)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;

    assert_eq!(
        body["about_text"].as_str().unwrap(),
        "Family dentistry since 1998."
    );
    assert_eq!(body["services"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["place_url"].as_str().unwrap(),
        "https://maps.example.com/x"
    );

    let hours = body["office_hours"].as_array().unwrap();
    assert_eq!(hours.len(), 2);
    assert_eq!(hours[0]["label"].as_str().unwrap(), "Monday");
    assert_eq!(hours[0]["hours"].as_str().unwrap(), "8:00 AM - 6:00 PM");
    assert_eq!(hours[1]["label"].as_str().unwrap(), "Saturday");
    assert_eq!(hours[1]["hours"].as_str().unwrap(), "9:00 AM - 4:00 PM");
}
