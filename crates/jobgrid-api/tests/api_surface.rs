//! Router-level tests that run without any backing services.
//!
//! Covers routing, middleware, auth gating, request validation, and error
//! rendering. Anything that needs a live database is out of scope here and
//! covered by the database-backed tests in `crates/jobgrid-db/tests/`.

mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use helpers::{api_path, auth_token, spawn_app};
use jobgrid_storage::UploadFolder;
use serde_json::{json, Value};

#[tokio::test]
async fn liveness_endpoint_reports_alive() {
    let app = spawn_app().await;

    let response = app.server.get("/live").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn readiness_fails_without_a_database() {
    let app = spawn_app().await;

    let response = app.server.get("/ready").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "not_ready");
}

#[tokio::test]
async fn security_headers_are_applied() {
    let app = spawn_app().await;

    let response = app.server.get("/live").await;

    let headers = response.headers();
    assert_eq!(
        headers.get("x-content-type-options").map(|v| v.as_bytes()),
        Some(b"nosniff".as_ref())
    );
    assert_eq!(
        headers.get("x-frame-options").map(|v| v.as_bytes()),
        Some(b"DENY".as_ref())
    );
    assert!(headers.contains_key("referrer-policy"));
    // HSTS is only set in production.
    assert!(!headers.contains_key("strict-transport-security"));
}

#[tokio::test]
async fn request_id_is_echoed_back() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/live")
        .add_header("x-request-id", "test-trace-42")
        .await;
    assert_eq!(
        response.headers().get("x-request-id").map(|v| v.as_bytes()),
        Some(b"test-trace-42".as_ref())
    );

    // Without an incoming id one is generated.
    let response = app.server.get("/live").await;
    let generated = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    assert!(matches!(generated, Some(ref id) if !id.is_empty()));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = spawn_app().await;

    let response = app.server.get("/api/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"]["/api/v1/auth/register"].is_object());
    assert!(body["paths"]["/api/v1/saved-jobs"].is_object());
    assert!(body["paths"]["/api/v1/jobs/search"].is_object());
    assert_eq!(
        body["components"]["securitySchemes"]["bearer_auth"]["scheme"],
        "bearer"
    );
}

#[tokio::test]
async fn docs_ui_is_served() {
    let app = spawn_app().await;

    let response = app.server.get("/docs").await;

    response.assert_status_ok();
    assert!(response.text().contains("rapi-doc"));
}

#[tokio::test]
async fn onboarding_steps_are_public_and_ordered() {
    let app = spawn_app().await;

    let response = app.server.get(&api_path("/onboarding/steps")).await;

    response.assert_status_ok();
    let steps: Value = response.json();
    let steps = steps.as_array().expect("steps should be an array");
    let keys: Vec<&str> = steps
        .iter()
        .map(|s| s["key"].as_str().expect("key should be a string"))
        .collect();
    assert_eq!(
        keys,
        vec![
            "company-profile",
            "company-branding",
            "first-job-post",
            "review-and-publish"
        ]
    );
    for step in steps {
        assert!(!step["title"].as_str().unwrap_or_default().is_empty());
        assert!(!step["description"].as_str().unwrap_or_default().is_empty());
        assert!(!step["component"].as_str().unwrap_or_default().is_empty());
    }
}

#[tokio::test]
async fn register_rejects_mismatched_passwords() {
    let app = spawn_app().await;

    let response = app
        .server
        .post(&api_path("/auth/register"))
        .json(&json!({
            "email": "user@example.com",
            "name": "Test User",
            "password": "password123",
            "confirmPassword": "different123",
            "accountType": "user"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["fields"]["confirm_password"],
        json!(["Passwords do not match"])
    );
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = spawn_app().await;

    let response = app
        .server
        .post(&api_path("/auth/register"))
        .json(&json!({
            "email": "not-an-email",
            "name": "Test User",
            "password": "password123",
            "confirmPassword": "password123",
            "accountType": "user"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["fields"]["email"], json!(["Invalid email address"]));
}

#[tokio::test]
async fn register_rejects_unknown_account_type() {
    let app = spawn_app().await;

    let response = app
        .server
        .post(&api_path("/auth/register"))
        .json(&json!({
            "email": "user@example.com",
            "name": "Test User",
            "password": "password123",
            "confirmPassword": "password123",
            "accountType": "admin"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["fields"]["account_type"],
        json!(["Account type must be either 'user' or 'employer'"])
    );
}

#[tokio::test]
async fn login_requires_a_password() {
    let app = spawn_app().await;

    let response = app
        .server
        .post(&api_path("/auth/login"))
        .json(&json!({
            "email": "user@example.com",
            "password": ""
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["fields"]["password"], json!(["Password is required"]));
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = spawn_app().await;

    let response = app.server.get(&api_path("/saved-jobs")).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["error"], "Missing authorization header");
}

#[tokio::test]
async fn garbage_tokens_are_rejected() {
    let app = spawn_app().await;

    let response = app
        .server
        .get(&api_path("/saved-jobs"))
        .authorization_bearer("definitely-not-a-jwt")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn valid_token_reaches_request_validation() {
    let app = spawn_app().await;

    let response = app
        .server
        .post(&api_path("/saved-jobs"))
        .authorization_bearer(&auth_token(1))
        .json(&json!({ "jobId": 0 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["fields"]["job_id"],
        json!(["Job id must be a positive number"])
    );
}

#[tokio::test]
async fn unknown_upload_folder_is_rejected() {
    let app = spawn_app().await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"%PDF-1.4 test".to_vec())
            .file_name("resume.pdf")
            .mime_type("application/pdf"),
    );
    let response = app
        .server
        .post(&api_path("/uploads/videos"))
        .authorization_bearer(&auth_token(1))
        .multipart(form)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["error"], "Invalid upload folder: videos");
}

#[tokio::test]
async fn disallowed_extension_is_rejected() {
    let app = spawn_app().await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"MZ fake binary".to_vec())
            .file_name("resume.exe")
            .mime_type("application/pdf"),
    );
    let response = app
        .server
        .post(&api_path("/uploads/resumes"))
        .authorization_bearer(&auth_token(1))
        .multipart(form)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "File extension 'exe' is not allowed");
}

#[tokio::test]
async fn search_reports_engine_unavailable() {
    let app = spawn_app().await;

    let response = app.server.get(&api_path("/jobs/search?q=rust")).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body: Value = response.json();
    assert_eq!(body["code"], "SEARCH_ENGINE_ERROR");
    assert_eq!(body["error"], "Job search is temporarily unavailable");
}

#[tokio::test]
async fn oversized_bodies_are_rejected_up_front() {
    let app = spawn_app().await;

    // Over the 5 MiB document limit plus multipart headroom.
    let oversized = "a".repeat(6 * 1024 * 1024);
    let response = app
        .server
        .post(&api_path("/auth/register"))
        .text(oversized)
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn stored_files_are_served_publicly() {
    let app = spawn_app().await;

    let data = b"%PDF-1.4 fake resume".to_vec();
    app.storage
        .upload(
            UploadFolder::Resumes,
            "abc-resume.pdf",
            "resume.pdf",
            "application/pdf",
            data.clone(),
        )
        .await
        .expect("seeding the storage backend failed");

    // No bearer token: the file route is public.
    let response = app.server.get("/files/resumes/abc-resume.pdf").await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(
        headers.get("content-type").map(|v| v.as_bytes()),
        Some(b"application/pdf".as_ref())
    );
    assert_eq!(
        headers.get("cache-control").map(|v| v.as_bytes()),
        Some(b"private, max-age=300".as_ref())
    );
    assert_eq!(response.as_bytes().as_ref(), data.as_slice());
}

#[tokio::test]
async fn missing_files_return_not_found() {
    let app = spawn_app().await;

    let response = app.server.get("/files/resumes/no-such-object.pdf").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");

    let response = app.server.get("/files/videos/clip.mp4").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid upload folder: videos");
}
