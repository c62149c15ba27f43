//! HTTP-level tests for the profile endpoints.
//!
//! Drive the real router over the in-memory store: JWT authentication, the
//! onboarding rejection contract, and the get/edit endpoints.

use std::sync::Arc;

use axum::body::Body;
use http_body_util::BodyExt;
use hyper::{Request, StatusCode};
use jsonwebtoken::{encode, EncodingKey, Header};
use reel_core::memory::MemoryProfileStore;
use reel_core::policy::WordBlacklist;
use reel_server::middleware::jwt::JwtConfig;
use reel_server::router::build_router;
use reel_server::startup::build_service;
use serde::Serialize;
use serde_json::{json, Value};
use tower::ServiceExt;

// ── Test JWT helpers ───────────────────────────────────────────

const TEST_JWT_SECRET: &[u8] = b"test-secret-for-http-tests";

#[derive(Debug, Serialize)]
struct TestClaims {
    sub: String,
    exp: u64,
}

fn make_jwt(user_id: &str) -> String {
    let claims = TestClaims {
        sub: user_id.into(),
        // 2100-01-01
        exp: 4_102_444_800,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("failed to encode test JWT")
}

// ── Test app builder ───────────────────────────────────────────

fn build_test_app() -> axum::Router {
    let store = Arc::new(MemoryProfileStore::new());
    let service = build_service(store, Arc::new(WordBlacklist::new(["badword"])));
    build_router(service, JwtConfig::from_secret(TEST_JWT_SECRET))
}

fn valid_body() -> Value {
    json!({
        "username": "jane_doe",
        "name": "Jane Doe",
        "avatar": "/avatars/jane.png",
        "bio": "hi",
        "interests": ["Music", "Welding"]
    })
}

fn onboard(user: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/profiles/onboarding")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", make_jwt(user)))
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_me(user: &str) -> Request<Body> {
    Request::builder()
        .uri("/profiles/me")
        .header("authorization", format!("Bearer {}", make_jwt(user)))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(
        |_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    )
}

async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, body_json(resp).await)
}

// ── Auth ────────────────────────────────────────────────────────

#[tokio::test]
async fn health_needs_no_auth() {
    let app = build_test_app();
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn profile_routes_require_token() {
    let app = build_test_app();
    let req = Request::builder()
        .uri("/profiles/me")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let app = build_test_app();
    let forged = encode(
        &Header::default(),
        &TestClaims {
            sub: "mallory".into(),
            exp: 4_102_444_800,
        },
        &EncodingKey::from_secret(b"some-other-secret"),
    )
    .unwrap();
    let req = Request::builder()
        .uri("/profiles/me")
        .header("authorization", format!("Bearer {forged}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ── Onboarding ──────────────────────────────────────────────────

#[tokio::test]
async fn onboarding_then_get_me() {
    let app = build_test_app();

    let (status, body) = send(&app, onboard("user-1", &valid_body())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Onboarding completed.");

    let (status, body) = send(&app, get_me("user-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "user-1");
    assert_eq!(body["username"], "jane_doe");
    assert_eq!(body["interests"], json!(["Music"]));
    assert!(body.get("_id").is_none());
    assert!(body.get("profile_key").is_none());
}

#[tokio::test]
async fn get_me_before_onboarding() {
    let app = build_test_app();
    let (status, body) = send(&app, get_me("user-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "COMPLETE_ONBOARDING");
    assert_eq!(body["message"], "Onboarding not completed.");
}

#[tokio::test]
async fn short_username_rejected() {
    let app = build_test_app();
    let mut body = valid_body();
    body["username"] = json!("ab");
    let (status, body) = send(&app, onboard("user-1", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Username must be between 3 and 50 characters long."
    );
}

#[tokio::test]
async fn uppercase_username_rejected() {
    let app = build_test_app();
    let mut body = valid_body();
    body["username"] = json!("John_Doe");
    let (status, body) = send(&app, onboard("user-1", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_CHARSET");
    assert_eq!(
        body["message"],
        "Username must include only lower-case letters, numbers, _ or ."
    );
}

#[tokio::test]
async fn missing_username_rejected() {
    let app = build_test_app();
    let (status, body) = send(&app, onboard("user-1", &json!({ "name": "Jane Doe" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username is required.");
}

#[tokio::test]
async fn blacklisted_name_rejected() {
    let app = build_test_app();
    let mut body = valid_body();
    body["name"] = json!("Mr Badword");
    let (status, body) = send(&app, onboard("user-1", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BLACKLISTED_WORD");
    assert_eq!(body["message"], "Full name includes a blacklisted word.");
}

#[tokio::test]
async fn taken_username_rejected() {
    let app = build_test_app();
    send(&app, onboard("user-1", &valid_body())).await;
    let (status, body) = send(&app, onboard("user-2", &valid_body())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already taken.");
}

#[tokio::test]
async fn second_onboarding_conflicts() {
    let app = build_test_app();
    send(&app, onboard("user-1", &valid_body())).await;

    let mut fresh = valid_body();
    fresh["username"] = json!("jane.again");
    let (status, body) = send(&app, onboard("user-1", &fresh)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "CONBOARDING_ALREADY_COMPLETED");
    assert_eq!(body["message"], "Onboarding already completed.");
}

#[tokio::test]
async fn repeated_invalid_submission_gives_same_rejection() {
    let app = build_test_app();
    let mut body = valid_body();
    body["interests"] = json!("Music");
    let first = send(&app, onboard("user-1", &body)).await;
    let second = send(&app, onboard("user-1", &body)).await;
    assert_eq!(first, second);
    assert_eq!(first.1["message"], "Interests must be an array.");
}

#[tokio::test]
async fn scalar_body_is_malformed() {
    let app = build_test_app();
    let (status, body) = send(&app, onboard("user-1", &json!("just a string"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MALFORMED_PAYLOAD");
}

#[tokio::test]
async fn array_body_reads_as_empty_submission() {
    let app = build_test_app();
    let positional = json!(["jane_doe", "Jane Doe", null, "bio", ["Music"]]);
    let (status, body) = send(&app, onboard("user-1", &positional)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "MISSING_FIELD");
    assert_eq!(body["message"], "Username is required.");

    let (status, _) = send(&app, get_me("user-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wide_characters_count_twice_toward_name_length() {
    let app = build_test_app();
    let mut body = valid_body();
    body["name"] = json!("😀😀");
    let (status, _) = send(&app, onboard("user-1", &body)).await;
    assert_eq!(status, StatusCode::OK);

    let mut body = valid_body();
    body["username"] = json!("other_user");
    body["name"] = json!("😀".repeat(26));
    let (status, body) = send(&app, onboard("user-2", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_LENGTH");
}

#[tokio::test]
async fn nul_in_bio_is_a_rejection_not_a_fault() {
    let app = build_test_app();
    let mut body = valid_body();
    body["bio"] = json!("a\0b");
    let (status, body) = send(&app, onboard("user-1", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_CHARACTERS");
    assert_eq!(body["message"], "Bio contains invalid characters.");
}

// ── Edit ────────────────────────────────────────────────────────

#[tokio::test]
async fn edit_me_is_not_implemented() {
    let app = build_test_app();
    send(&app, onboard("user-1", &valid_body())).await;

    let req = Request::builder()
        .method("PATCH")
        .uri("/profiles/me")
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", make_jwt("user-1")))
        .body(Body::from(json!({ "bio": "changed" }).to_string()))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "NOT_IMPLEMENTED");
    assert_eq!(body["message"], "Not implemented.");

    // Profile is untouched.
    let (_, body) = send(&app, get_me("user-1")).await;
    assert_eq!(body["bio"], "hi");
}
