//! HTTP-level integration tests for the auth API endpoints.
//!
//! Tests cover registration, login, token refresh with rotation, logout,
//! the profile endpoint, and account lockout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registering with a valid email and password returns 201 with tokens
/// and the new user's info.
#[sqlx::test(migrations = "../../db/migrations")]
async fn register_creates_account_and_logs_in(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({
        "email": "founder@test.com",
        "password": "strong_password_123!",
        "display_name": "Founder"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert!(json["refresh_token"].is_string(), "response must contain refresh_token");
    assert!(json["expires_in"].is_number(), "response must contain expires_in");
    assert_eq!(json["user"]["email"], "founder@test.com");
    assert_eq!(json["user"]["display_name"], "Founder");
}

/// Registration lowercases the email; login with the lowercase form works.
#[sqlx::test(migrations = "../../db/migrations")]
async fn register_normalizes_email_to_lowercase(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({
        "email": "Mixed.Case@Test.COM",
        "password": "strong_password_123!"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "mixed.case@test.com");

    let app = common::build_test_app(pool).await;
    let token = common::login_for_token(app, "mixed.case@test.com", "strong_password_123!").await;
    assert!(!token.is_empty());
}

/// An email without an '@' is rejected with 400 VALIDATION_ERROR.
#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({
        "email": "not-an-email",
        "password": "strong_password_123!"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// A password below the minimum length is rejected with 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({
        "email": "shorty@test.com",
        "password": "short"
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(
        json["error"].as_str().unwrap().contains("at least 8"),
        "error should state the minimum length"
    );
}

/// Registering the same email twice returns 409 CONFLICT.
#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_duplicate_email(pool: PgPool) {
    let body = serde_json::json!({
        "email": "taken@test.com",
        "password": "strong_password_123!"
    });

    let app = common::build_test_app(pool.clone()).await;
    let first = post_json(app, "/api/v1/auth/register", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool).await;
    let second = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with access_token, refresh_token, and user info.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_success(pool: PgPool) {
    let (user, password) = common::create_test_user(&pool, "loginuser").await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "loginuser@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string(), "response must contain access_token");
    assert!(json["refresh_token"].is_string(), "response must contain refresh_token");
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "loginuser@test.com");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_wrong_password(pool: PgPool) {
    let (_user, _password) = common::create_test_user(&pool, "wrongpw").await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent email returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../../db/migrations")]
async fn login_inactive_user(pool: PgPool) {
    let (user, password) = common::create_test_user(&pool, "inactive").await;
    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "inactive@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Refresh and logout
// ---------------------------------------------------------------------------

/// A valid refresh token returns new tokens, and the refresh token rotates.
#[sqlx::test(migrations = "../../db/migrations")]
async fn token_refresh_rotates(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "refresher").await;

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "email": "refresher@test.com", "password": password });
    let login_resp = post_json(app, "/api/v1/auth/login", body).await;
    let login_json = body_json(login_resp).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string(), "refreshed response must contain access_token");
    // Token rotation: the new refresh token must differ from the original.
    assert_ne!(
        json["refresh_token"].as_str().unwrap(),
        refresh_token,
        "refresh token must rotate on use"
    );
}

/// A refresh token is single-use: replaying it after rotation returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_token_is_single_use(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "replayer").await;

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "email": "replayer@test.com", "password": password });
    let login_resp = post_json(app, "/api/v1/auth/login", body).await;
    let login_json = body_json(login_resp).await;
    let refresh_token = login_json["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone()).await;
    let first = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let app = common::build_test_app(pool).await;
    let second = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
}

/// Refreshing with a garbage token returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_with_invalid_token(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes all sessions and returns 204; the old refresh token dies.
#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_sessions(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "logoutuser").await;

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "email": "logoutuser@test.com", "password": password });
    let login_resp = post_json(app, "/api/v1/auth/login", body).await;
    let login_json = body_json(login_resp).await;
    let access_token = login_json["access_token"].as_str().unwrap();
    let refresh_token = login_json["refresh_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let response = post_json_auth(
        app,
        "/api/v1/auth/logout",
        serde_json::json!({}),
        access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The refresh token from before logout must no longer work.
    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /auth/me returns the authenticated user's profile.
#[sqlx::test(migrations = "../../db/migrations")]
async fn me_returns_profile(pool: PgPool) {
    let (user, password) = common::create_test_user(&pool, "profileuser").await;

    let app = common::build_test_app(pool.clone()).await;
    let token = common::login_for_token(app, "profileuser@test.com", &password).await;

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], user.id);
    assert_eq!(json["data"]["email"], "profileuser@test.com");
    assert_eq!(json["data"]["display_name"], "profileuser");
    assert!(json["data"].get("password_hash").is_none(), "hash must never leak");
}

/// GET /auth/me without a token returns 401.
#[sqlx::test(migrations = "../../db/migrations")]
async fn me_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = common::get(app, "/api/v1/auth/me").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Account lockout
// ---------------------------------------------------------------------------

/// After 5 failed login attempts the account is locked and further attempts
/// return 403 even with the right password.
#[sqlx::test(migrations = "../../db/migrations")]
async fn account_lockout_after_failed_attempts(pool: PgPool) {
    let (_user, password) = common::create_test_user(&pool, "lockme").await;

    // Fail login 5 times with the wrong password to trigger the lock.
    for _ in 0..5 {
        let app = common::build_test_app(pool.clone()).await;
        let body = serde_json::json!({ "email": "lockme@test.com", "password": "wrong_pass" });
        let response = post_json(app, "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // The 6th attempt, even with the correct password, should return 403.
    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({ "email": "lockme@test.com", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    let error_msg = json["error"].as_str().unwrap_or("");
    assert!(
        error_msg.contains("locked"),
        "error message should mention the account is locked, got: {error_msg}"
    );
}
