//! Integration tests for the user and session repositories backing
//! authentication.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use launchlist_db::models::session::CreateSession;
use launchlist_db::models::user::CreateUser;
use launchlist_db::repositories::{SessionRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            display_name: None,
        },
    )
    .await
    .unwrap()
    .id
}

fn new_session(user_id: i64, hash: &str, hours_from_now: i64) -> CreateSession {
    CreateSession {
        user_id,
        refresh_token_hash: hash.to_string(),
        expires_at: Utc::now() + Duration::hours(hours_from_now),
        user_agent: Some("integration-test".to_string()),
        ip_address: None,
    }
}

// ---------------------------------------------------------------------------
// Test: users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn email_lookup_is_plain_equality(pool: PgPool) {
    seed_user(&pool, "owner@example.com").await;

    let found = UserRepo::find_by_email(&pool, "owner@example.com")
        .await
        .unwrap();
    assert!(found.is_some());

    // Callers lowercase before storing and querying, so a cased lookup
    // intentionally misses.
    let cased = UserRepo::find_by_email(&pool, "Owner@Example.com")
        .await
        .unwrap();
    assert!(cased.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_is_rejected(pool: PgPool) {
    seed_user(&pool, "owner@example.com").await;

    let result = UserRepo::create(
        &pool,
        &CreateUser {
            email: "owner@example.com".to_string(),
            password_hash: "other-hash".to_string(),
            display_name: None,
        },
    )
    .await;
    match result {
        Err(sqlx::Error::Database(e)) => {
            assert_eq!(e.code().as_deref(), Some("23505"));
            assert_eq!(e.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_logins_accumulate_and_reset(pool: PgPool) {
    let user_id = seed_user(&pool, "owner@example.com").await;

    UserRepo::increment_failed_login(&pool, user_id).await.unwrap();
    UserRepo::increment_failed_login(&pool, user_id).await.unwrap();
    UserRepo::lock_account(&pool, user_id, Utc::now() + Duration::minutes(15))
        .await
        .unwrap();

    let locked = UserRepo::find_by_id(&pool, user_id).await.unwrap().unwrap();
    assert_eq!(locked.failed_login_count, 2);
    assert!(locked.locked_until.is_some());

    UserRepo::record_successful_login(&pool, user_id).await.unwrap();
    let reset = UserRepo::find_by_id(&pool, user_id).await.unwrap().unwrap();
    assert_eq!(reset.failed_login_count, 0);
    assert!(reset.locked_until.is_none());
    assert!(reset.last_login_at.is_some());
}

// ---------------------------------------------------------------------------
// Test: sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_lookup_skips_expired_and_revoked(pool: PgPool) {
    let user_id = seed_user(&pool, "owner@example.com").await;
    SessionRepo::create(&pool, &new_session(user_id, "hash-live", 24))
        .await
        .unwrap();
    SessionRepo::create(&pool, &new_session(user_id, "hash-expired", -1))
        .await
        .unwrap();
    let revoked = SessionRepo::create(&pool, &new_session(user_id, "hash-revoked", 24))
        .await
        .unwrap();
    SessionRepo::revoke(&pool, revoked.id).await.unwrap();

    let live = SessionRepo::find_by_refresh_token_hash(&pool, "hash-live")
        .await
        .unwrap();
    assert!(live.is_some());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-expired")
        .await
        .unwrap()
        .is_none());
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-revoked")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn revoke_is_a_one_shot(pool: PgPool) {
    let user_id = seed_user(&pool, "owner@example.com").await;
    let session = SessionRepo::create(&pool, &new_session(user_id, "hash", 24))
        .await
        .unwrap();

    assert!(SessionRepo::revoke(&pool, session.id).await.unwrap());
    assert!(!SessionRepo::revoke(&pool, session.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn revoke_all_counts_only_active_sessions(pool: PgPool) {
    let user_id = seed_user(&pool, "owner@example.com").await;
    let other = seed_user(&pool, "other@example.com").await;
    SessionRepo::create(&pool, &new_session(user_id, "hash-a", 24))
        .await
        .unwrap();
    SessionRepo::create(&pool, &new_session(user_id, "hash-b", 24))
        .await
        .unwrap();
    SessionRepo::create(&pool, &new_session(other, "hash-c", 24))
        .await
        .unwrap();

    let revoked = SessionRepo::revoke_all_for_user(&pool, user_id).await.unwrap();
    assert_eq!(revoked, 2);

    // The other user's session is untouched.
    assert!(SessionRepo::find_by_refresh_token_hash(&pool, "hash-c")
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cleanup_removes_expired_and_revoked_rows(pool: PgPool) {
    let user_id = seed_user(&pool, "owner@example.com").await;
    SessionRepo::create(&pool, &new_session(user_id, "hash-live", 24))
        .await
        .unwrap();
    SessionRepo::create(&pool, &new_session(user_id, "hash-expired", -1))
        .await
        .unwrap();
    let revoked = SessionRepo::create(&pool, &new_session(user_id, "hash-revoked", 24))
        .await
        .unwrap();
    SessionRepo::revoke(&pool, revoked.id).await.unwrap();

    let removed = SessionRepo::cleanup_expired(&pool).await.unwrap();
    assert_eq!(removed, 2);

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_sessions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 1);
}
