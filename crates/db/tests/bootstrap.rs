//! Schema bootstrap tests: migrations apply cleanly, the health check
//! passes, and the touch trigger maintains `updated_at`.

use sqlx::PgPool;

/// Migrate, health-check, and verify every table the app relies on exists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn full_bootstrap(pool: PgPool) {
    launchlist_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "user_sessions",
        "projects",
        "wallets",
        "whitelist_applications",
        "collaborations",
        "activity_log",
    ];

    for table in tables {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = 'public' AND table_name = $1
            )",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap_or_else(|e| panic!("{table} lookup failed: {e}"));
        assert!(exists.0, "table {table} is missing after migrations");
    }
}

/// `set_updated_at` fires on UPDATE and bumps the timestamp.
#[sqlx::test(migrations = "../../db/migrations")]
async fn updated_at_trigger_fires(pool: PgPool) {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ('trigger@example.com', 'x')
         RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    // Separate transaction, so NOW() moves forward.
    sqlx::query("SELECT pg_sleep(0.01)").execute(&pool).await.unwrap();

    let (created_at, updated_at): (
        chrono::DateTime<chrono::Utc>,
        chrono::DateTime<chrono::Utc>,
    ) = sqlx::query_as(
        "UPDATE users SET display_name = 'Touched' WHERE id = $1
         RETURNING created_at, updated_at",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert!(
        updated_at > created_at,
        "expected updated_at ({updated_at}) after created_at ({created_at})"
    );
}
