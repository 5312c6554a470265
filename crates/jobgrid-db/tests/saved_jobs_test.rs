//! Database-backed tests for the saved-jobs repository.
//!
//! Each test gets its own database provisioned by `#[sqlx::test]` with the
//! workspace migrations applied. Run from the workspace root with a reachable
//! Postgres: `DATABASE_URL=postgres://... cargo test -p jobgrid-db`.

use jobgrid_core::constants::{SAVED_JOBS_LIMIT, SAVED_JOBS_LIMIT_MESSAGE};
use jobgrid_core::AppError;
use jobgrid_db::SavedJobRepository;
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id")
        .bind(email)
        .bind("$2b$04$test-hash-never-verified")
        .fetch_one(pool)
        .await
        .expect("Failed to seed user")
}

/// Bulk-insert bookmarks for job ids `1..=count`, bypassing the repository.
async fn seed_saved_jobs(pool: &PgPool, user_id: i64, count: i64) {
    sqlx::query(
        "INSERT INTO saved_jobs (user_id, job_id) \
         SELECT $1, g FROM generate_series(1, $2) AS g",
    )
    .bind(user_id)
    .bind(count)
    .execute(pool)
    .await
    .expect("Failed to seed saved jobs");
}

#[sqlx::test(migrations = "../../migrations")]
async fn save_below_the_limit_inserts_one_row(pool: PgPool) {
    let repo = SavedJobRepository::new(pool.clone());
    let user_id = seed_user(&pool, "below-limit@example.com").await;
    seed_saved_jobs(&pool, user_id, SAVED_JOBS_LIMIT - 1).await;

    let saved = repo
        .save(user_id, 9001)
        .await
        .expect("Save below the limit must succeed");

    assert_eq!(saved.user_id, user_id);
    assert_eq!(saved.job_id, 9001);
    assert_eq!(repo.count(user_id).await.unwrap(), SAVED_JOBS_LIMIT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn save_at_the_limit_fails_and_does_not_insert(pool: PgPool) {
    let repo = SavedJobRepository::new(pool.clone());
    let user_id = seed_user(&pool, "at-limit@example.com").await;
    seed_saved_jobs(&pool, user_id, SAVED_JOBS_LIMIT).await;

    let err = repo
        .save(user_id, 9001)
        .await
        .expect_err("Save at the limit must fail");

    assert!(matches!(err, AppError::SavedJobsLimitReached));
    assert_eq!(err.to_string(), SAVED_JOBS_LIMIT_MESSAGE);
    assert_eq!(repo.count(user_id).await.unwrap(), SAVED_JOBS_LIMIT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn concurrent_saves_at_limit_minus_one_admit_exactly_one(pool: PgPool) {
    let repo = SavedJobRepository::new(pool.clone());
    let user_id = seed_user(&pool, "race@example.com").await;
    seed_saved_jobs(&pool, user_id, SAVED_JOBS_LIMIT - 1).await;

    // The row lock on the user serializes these; whichever runs second sees
    // the committed count at the limit and fails.
    let (first, second) = tokio::join!(repo.save(user_id, 9001), repo.save(user_id, 9002));

    assert_eq!(
        first.is_ok() as u8 + second.is_ok() as u8,
        1,
        "exactly one concurrent save must win"
    );
    for result in [first, second] {
        if let Err(err) = result {
            assert!(matches!(err, AppError::SavedJobsLimitReached));
        }
    }
    assert_eq!(repo.count(user_id).await.unwrap(), SAVED_JOBS_LIMIT);
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_save_is_a_conflict(pool: PgPool) {
    let repo = SavedJobRepository::new(pool.clone());
    let user_id = seed_user(&pool, "duplicate@example.com").await;

    repo.save(user_id, 42).await.expect("First save must succeed");
    let err = repo
        .save(user_id, 42)
        .await
        .expect_err("Second save of the same job must fail");

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "Conflict: Job is already saved");
    assert_eq!(repo.count(user_id).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn save_for_unknown_user_is_not_found(pool: PgPool) {
    let repo = SavedJobRepository::new(pool);

    let err = repo
        .save(123_456, 42)
        .await
        .expect_err("Save for a missing user must fail");

    assert!(matches!(err, AppError::NotFound(_)));
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_removes_the_bookmark(pool: PgPool) {
    let repo = SavedJobRepository::new(pool.clone());
    let user_id = seed_user(&pool, "unsave@example.com").await;
    repo.save(user_id, 42).await.expect("Save must succeed");

    repo.delete(user_id, 42).await.expect("Delete must succeed");

    assert_eq!(repo.count(user_id).await.unwrap(), 0);
    // A second save of the same job is allowed again.
    repo.save(user_id, 42).await.expect("Re-save must succeed");
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_of_an_absent_bookmark_is_not_found(pool: PgPool) {
    let repo = SavedJobRepository::new(pool.clone());
    let user_id = seed_user(&pool, "absent@example.com").await;

    let err = repo
        .delete(user_id, 42)
        .await
        .expect_err("Delete of an absent bookmark must fail");

    assert!(matches!(err, AppError::NotFound(_)));
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_returns_newest_first(pool: PgPool) {
    let repo = SavedJobRepository::new(pool.clone());
    let user_id = seed_user(&pool, "list@example.com").await;

    // Same created_at is possible within one test run; the job_id tiebreaker
    // keeps the order deterministic.
    for job_id in [10, 20, 30] {
        repo.save(user_id, job_id).await.expect("Save must succeed");
    }

    let jobs = repo.list(user_id).await.expect("List must succeed");
    let ids: Vec<i64> = jobs.iter().map(|j| j.job_id).collect();

    assert_eq!(ids, vec![30, 20, 10]);
}
