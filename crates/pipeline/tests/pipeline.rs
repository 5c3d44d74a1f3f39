//! End-to-end validator and loader tests against a real database.

use assert_matches::assert_matches;
use sqlx::PgPool;

use playlog_core::load::{LoadDirective, LoadMode};
use playlog_core::quality::{Assertion, QualityCheck};
use playlog_pipeline::{load_table, run_quality_checks, PipelineError};

async fn create_fixture(pool: &PgPool) {
    sqlx::query("CREATE TABLE plays (play_id BIGINT, song_id TEXT)")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO plays VALUES (1, 'a'), (2, 'b'), (3, NULL)")
        .execute(pool)
        .await
        .unwrap();
}

fn count_check(name: &str, query: &str, expected: i64, assertion: Assertion) -> QualityCheck {
    QualityCheck::new(name, query, expected, assertion)
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn all_passing_checks_return_every_outcome(pool: PgPool) {
    create_fixture(&pool).await;
    let checks = vec![
        count_check(
            "plays has data",
            "SELECT COUNT(1) FROM plays",
            0,
            Assertion::GreaterThan,
        ),
        count_check(
            "exactly one play lacks a song",
            "SELECT COUNT(1) FROM plays WHERE song_id IS NULL",
            1,
            Assertion::Equals,
        ),
    ];

    let outcomes = run_quality_checks(&pool, &checks).await.unwrap();

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|o| o.success));
}

#[sqlx::test]
async fn single_failure_is_reported_alone_and_all_checks_still_ran(pool: PgPool) {
    create_fixture(&pool).await;
    let checks = vec![
        count_check(
            "plays has data",
            "SELECT COUNT(1) FROM plays",
            0,
            Assertion::GreaterThan,
        ),
        count_check(
            "no play lacks a song",
            "SELECT COUNT(1) FROM plays WHERE song_id IS NULL",
            0,
            Assertion::Equals,
        ),
        count_check(
            "fewer than ten plays",
            "SELECT COUNT(1) FROM plays",
            10,
            Assertion::LessThan,
        ),
    ];

    let err = run_quality_checks(&pool, &checks).await.unwrap_err();

    // Exactly the middle check fails; the later check still executed and
    // does not appear in the failure set.
    assert_matches!(err, PipelineError::QualityChecksFailed { failed } => {
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].check_name, "no play lacks a song");
    });
}

#[sqlx::test]
async fn empty_result_fails_the_check(pool: PgPool) {
    create_fixture(&pool).await;
    let checks = vec![count_check(
        "scalar expected",
        "SELECT play_id FROM plays WHERE play_id > 100",
        0,
        Assertion::Equals,
    )];

    let err = run_quality_checks(&pool, &checks).await.unwrap_err();

    assert_matches!(err, PipelineError::QualityChecksFailed { failed } => {
        assert_eq!(failed.len(), 1);
        assert!(failed[0].message.contains("no rows"));
    });
}

#[sqlx::test]
async fn store_error_aborts_the_pass(pool: PgPool) {
    let checks = vec![count_check(
        "broken query",
        "SELECT COUNT(1) FROM no_such_table",
        0,
        Assertion::Equals,
    )];

    let err = run_quality_checks(&pool, &checks).await.unwrap_err();
    assert_matches!(err, PipelineError::Db(_));
}

// ---------------------------------------------------------------------------
// Loader
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn loader_rejects_hostile_table_names(pool: PgPool) {
    let directive = LoadDirective::new(
        "plays; DROP TABLE plays",
        "SELECT 1",
        LoadMode::Append,
    );
    let err = load_table(&pool, &directive).await.unwrap_err();
    assert_matches!(err, PipelineError::Core(_));
}

#[sqlx::test]
async fn loader_reports_inserted_rows(pool: PgPool) {
    create_fixture(&pool).await;
    sqlx::query("CREATE TABLE play_copy (play_id BIGINT, song_id TEXT)")
        .execute(&pool)
        .await
        .unwrap();

    let directive = LoadDirective::new(
        "play_copy",
        "SELECT play_id, song_id FROM plays",
        LoadMode::Replace,
    );
    let rows = load_table(&pool, &directive).await.unwrap();
    assert_eq!(rows, 3);
}
