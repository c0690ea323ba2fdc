//! Integration tests for the PostgreSQL repository
//!
//! These tests need a reachable database in `DATABASE_URL` and are ignored by
//! default. Run them with `cargo test -- --ignored`.

use chrono::{TimeZone, Utc};
use expense_tracker_api::domain::errors::RepositoryError;
use expense_tracker_api::domain::expense::{ExpensePatch, NewExpense};
use expense_tracker_api::domain::repositories::ExpenseRepository;
use expense_tracker_api::infrastructure::repositories::PostgresExpenseRepository;
use sqlx::PgPool;

/// Set up test database connection pool with the schema applied
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

fn new_expense(title: &str, amount: f64) -> NewExpense {
    NewExpense {
        title: title.to_string(),
        description: "integration test".to_string(),
        category: "Food".to_string(),
        amount,
        date: Utc.with_ymd_and_hms(2025, 1, 17, 23, 51, 0).unwrap(),
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_and_find_by_id() {
    let pool = setup_test_db().await;
    let repo = PostgresExpenseRepository::new(pool);

    let created = repo
        .create(new_expense("Lunch", 10.0))
        .await
        .expect("Failed to create expense");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to find expense");

    assert_eq!(found, created, "Stored expense should match returned one");
    assert_eq!(found.date, Utc.with_ymd_and_hms(2025, 1, 17, 23, 51, 0).unwrap());

    repo.delete(created.id).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_create_assigns_distinct_ids() {
    let pool = setup_test_db().await;
    let repo = PostgresExpenseRepository::new(pool);

    let first = repo.create(new_expense("A", 1.0)).await.expect("create A");
    let second = repo.create(new_expense("B", 2.0)).await.expect("create B");

    assert_ne!(first.id, second.id, "Ids should be unique");

    let all = repo.find_all().await.expect("Failed to list expenses");
    assert!(all.iter().any(|e| e.id == first.id));
    assert!(all.iter().any(|e| e.id == second.id));

    repo.delete(first.id).await.expect("Failed to clean up");
    repo.delete(second.id).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_merges_present_fields_only() {
    let pool = setup_test_db().await;
    let repo = PostgresExpenseRepository::new(pool);

    let created = repo
        .create(new_expense("Lunch", 10.0))
        .await
        .expect("Failed to create expense");

    let patch = ExpensePatch {
        amount: Some(15.0),
        description: Some(String::new()),
        ..Default::default()
    };
    let updated = repo
        .update(created.id, patch)
        .await
        .expect("Failed to update expense");

    assert_eq!(updated.title, "Lunch");
    assert_eq!(updated.category, "Food");
    assert_eq!(updated.amount, 15.0);
    assert_eq!(updated.description, "");
    assert_eq!(updated.date, created.date);

    repo.delete(created.id).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_missing_id_is_not_found() {
    let pool = setup_test_db().await;
    let repo = PostgresExpenseRepository::new(pool);

    let missing = i64::MAX;

    assert_eq!(
        repo.find_by_id(missing).await,
        Err(RepositoryError::NotFound(missing))
    );
    assert_eq!(
        repo.update(missing, ExpensePatch::default()).await,
        Err(RepositoryError::NotFound(missing))
    );
    assert_eq!(
        repo.delete(missing).await,
        Err(RepositoryError::NotFound(missing))
    );
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_delete_removes_row() {
    let pool = setup_test_db().await;
    let repo = PostgresExpenseRepository::new(pool);

    let created = repo
        .create(new_expense("To delete", 5.0))
        .await
        .expect("Failed to create expense");

    repo.delete(created.id).await.expect("Failed to delete expense");

    assert_eq!(
        repo.find_by_id(created.id).await,
        Err(RepositoryError::NotFound(created.id))
    );
}
