use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::expense::{Expense, ExpenseId, ExpensePatch, NewExpense};
use crate::domain::repositories::ExpenseRepository;

/// PostgreSQL implementation of ExpenseRepository
///
/// Every operation is one statement, so it relies on PostgreSQL's row-level
/// atomicity and needs no explicit transaction.
#[derive(Clone)]
pub struct PostgresExpenseRepository {
    pool: PgPool,
}

impl PostgresExpenseRepository {
    /// Creates a new PostgresExpenseRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpenseRepository for PostgresExpenseRepository {
    async fn create(&self, expense: NewExpense) -> RepositoryResult<Expense> {
        let created = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (title, description, category, amount, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, category, amount, date
            "#,
        )
        .bind(&expense.title)
        .bind(&expense.description)
        .bind(&expense.category)
        .bind(expense.amount)
        .bind(expense.date)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = created.id, "expense inserted");
        Ok(created)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Expense>> {
        let expenses = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, title, description, category, amount, date
            FROM expenses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    async fn find_by_id(&self, id: ExpenseId) -> RepositoryResult<Expense> {
        sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, title, description, category, amount, date
            FROM expenses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: ExpenseId, patch: ExpensePatch) -> RepositoryResult<Expense> {
        // COALESCE keeps the stored value for every field the patch leaves out,
        // and RETURNING reads back the row as committed.
        let updated = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expenses SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                amount = COALESCE($5, amount),
                date = COALESCE($6, date)
            WHERE id = $1
            RETURNING id, title, description, category, amount, date
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.category)
        .bind(patch.amount)
        .bind(patch.date)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound(id))?;

        tracing::debug!(id = id, "expense updated");
        Ok(updated)
    }

    async fn delete(&self, id: ExpenseId) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM expenses WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        tracing::debug!(id = id, "expense deleted");
        Ok(())
    }
}
