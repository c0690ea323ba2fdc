use async_trait::async_trait;

use crate::domain::errors::RepositoryResult;
use crate::domain::expense::{Expense, ExpenseId, ExpensePatch, NewExpense};

/// Repository trait for expenses
///
/// Defines the contract for persisting and retrieving expenses.
/// Each operation is atomic for the single row it touches; nothing spans
/// more than one record.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Insert a new expense and return it with its assigned id
    async fn create(&self, expense: NewExpense) -> RepositoryResult<Expense>;

    /// All stored expenses in id order
    async fn find_all(&self) -> RepositoryResult<Vec<Expense>>;

    /// Find an expense by its id
    async fn find_by_id(&self, id: ExpenseId) -> RepositoryResult<Expense>;

    /// Overwrite the fields present in `patch` and return the stored result
    async fn update(&self, id: ExpenseId, patch: ExpensePatch) -> RepositoryResult<Expense>;

    /// Permanently remove an expense
    async fn delete(&self, id: ExpenseId) -> RepositoryResult<()>;
}
