use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::expense::{Expense, ExpenseId, ExpensePatch, NewExpense};
use crate::domain::repositories::ExpenseRepository;

#[derive(Debug, Default)]
struct Inner {
    last_id: ExpenseId,
    expenses: BTreeMap<ExpenseId, Expense>,
}

/// In-process implementation of ExpenseRepository
///
/// Ids start at 1 and are never reused, even after a delete. Data lives only
/// as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryExpenseRepository {
    inner: RwLock<Inner>,
}

impl InMemoryExpenseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn create(&self, expense: NewExpense) -> RepositoryResult<Expense> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let created = expense.with_id(inner.last_id);
        inner.expenses.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Expense>> {
        let inner = self.inner.read().await;
        Ok(inner.expenses.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ExpenseId) -> RepositoryResult<Expense> {
        let inner = self.inner.read().await;
        inner
            .expenses
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update(&self, id: ExpenseId, patch: ExpensePatch) -> RepositoryResult<Expense> {
        let mut inner = self.inner.write().await;
        let expense = inner
            .expenses
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;

        patch.apply_to(expense);
        Ok(expense.clone())
    }

    async fn delete(&self, id: ExpenseId) -> RepositoryResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .expenses
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
