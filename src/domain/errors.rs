use thiserror::Error;

use crate::domain::expense::ExpenseId;

/// Errors returned by expense repositories
#[derive(Debug, Error, PartialEq)]
pub enum RepositoryError {
    #[error("Expense not found: {0}")]
    NotFound(ExpenseId),

    /// The storage backend failed. The message is for server logs only.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(error: sqlx::Error) -> Self {
        Self::Persistence(error.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
