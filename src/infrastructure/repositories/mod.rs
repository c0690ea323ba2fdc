// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_expense_repository;
pub mod postgres_expense_repository;

pub use in_memory_expense_repository::InMemoryExpenseRepository;
pub use postgres_expense_repository::PostgresExpenseRepository;
