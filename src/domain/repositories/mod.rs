// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod expense_repository;

pub use expense_repository::ExpenseRepository;
