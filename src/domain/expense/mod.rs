// Expense domain module
// Contains the expense entity, its patch type and date value object

#![allow(clippy::module_inception)]

pub mod expense;
pub mod value_objects;

// Re-export main types for convenience
pub use expense::{Expense, ExpenseId, ExpensePatch, NewExpense};
pub use value_objects::{DateParseError, ExpenseDate};
