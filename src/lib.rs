//! Expense Tracker API Library
//!
//! CRUD over a single `expenses` table, exposed as HTTP/JSON. The library
//! holds the domain types, repository implementations and the axum router;
//! the binary wires them together from environment configuration.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
