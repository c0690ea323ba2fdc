// Domain layer module exports
// Follows Hexagonal Architecture
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod expense;
pub mod repositories;
