// API layer module (HTTP adapter over the expense repository)

pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod state;
