use std::sync::Arc;

use crate::domain::repositories::ExpenseRepository;

/// Shared state handed to every handler
///
/// Built once at startup; the repository handle is safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub expenses: Arc<dyn ExpenseRepository>,
}

impl AppState {
    pub fn new(expenses: Arc<dyn ExpenseRepository>) -> Self {
        Self { expenses }
    }
}
