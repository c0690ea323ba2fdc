use std::sync::Arc;

use expense_tracker_api::api::routes::create_router;
use expense_tracker_api::api::state::AppState;
use expense_tracker_api::config::{Config, StorageBackend};
use expense_tracker_api::domain::repositories::ExpenseRepository;
use expense_tracker_api::infrastructure::database;
use expense_tracker_api::infrastructure::repositories::{
    InMemoryExpenseRepository, PostgresExpenseRepository,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration (.env first, then process environment)
    let config = Config::from_env()?;

    let expenses: Arc<dyn ExpenseRepository> = match config.storage {
        StorageBackend::Postgres => {
            let pool = database::connect(&config.database).await?;
            Arc::new(PostgresExpenseRepository::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, expenses will not survive a restart");
            Arc::new(InMemoryExpenseRepository::new())
        }
    };

    let app = create_router(AppState::new(expenses));

    // Start server
    tracing::info!("Server listening on {}", config.server_addr);

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
