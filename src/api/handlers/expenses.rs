use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::extractors::{ExpensePath, JsonBody};
use crate::api::state::AppState;
use crate::domain::expense::{Expense, ExpenseDate, ExpenseId, ExpensePatch, NewExpense};

/// Request body for creating an expense
///
/// Every field may be omitted or `null`, which stores the empty value; an
/// `id` sent by the client is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateExpenseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

impl CreateExpenseRequest {
    /// Without a date the expense is stamped with the current server time
    fn into_new_expense(self) -> Result<NewExpense, ApiError> {
        let date = match self.date.as_deref() {
            Some(raw) => ExpenseDate::parse(raw)?,
            None => ExpenseDate::now(),
        };

        Ok(NewExpense {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            amount: self.amount.unwrap_or_default(),
            date: date.into_inner(),
        })
    }
}

/// Request body for updating an expense
///
/// Absent or `null` fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateExpenseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<String>,
}

impl TryFrom<UpdateExpenseRequest> for ExpensePatch {
    type Error = ApiError;

    fn try_from(req: UpdateExpenseRequest) -> Result<Self, Self::Error> {
        let date = req
            .date
            .as_deref()
            .map(ExpenseDate::parse)
            .transpose()?
            .map(ExpenseDate::into_inner);

        Ok(ExpensePatch {
            title: req.title,
            description: req.description,
            category: req.category,
            amount: req.amount,
            date,
        })
    }
}

/// Expense as returned to clients
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: ExpenseId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            title: expense.title,
            description: expense.description,
            category: expense.category,
            amount: expense.amount,
            date: expense.date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create a new expense
///
/// POST /expenses
pub async fn create_expense(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<ExpenseResponse>), ApiError> {
    let new_expense = req.into_new_expense()?;

    let expense = state
        .expenses
        .create(new_expense)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to create expense"))?;

    tracing::info!(id = expense.id, "expense created");
    Ok((StatusCode::CREATED, Json(ExpenseResponse::from(expense))))
}

/// List all expenses
///
/// GET /expenses
pub async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let expenses = state
        .expenses
        .find_all()
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to list expenses"))?;

    Ok(Json(expenses.into_iter().map(ExpenseResponse::from).collect()))
}

/// Get an expense by ID
///
/// GET /expenses/:id
pub async fn get_expense(
    State(state): State<AppState>,
    ExpensePath(id): ExpensePath,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let expense = state
        .expenses
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to fetch expense"))?;

    Ok(Json(ExpenseResponse::from(expense)))
}

/// Update the fields present in the body
///
/// PUT /expenses/:id
///
/// A missing expense answers 404 even when the body is also invalid.
pub async fn update_expense(
    State(state): State<AppState>,
    ExpensePath(id): ExpensePath,
    body: Result<JsonBody<UpdateExpenseRequest>, ApiError>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let existing = state
        .expenses
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to update expense"))?;

    let JsonBody(req) = body?;
    let patch = ExpensePatch::try_from(req)?;
    if patch.is_empty() {
        return Ok(Json(ExpenseResponse::from(existing)));
    }

    let expense = state
        .expenses
        .update(id, patch)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to update expense"))?;

    tracing::info!(id = id, "expense updated");
    Ok(Json(ExpenseResponse::from(expense)))
}

/// Delete an expense
///
/// DELETE /expenses/:id
pub async fn delete_expense(
    State(state): State<AppState>,
    ExpensePath(id): ExpensePath,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .expenses
        .delete(id)
        .await
        .map_err(|e| ApiError::from_repository(e, "Failed to delete expense"))?;

    tracing::info!(id = id, "expense deleted");
    Ok(Json(MessageResponse {
        message: "Expense deleted".to_string(),
    }))
}
