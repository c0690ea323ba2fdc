use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};

use crate::api::errors::{ApiError, EXPENSE_NOT_FOUND};
use crate::domain::expense::ExpenseId;

/// Expense id taken from the `:id` path segment
///
/// A segment that is not an integer cannot name a stored expense, so it is
/// rejected as not found rather than as a bad request.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(ExpensePath(id): ExpensePath) -> String {
///     format!("expense {}", id)
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExpensePath(pub ExpenseId);

#[async_trait]
impl<S> FromRequestParts<S> for ExpensePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found(EXPENSE_NOT_FOUND))?;

        raw.parse()
            .map(ExpensePath)
            .map_err(|_| ApiError::not_found(EXPENSE_NOT_FOUND))
    }
}

/// JSON body extractor whose rejections are always 400 Bad Request
///
/// axum's own `Json` answers 415 or 422 for some failures; clients of this
/// API only distinguish "could not decode".
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}
