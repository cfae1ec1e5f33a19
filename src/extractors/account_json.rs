//! Decode an account body, mapping any decode failure to a generic 400.

use crate::error::{AppError, INVALID_DATA};
use crate::model::AccountInput;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};

/// JSON account body. Unlike `axum::Json`, the `Content-Type` header is not
/// required and every rejection becomes `{"error": "Invalid data"}`.
#[derive(Clone, Debug)]
pub struct AccountJson(pub AccountInput);

#[async_trait]
impl<S> FromRequest<S> for AccountJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "request body unreadable");
            AppError::BadRequest(INVALID_DATA.into())
        })?;
        let input = serde_json::from_slice::<AccountInput>(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "request body is not an account");
            AppError::BadRequest(INVALID_DATA.into())
        })?;
        Ok(AccountJson(input))
    }
}
