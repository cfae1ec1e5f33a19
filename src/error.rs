//! Typed errors and HTTP mapping.

use crate::response::{Envelope, ValidationBody};
use crate::service::FieldViolation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Outcome of an account operation below the HTTP layer.
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("invalid account id: '{0}'")]
    InvalidId(String),
    #[error(transparent)]
    Validation(#[from] FieldViolation),
    #[error("account not found")]
    NotFound,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

/// The account operation a handler is serving. Picks the generic 500 message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Account creation failed",
            Operation::List => "Accounts retrieval failed",
            Operation::Get => "Account retrieval failed",
            Operation::Update => "Account update failed",
            Operation::Delete => "Account deletion failed",
        }
    }
}

pub const INVALID_DATA: &str = "Invalid data";
pub const INVALID_ID: &str = "Invalid account ID";
pub const ACCOUNT_NOT_FOUND: &str = "Account not found";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Validation(FieldViolation),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal: {0}")]
    Internal(String),
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl AccountError {
    /// Classify into an HTTP error. Store failures are logged here and masked
    /// behind the operation's generic message.
    pub fn into_app_error(self, op: Operation) -> AppError {
        match self {
            AccountError::InvalidId(_) => AppError::BadRequest(INVALID_ID.into()),
            AccountError::Validation(v) => AppError::Validation(v),
            AccountError::NotFound => AppError::NotFound(ACCOUNT_NOT_FOUND.into()),
            AccountError::Db(e) => {
                tracing::error!(operation = ?op, error = %e, "account operation failed");
                AppError::Internal(op.failure_message().into())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(v) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationBody {
                        field: v.field.to_string(),
                        message: v.message,
                    }),
                )
                    .into_response();
            }
            AppError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m),
            AppError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
            AppError::Unavailable(m) => (StatusCode::SERVICE_UNAVAILABLE, m),
        };
        (status, Json(Envelope::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failure_is_masked_per_operation() {
        let err = AccountError::Db(sqlx::Error::PoolClosed).into_app_error(Operation::Delete);
        match err {
            AppError::Internal(m) => assert_eq!(m, "Account deletion failed"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn not_found_and_bad_id_map_to_fixed_messages() {
        assert!(matches!(
            AccountError::NotFound.into_app_error(Operation::Get),
            AppError::NotFound(m) if m == ACCOUNT_NOT_FOUND
        ));
        assert!(matches!(
            AccountError::InvalidId("abc".into()).into_app_error(Operation::Update),
            AppError::BadRequest(m) if m == INVALID_ID
        ));
    }

    #[test]
    fn response_status_codes() {
        assert_eq!(
            AppError::BadRequest(INVALID_DATA.into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unavailable("x".into()).into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        let v = FieldViolation::new("url", "Must be a valid URL");
        assert_eq!(AppError::Validation(v).into_response().status(), StatusCode::BAD_REQUEST);
    }
}
