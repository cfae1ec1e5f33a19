//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{"error": ...}` or `{"message": ...}`; whichever is unset is omitted.
#[derive(Serialize, Debug, Default)]
pub struct Envelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ValidationBody {
    pub field: String,
    pub message: String,
}

/// Payload serialized as-is with the given status.
pub fn success<T: Serialize>(status: StatusCode, data: T) -> (StatusCode, Json<T>) {
    (status, Json(data))
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    success(StatusCode::CREATED, data)
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    success(StatusCode::OK, data)
}

pub fn error_body(status: StatusCode, error: impl Into<String>) -> (StatusCode, Json<Envelope>) {
    (status, Json(Envelope::error(error)))
}

pub fn message_body(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Envelope>) {
    (status, Json(Envelope::message(message)))
}
