//! Account CRUD handlers: create, list, read, update, delete.

use crate::error::{AppError, Operation};
use crate::extractors::AccountJson;
use crate::response::{success_created, success_ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn create(
    State(state): State<AppState>,
    AccountJson(input): AccountJson,
) -> Result<impl IntoResponse, AppError> {
    let account = state
        .accounts
        .create_account(&input)
        .await
        .map_err(|e| e.into_app_error(Operation::Create))?;
    Ok(success_created(account))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let accounts = state
        .accounts
        .get_all_accounts()
        .await
        .map_err(|e| e.into_app_error(Operation::List))?;
    Ok(success_ok(accounts))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let account = state
        .accounts
        .get_account_by_id(&id)
        .await
        .map_err(|e| e.into_app_error(Operation::Get))?;
    Ok(success_ok(account))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AccountJson(input): AccountJson,
) -> Result<impl IntoResponse, AppError> {
    let account = state
        .accounts
        .update_account(&id, &input)
        .await
        .map_err(|e| e.into_app_error(Operation::Update))?;
    Ok(success_ok(account))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .accounts
        .delete_account(&id)
        .await
        .map_err(|e| e.into_app_error(Operation::Delete))?;
    Ok(StatusCode::NO_CONTENT)
}
