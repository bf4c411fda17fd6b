//! Registration and login API handlers
//!
//! Implements:
//! - POST /api/auth/register: Create an account and return a session token
//! - POST /api/auth/login: Check credentials and return a session token

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use smgpub_common::ValidatedJson;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::error::AccountError;

/// Request for creating a new account
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,

    /// Plaintext password (1-128 chars), hashed before it is stored
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Session token response, shared by register and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

fn token_for(state: &AccountsState, user_id: Uuid) -> Result<Json<TokenResponse>, AccountError> {
    let issued = state.auth.issue(user_id)?;
    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}

/// POST /api/auth/register: Create an account and return a session token
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<Json<TokenResponse>, AccountError> {
    let user_id = state
        .credentials
        .register(&request.email, &request.password)
        .await?;

    token_for(&state, user_id)
}

/// POST /api/auth/login: Check credentials and return a session token
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, AccountError> {
    let user_id = state
        .credentials
        .authenticate(&request.email, &request.password)
        .await?;

    token_for(&state, user_id)
}
