//! Revenue analytics handler

use axum::{extract::State, Json};
use smgpub_auth::AuthUser;
use smgpub_common::Result;

use crate::api::middleware::BillingState;
use crate::domain::entities::RevenueReport;

/// GET /api/analytics/revenue: The caller's transactions and their total
pub async fn revenue(
    State(state): State<BillingState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<RevenueReport>> {
    let transactions = state.transactions.list_for_user(auth.user_id).await?;
    Ok(Json(RevenueReport::from_transactions(transactions)))
}
