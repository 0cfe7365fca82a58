use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::validate_user_id;
use super::{ApiError, AppState, CreditLimitDto};

pub async fn list_credit_limits(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CreditLimitDto>>, ApiError> {
    let limits = state.store.list_credit_limits().await?;
    Ok(Json(limits.into_iter().map(CreditLimitDto::from).collect()))
}

pub async fn get_credit_limit(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<CreditLimitDto>, ApiError> {
    let user_id = validate_user_id(&user_id)?;

    match state.store.latest_credit_limit(user_id).await? {
        Some(row) => Ok(Json(CreditLimitDto::from(row))),
        None => Err(ApiError::credit_limit_not_found()),
    }
}
