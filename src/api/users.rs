use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::validation::validate_name;
use super::{ApiError, AppState, CreateUserRequest, MessageResponse, UserDto};

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let name = validate_name(&payload.name)?;

    let user_id = Uuid::new_v4();
    state.store.insert_user(user_id, name).await?;

    info!("User created: {}", user_id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully")),
    ))
}

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}
