use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::info;

use super::validation::{validate_emotion_type, validate_intensity, validate_user_id};
use super::{ApiError, AppState, CreateEmotionRequest, EmotionDto, MessageResponse};

/// Record an emotion and re-derive the user's credit limit.
///
/// The user lookup happens before any write so an unknown id is a clean 404
/// rather than a foreign-key violation. The emotion insert and the limit
/// upsert commit together or not at all.
pub async fn create_emotion(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEmotionRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user_id = validate_user_id(&payload.user_id)?;
    let kind = validate_emotion_type(&payload.emotion_type)?;
    let intensity = validate_intensity(payload.intensity)?;

    if state.store.get_user(user_id).await?.is_none() {
        return Err(ApiError::user_not_found());
    }

    let credit_limit = state.limits.compute(kind, intensity);

    state
        .store
        .record_emotion(user_id, kind, intensity, &credit_limit)
        .await?;

    info!(
        "Emotion recorded for {}: {} ({}), new limit {}",
        user_id,
        kind.as_str(),
        intensity,
        credit_limit
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(
            "Emotion added and credit limit updated successfully",
        )),
    ))
}

pub async fn list_emotions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmotionDto>>, ApiError> {
    let emotions = state.store.list_emotions().await?;
    Ok(Json(emotions.into_iter().map(EmotionDto::from).collect()))
}
