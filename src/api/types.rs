use serde::{Deserialize, Serialize};

use crate::entities::{credit_limits, emotions, users};

/// Failure body: every error response carries an `error` field plus the
/// HTTP status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
}

/// Loosely typed on purpose: bounds and enum membership are checked by the
/// validation helpers so violations surface as structured 400s.
#[derive(Debug, Deserialize)]
pub struct CreateEmotionRequest {
    pub user_id: String,
    pub emotion_type: String,
    pub intensity: i64,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub user_id: String,
    pub name: String,
}

impl From<users::Model> for UserDto {
    fn from(model: users::Model) -> Self {
        Self {
            user_id: model.user_id,
            name: model.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EmotionDto {
    pub emotion_id: i32,
    pub user_id: String,
    pub emotion_type: String,
    pub intensity: i32,
    pub created_at: String,
}

impl From<emotions::Model> for EmotionDto {
    fn from(model: emotions::Model) -> Self {
        Self {
            emotion_id: model.emotion_id,
            user_id: model.user_id,
            emotion_type: model.emotion_type,
            intensity: model.intensity,
            created_at: model.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreditLimitDto {
    pub limit_id: i32,
    pub user_id: String,
    pub credit_limit: String,
    pub updated_at: String,
}

impl From<credit_limits::Model> for CreditLimitDto {
    fn from(model: credit_limits::Model) -> Self {
        Self {
            limit_id: model.limit_id,
            user_id: model.user_id,
            credit_limit: model.credit_limit,
            updated_at: model.updated_at,
        }
    }
}
