use uuid::Uuid;

use super::ApiError;
use crate::limits::EmotionKind;

pub fn validate_name(name: &str) -> Result<&str, ApiError> {
    if name.chars().count() < 3 {
        return Err(ApiError::validation(
            "Name must be at least 3 characters long",
        ));
    }
    Ok(name)
}

pub fn validate_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::validation(format!("Invalid user id: {}. Expected a UUID", raw)))
}

pub fn validate_emotion_type(raw: &str) -> Result<EmotionKind, ApiError> {
    EmotionKind::parse(raw).ok_or_else(|| {
        ApiError::validation(format!(
            "Invalid emotion type: {}. Expected \"positive\" or \"negative\"",
            raw
        ))
    })
}

pub fn validate_intensity(value: i64) -> Result<i32, ApiError> {
    match i32::try_from(value) {
        Ok(v) if (1..=10).contains(&v) => Ok(v),
        _ => Err(ApiError::validation(format!(
            "Invalid intensity: {}. Intensity must be an integer between 1 and 10",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Alice Smith").is_ok());
        assert!(validate_name("Bob").is_ok());
        assert!(validate_name("Al").is_err());
        assert!(validate_name("").is_err());
    }

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("8f8c2e9e-6d5f-4a8b-9c3d-2f1e0a7b6c5d").is_ok());
        assert!(validate_user_id("not-a-uuid").is_err());
        assert!(validate_user_id("").is_err());
    }

    #[test]
    fn test_validate_emotion_type() {
        assert!(validate_emotion_type("positive").is_ok());
        assert!(validate_emotion_type("negative").is_ok());
        assert!(validate_emotion_type("neutral").is_err());
        assert!(validate_emotion_type("").is_err());
    }

    #[test]
    fn test_validate_intensity() {
        assert!(validate_intensity(1).is_ok());
        assert!(validate_intensity(10).is_ok());
        assert!(validate_intensity(0).is_err());
        assert!(validate_intensity(11).is_err());
        assert!(validate_intensity(-3).is_err());
    }
}
