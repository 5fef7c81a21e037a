//! Common DTOs used across the API

use serde::Serialize;

/// Standard success envelope: `{"success": true, "data": ..., "message": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Always `true`; failures go through `AppError`
    pub success: bool,
    /// Response data
    pub data: T,
    /// Response message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Create a success response with data and message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response() {
        let resp = ApiResponse::success("test");
        assert!(resp.success);
        assert_eq!(resp.data, "test");
        assert!(resp.message.is_none());

        let resp = ApiResponse::with_message("data", "Call initiated successfully");
        assert_eq!(resp.message, Some("Call initiated successfully".to_string()));

        let json = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["success"], true);
    }
}
