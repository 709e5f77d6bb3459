use reqwest::StatusCode;
use thiserror::Error;

/// API-specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Build an error from a failed response body.
    ///
    /// The server reports failures as JSON with an `error`, `message`, or
    /// `detail` field; when none is present the canonical status reason is
    /// used instead.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = extract_message(body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

        Self::from_status(status, message)
    }

    pub fn from_status(status: StatusCode, message: String) -> Self {
        let msg = if message.is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            message
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized(msg),
            StatusCode::NOT_FOUND => ApiError::NotFound(msg),
            StatusCode::BAD_REQUEST => ApiError::BadRequest(msg),
            status if status.is_server_error() => ApiError::ServerError(msg),
            status if status.is_client_error() => ApiError::BadRequest(msg),
            _ => ApiError::Unknown(msg),
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    for key in ["error", "message", "detail"] {
        if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
            if !msg.is_empty() {
                return Some(msg.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extracted_from_body() {
        let error = ApiError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"error": "Invalid credentials"}"#,
        );
        assert_eq!(error.to_string(), "Not authorized: Invalid credentials");
    }

    #[test]
    fn test_detail_key_supported() {
        let error =
            ApiError::from_response(StatusCode::NOT_FOUND, r#"{"detail": "No such client"}"#);
        assert!(matches!(error, ApiError::NotFound(msg) if msg == "No such client"));
    }

    #[test]
    fn test_fallback_to_status_reason() {
        let error = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(error.to_string(), "Server error: Internal Server Error");

        let error = ApiError::from_response(StatusCode::BAD_REQUEST, "<html>oops</html>");
        assert_eq!(error.to_string(), "Bad request: Bad Request");
    }

    #[test]
    fn test_status_mapping() {
        let error = ApiError::from_status(StatusCode::FORBIDDEN, "nope".to_string());
        assert!(matches!(error, ApiError::Unauthorized(_)));

        let error = ApiError::from_status(StatusCode::CONFLICT, "dup".to_string());
        assert!(matches!(error, ApiError::BadRequest(_)));
    }
}
