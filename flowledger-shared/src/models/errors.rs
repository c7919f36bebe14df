use serde::{Deserialize, Serialize};

/// Error envelope the API uses for non-2xx responses. The client extracts
/// `message` for display; `details` is diagnostic only.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_only_body() {
        let error: ErrorResponse = serde_json::from_str(r#"{"message": "无权限"}"#).unwrap();
        assert_eq!(error.message, "无权限");
        assert!(error.details.is_none());
        assert_eq!(error.to_string(), "无权限");
    }

    #[test]
    fn display_includes_details_when_present() {
        let error = ErrorResponse {
            message: "import failed".to_string(),
            details: Some("row 3: bad amount".to_string()),
        };
        assert_eq!(error.to_string(), "import failed: row 3: bad amount");
    }
}
