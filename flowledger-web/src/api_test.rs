//! Tests for the API client functionality
//!
//! Validates URL construction and the error-message extraction that feeds
//! every error banner in the app.

#[cfg(test)]
mod tests {
    use crate::api::{FlowLedgerClient, error_message_from_body};
    use reqwest::StatusCode;

    /// Tests API client creation and base-URL normalization
    #[test]
    fn test_api_url_joining() {
        let client = FlowLedgerClient::new("http://localhost:5000/");
        assert_eq!(client.api_url("login"), "http://localhost:5000/login");
        assert_eq!(
            client.api_url("/auth/status"),
            "http://localhost:5000/auth/status"
        );
    }

    /// Tests the endpoint paths the views depend on
    #[test]
    fn test_api_endpoints() {
        let client = FlowLedgerClient::new("https://flowledger-api.example.com");

        assert_eq!(
            client.api_url(&format!("customer/{}/stats", 42)),
            "https://flowledger-api.example.com/customer/42/stats"
        );
        assert_eq!(
            client.api_url("admin/reconciliation"),
            "https://flowledger-api.example.com/admin/reconciliation"
        );
        assert_eq!(
            client.api_url("admin/import-excel"),
            "https://flowledger-api.example.com/admin/import-excel"
        );
    }

    /// Server-provided message wins over the generic fallback
    #[test]
    fn test_error_message_extracted_from_body() {
        let message = error_message_from_body(
            StatusCode::FORBIDDEN,
            r#"{"message": "没有管理员权限"}"#,
        );
        assert_eq!(message, "没有管理员权限");
    }

    /// Undecodable or empty bodies fall back to a status-code message
    #[test]
    fn test_error_message_fallback_on_plain_body() {
        let message = error_message_from_body(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>Internal Server Error</html>",
        );
        assert_eq!(message, "HTTP error: status 500 Internal Server Error");

        let message = error_message_from_body(StatusCode::BAD_GATEWAY, "");
        assert_eq!(message, "HTTP error: status 502 Bad Gateway");
    }

    /// An envelope with an empty message is as useless as none at all
    #[test]
    fn test_error_message_fallback_on_empty_message() {
        let message =
            error_message_from_body(StatusCode::NOT_FOUND, r#"{"message": ""}"#);
        assert_eq!(message, "HTTP error: status 404 Not Found");
    }
}
