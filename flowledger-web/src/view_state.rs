use crate::api::ApiError;

/// Per-view fetch lifecycle: a view starts loading, then either shows its
/// data or an error banner. Views never share or compose these.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> ViewState<T> {
    /// Collapse a gateway result into the renderable state.
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn ok_result_becomes_loaded() {
        let state = ViewState::from_result(Ok(vec![1, 2, 3]));
        assert_eq!(state, ViewState::Loaded(vec![1, 2, 3]));
    }

    #[test]
    fn http_error_keeps_server_message() {
        let error = ApiError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "统计服务不可用".to_string(),
        };
        let state = ViewState::<()>::from_result(Err(error));
        assert_eq!(state, ViewState::Failed("统计服务不可用".to_string()));
    }
}
