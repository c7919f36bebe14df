//! Frontend configuration module
//!
//! Selects the API base URL for the current deployment: a build-time
//! override wins, otherwise the host the page was served from decides
//! between the local development backend and the fixed production host.

const DEV_API_URL: &str = "http://localhost:5000";
const PROD_API_URL: &str = "https://flowledger-api.pythonanywhere.com";

/// Frontend configuration for URLs and environment selection
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the remote JSON API, without a trailing slash
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let api_base_url = option_env!("FLOWLEDGER_API_URL")
            .map(str::to_string)
            .unwrap_or_else(|| {
                if is_development() {
                    DEV_API_URL.to_string()
                } else {
                    PROD_API_URL.to_string()
                }
            });
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

/// A page opened from localhost, 127.0.0.1 or the filesystem talks to the
/// local development API; everything else talks to production.
fn is_development() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let location = window.location();
        let hostname = location.hostname().unwrap_or_default();
        let protocol = location.protocol().unwrap_or_default();
        hostname == "localhost" || hostname == "127.0.0.1" || protocol == "file:"
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Native builds only exist for the test suite.
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(config.api_base_url.starts_with("http"));
        assert!(!config.api_base_url.ends_with('/'));
    }

    #[test]
    fn test_frontend_config_new() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }

    #[test]
    fn test_native_builds_use_development_url() {
        // Hostname probing only exists in the browser; plain `cargo test`
        // must fall back to the development backend.
        let config = FrontendConfig::new();
        assert_eq!(config.api_base_url(), DEV_API_URL);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_config_selects_a_real_host() {
        let config = FrontendConfig::new();
        assert!(config.api_base_url().starts_with("http"));
        assert!(!config.api_base_url().ends_with('/'));
    }
}
