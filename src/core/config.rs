//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the identity service that creates accounts
    /// Example: https://id.example.org/v1
    pub auth_service_url: Option<String>,

    /// Bearer token presented to the identity service
    pub auth_service_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            auth_service_url: non_empty_var("AUTH_SERVICE_URL"),
            auth_service_token: non_empty_var("AUTH_SERVICE_TOKEN"),
        }
    }

    /// Check if the identity service is configured
    pub fn has_auth_service(&self) -> bool {
        self.auth_service_url.is_some()
    }

    /// Check if an identity service token is configured
    pub fn has_auth_token(&self) -> bool {
        self.auth_service_token.is_some()
    }

    /// Identity service base URL without a trailing slash
    pub fn auth_service_base(&self) -> Option<&str> {
        self.auth_service_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            auth_service_url: Some("https://id.example.org".to_string()),
            auth_service_token: Some("service-token".to_string()),
        };

        assert!(config.has_auth_service());
        assert!(config.has_auth_token());
        assert_eq!(config.auth_service_base(), Some("https://id.example.org"));
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            auth_service_url: None,
            auth_service_token: None,
        };

        assert!(!config.has_auth_service());
        assert!(!config.has_auth_token());
        assert!(config.auth_service_base().is_none());
    }

    #[test]
    fn test_auth_service_base_trims_trailing_slash() {
        let config = Config {
            auth_service_url: Some("https://id.example.org/v1//".to_string()),
            auth_service_token: None,
        };

        assert_eq!(config.auth_service_base(), Some("https://id.example.org/v1"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            auth_service_url: Some("http://localhost:9000".to_string()),
            auth_service_token: None,
        };
        let cloned = config.clone();

        assert_eq!(config.auth_service_url, cloned.auth_service_url);
        assert_eq!(config.auth_service_token, cloned.auth_service_token);
    }

    #[test]
    fn test_config_debug_format() {
        let config = Config {
            auth_service_url: Some("http://localhost:9000".to_string()),
            auth_service_token: None,
        };
        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("auth_service_url"));
    }
}
