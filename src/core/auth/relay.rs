//! Identity service relay
//!
//! Forwards validated signup requests to the external identity service and
//! turns its answers into [`RelayError`]s. Upstream messages are passed through
//! untouched; the portal does not classify them.

use std::time::Duration;

use serde::Deserialize;

use crate::core::config::Config;
use crate::core::signup::SignupRequest;
use crate::core::validation::PasswordIssue;

/// How long a single upstream call may take
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

/// Relay error types
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    WeakPassword(#[from] PasswordIssue),

    #[error("Sign up is not available right now")]
    NotConfigured,

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Identity service is unreachable: {0}")]
    Unreachable(String),
}

/// Error body the identity service may answer with
#[derive(Debug, Default, Deserialize)]
struct UpstreamError {
    message: Option<String>,
    error: Option<String>,
}

/// Pick the message to show for a failed upstream call
pub(crate) fn upstream_message(status: u16, body: &str) -> String {
    let parsed: UpstreamError = serde_json::from_str(body).unwrap_or_default();

    parsed
        .message
        .or(parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Identity service rejected the request (HTTP {status})"))
}

/// HTTP client for the identity service
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl IdentityClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Build a client from config; `None` when no identity service is set
    pub fn from_config(config: &Config) -> Result<Option<Self>, reqwest::Error> {
        config
            .auth_service_base()
            .map(|base| Self::new(base, config.auth_service_token.clone()))
            .transpose()
    }

    /// Endpoint that creates accounts
    pub fn signup_url(&self) -> String {
        format!("{}/signup", self.base_url)
    }

    /// Send one signup request upstream. A 2xx answer means the account exists
    /// and the user is signed in.
    pub async fn forward(&self, request: &SignupRequest) -> Result<(), RelayError> {
        let mut builder = self.http.post(self.signup_url()).json(request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RelayError::Unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Identity service answered {} for signup", status);

        Err(RelayError::Rejected {
            status: status.as_u16(),
            message: upstream_message(status.as_u16(), &body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_prefers_message_field() {
        let body = r#"{"message": "Email already registered", "error": "conflict"}"#;
        assert_eq!(upstream_message(409, body), "Email already registered");
    }

    #[test]
    fn test_upstream_message_falls_back_to_error_field() {
        let body = r#"{"error": "Invalid email"}"#;
        assert_eq!(upstream_message(400, body), "Invalid email");
    }

    #[test]
    fn test_upstream_message_without_json() {
        assert_eq!(
            upstream_message(500, "<html>oops</html>"),
            "Identity service rejected the request (HTTP 500)"
        );
        assert_eq!(
            upstream_message(502, r#"{"message": "  "}"#),
            "Identity service rejected the request (HTTP 502)"
        );
    }

    #[test]
    fn test_signup_url_strips_trailing_slash() {
        let client = IdentityClient::new("https://id.example.org/v1/", None).unwrap();
        assert_eq!(client.signup_url(), "https://id.example.org/v1/signup");
    }

    #[test]
    fn test_from_config_without_url() {
        let config = Config {
            auth_service_url: None,
            auth_service_token: Some("token".to_string()),
        };
        assert!(IdentityClient::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_relay_error_display() {
        assert_eq!(
            RelayError::from(PasswordIssue::MissingDigit).to_string(),
            "Password must contain at least one digit"
        );
        assert_eq!(
            RelayError::Rejected {
                status: 409,
                message: "Email already registered".to_string()
            }
            .to_string(),
            "Email already registered"
        );
        assert_eq!(
            RelayError::NotConfigured.to_string(),
            "Sign up is not available right now"
        );
    }
}
