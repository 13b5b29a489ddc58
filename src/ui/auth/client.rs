//! Browser side of the auth collaborator
//!
//! Posts the signup request to the portal's relay endpoint and turns any
//! non-2xx answer into a [`SignupError`] carrying the server's message.

use serde::Deserialize;

use crate::core::{AuthClient, SIGNUP_ENDPOINT, SignupError, SignupRequest};

/// Error body returned by the relay endpoint
#[cfg_attr(feature = "ssr", allow(dead_code))]
#[derive(Debug, Clone, Deserialize)]
struct AuthApiError {
    error: String,
    code: String,
}

/// Message for a failed call whose body could not be read
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn fallback_message(status: u16) -> String {
    format!("Sign up failed (HTTP {status})")
}

/// Message to surface for a non-2xx answer; a blank or unreadable body falls
/// back to the status line
#[cfg_attr(feature = "ssr", allow(dead_code))]
fn failure_message(status: u16, body: Option<AuthApiError>) -> String {
    body.map(|body| body.error)
        .filter(|error| !error.trim().is_empty())
        .unwrap_or_else(|| fallback_message(status))
}

/// Auth collaborator backed by the portal's `/api/auth/signup` endpoint
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    endpoint: String,
}

impl HttpAuthClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpAuthClient {
    fn default() -> Self {
        Self::new(SIGNUP_ENDPOINT)
    }
}

#[cfg(not(feature = "ssr"))]
impl AuthClient for HttpAuthClient {
    async fn sign_up(&self, request: SignupRequest) -> Result<(), SignupError> {
        use gloo_net::http::Request;

        let response = Request::post(&self.endpoint)
            .json(&request)
            .map_err(|e| SignupError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| SignupError::new(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.json::<AuthApiError>().await.ok();
        if let Some(body) = &body {
            leptos::logging::log!("signup refused with HTTP {status} ({})", body.code);
        }
        Err(SignupError::new(failure_message(status, body)))
    }
}

#[cfg(feature = "ssr")]
impl AuthClient for HttpAuthClient {
    async fn sign_up(&self, _request: SignupRequest) -> Result<(), SignupError> {
        Err(SignupError::new("Sign up not available on server"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(HttpAuthClient::default().endpoint(), "/api/auth/signup");
    }

    #[test]
    fn test_fallback_message() {
        assert_eq!(fallback_message(500), "Sign up failed (HTTP 500)");
    }

    #[test]
    fn test_failure_message_uses_server_error() {
        let body = AuthApiError {
            error: "Email already registered".to_string(),
            code: "SIGNUP_REJECTED".to_string(),
        };
        assert_eq!(failure_message(409, Some(body)), "Email already registered");
    }

    #[test]
    fn test_failure_message_blank_or_missing_body() {
        let blank = AuthApiError {
            error: "   ".to_string(),
            code: "SIGNUP_REJECTED".to_string(),
        };
        assert_eq!(failure_message(502, Some(blank)), "Sign up failed (HTTP 502)");
        assert_eq!(failure_message(500, None), "Sign up failed (HTTP 500)");
    }

    #[test]
    fn test_error_body_deserialization() {
        let json = r#"{"error": "Email already registered", "code": "SIGNUP_REJECTED"}"#;
        let body: AuthApiError = serde_json::from_str(json).unwrap();

        assert_eq!(body.error, "Email already registered");
        assert_eq!(body.code, "SIGNUP_REJECTED");
    }
}
