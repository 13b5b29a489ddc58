//! Auth API endpoints
//!
//! Provides the REST endpoint the signup form talks to:
//! - POST /api/auth/signup - Create an account through the identity service

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::auth::relay::{IdentityClient, RelayError};
use crate::core::signup::{SIGNUP_ENDPOINT, SignupRequest};
use crate::core::validation::check_password;

/// Auth API state containing the identity service client
#[derive(Clone, Default)]
pub struct AuthApiState {
    pub identity: Option<IdentityClient>,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

impl RelayError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            RelayError::WeakPassword(_) => (StatusCode::BAD_REQUEST, "WEAK_PASSWORD"),
            RelayError::NotConfigured => (StatusCode::SERVICE_UNAVAILABLE, "SIGNUP_UNAVAILABLE"),
            RelayError::Rejected { status, .. } => {
                let status = StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                (status, "SIGNUP_REJECTED")
            }
            RelayError::Unreachable(_) => (StatusCode::BAD_GATEWAY, "IDENTITY_UNREACHABLE"),
        }
    }
}

/// Convert RelayError to API response
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Generic success response
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

/// Create the auth API router
pub fn auth_api_router(state: AuthApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route(SIGNUP_ENDPOINT, post(signup_handler))
        .with_state(state)
}

/// POST /api/auth/signup
/// Re-check the password, then relay the request to the identity service
async fn signup_handler(
    State(state): State<Arc<AuthApiState>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SuccessResponse>), RelayError> {
    tracing::info!(
        "Signup attempt for email: {} as {}",
        request.email,
        request.role
    );

    check_password(&request.password)?;

    let identity = state.identity.as_ref().ok_or(RelayError::NotConfigured)?;
    identity.forward(&request).await?;

    tracing::info!("Account created for email: {}", request.email);

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse {
            success: true,
            message: "Account created".to_string(),
        }),
    ))
}
