//! Server side of signup
//!
//! This module provides:
//! - The relay to the external identity service
//! - REST API endpoint used by the signup form

pub mod api;
pub mod relay;

pub use api::{ApiError, AuthApiState, auth_api_router};
pub use relay::{IdentityClient, RelayError};
