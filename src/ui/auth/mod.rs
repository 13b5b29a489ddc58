//! Authentication UI module
//!
//! Signup form and the browser client it submits through.

mod client;
mod signup_form;

pub use client::HttpAuthClient;
pub use signup_form::SignupForm;
