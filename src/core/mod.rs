//! Core signup logic shared by the browser and the server

#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
mod role;
mod signup;
mod validation;

pub use role::Role;
pub use signup::*;
pub use validation::*;
