//! Application pages module
//!
//! - Home page
//! - Signup page
//! - Not found page

mod home;
mod not_found;
mod signup;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
