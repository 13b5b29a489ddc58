//! CareLink - account signup portal
//!
//! Signup page for donors, receivers and volunteers, built with Leptos and
//! WebAssembly. Account creation is delegated to an external identity service.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
