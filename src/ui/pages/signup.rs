//! Signup page component
//!
//! Standalone page hosting the signup form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::SignupForm;
use crate::ui::pages::home::SiteHeader;

/// Signup page component
#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <Title text="Sign up - CareLink"/>
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader />

            // Main content
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md mx-auto bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                    <SignupForm />
                </div>
            </main>
        </div>
    }
}
