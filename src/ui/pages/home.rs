//! Home page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Top bar with the site logo
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="border-b border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center h-16">
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                            <Icon name=icons::HEART class="w-5 h-5" />
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"CareLink"</span>
                    </A>
                </div>
            </div>
        </header>
    }
}

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="CareLink"/>
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader />

            <main class="flex-1 flex flex-col items-center justify-center p-4 text-center">
                <h1 class="text-4xl font-bold text-theme-primary mb-4">
                    "Give, receive, volunteer"
                </h1>
                <p class="text-theme-secondary mb-8 max-w-md">
                    "CareLink connects donors, receivers and volunteers in one place."
                </p>
                <A
                    href="/signup"
                    attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                >
                    "Create an account"
                </A>
            </main>
        </div>
    }
}
