//! Signup form component
//!
//! Collects name, email, password and role, then runs [`SignupFlow`] against
//! the portal's auth endpoint, the toast notifications and the router.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::client::HttpAuthClient;
use crate::core::{
    FormState, MIN_PASSWORD_LENGTH, Navigator, PASSWORD_PATTERN, PASSWORD_RULE_HINT, Role,
    SignupFlow,
};
use crate::ui::common::{FormField, SelectField};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Navigator backed by the router's `use_navigate` handle
struct RouterNavigator<F>(F);

impl<F: Fn(&str)> Navigator for RouterNavigator<F> {
    fn navigate_to(&self, path: &str) {
        (self.0)(path);
    }
}

/// Signup form component
#[component]
pub fn SignupForm(
    /// Where the "Sign in" link points
    #[prop(default = "/login")]
    login_href: &'static str,
) -> impl IntoView {
    let notifications = use_notifications();
    let navigate = use_navigate();

    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let role = RwSignal::new(Role::default());
    let loading = RwSignal::new(false);

    let role_value = Signal::derive(move || role.get().as_str().to_string());
    let role_options = Role::ALL
        .iter()
        .map(|r| (r.as_str(), r.display_name()))
        .collect::<Vec<_>>();

    // Handle form submission
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if loading.get_untracked() {
            return;
        }

        let form = FormState {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            show_password: show_password.get_untracked(),
            role: role.get_untracked(),
            loading: false,
        };

        let navigate = navigate.clone();
        let flow = SignupFlow::new(
            HttpAuthClient::default(),
            notifications,
            RouterNavigator(move |path: &str| navigate(path, Default::default())),
        );

        spawn_local(async move {
            // The view may already be gone after navigating home
            flow.submit(&form, move |value| {
                let _ = loading.try_set(value);
            })
            .await;
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            // Header
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">
                    "Create an account"
                </h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Join as a donor, a receiver or a volunteer"
                </p>
            </div>

            <FormField
                label="Full name"
                name="name"
                autocomplete="name"
                placeholder="Jane Doe"
                required=true
                value=name
                on_input=Callback::new(move |v: String| name.set(v))
            />

            <FormField
                label="Email"
                name="email"
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                required=true
                value=email
                on_input=Callback::new(move |v: String| email.set(v))
            />

            // Password field
            <div>
                <label for="password" class="block text-sm font-medium text-theme-primary mb-1">
                    "Password"
                </label>
                <div class="relative">
                    <input
                        type=move || if show_password.get() { "text" } else { "password" }
                        id="password"
                        name="password"
                        autocomplete="new-password"
                        placeholder="Create a strong password"
                        required=true
                        minlength=MIN_PASSWORD_LENGTH.to_string()
                        pattern=PASSWORD_PATTERN
                        title=PASSWORD_RULE_HINT
                        class="w-full px-3 py-2 pr-10 bg-theme-secondary border border-theme rounded-lg
                               text-theme-primary placeholder-theme-tertiary
                               focus:outline-none focus:ring-2 focus:ring-accent-primary focus:border-transparent
                               transition-colors"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="absolute inset-y-0 right-0 pr-3 flex items-center text-theme-tertiary hover:text-theme-secondary"
                        aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || {
                            if show_password.get() {
                                view! { <Icon name=icons::EYE_CLOSED class="h-5 w-5" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::EYE class="h-5 w-5" /> }.into_any()
                            }
                        }}
                    </button>
                </div>
                <p class="mt-1 text-xs text-theme-tertiary">{PASSWORD_RULE_HINT}</p>
            </div>

            <SelectField
                label="I want to join as"
                name="role"
                value=role_value
                on_change=Callback::new(move |v: String| role.set(Role::from_str(&v)))
                options=role_options
            />

            // Submit button
            <button
                type="submit"
                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                       text-white font-medium rounded-lg
                       focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-accent-primary
                       disabled:opacity-50 disabled:cursor-not-allowed
                       transition-colors"
                disabled=move || loading.get()
            >
                {move || {
                    if loading.get() {
                        view! {
                            <span class="flex items-center justify-center">
                                <Icon name=icons::LOADER class="animate-spin -ml-1 mr-2 h-4 w-4 text-white" />
                                "Creating account..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span class="block">"Create account"</span> }.into_any()
                    }
                }}
            </button>

            // Login link
            <div class="text-center text-sm text-theme-secondary">
                "Already have an account? "
                <A href=login_href attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                    "Sign in"
                </A>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_router_navigator_forwards_path() {
        let visited = RefCell::new(Vec::new());
        let navigator = RouterNavigator(|path: &str| visited.borrow_mut().push(path.to_string()));

        navigator.navigate_to("/");
        assert_eq!(*visited.borrow(), vec!["/".to_string()]);
    }
}
