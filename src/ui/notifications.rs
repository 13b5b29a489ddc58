//! Toast notifications
//!
//! Provides the notification context used by the signup flow and the
//! container that renders the toasts in the top-right corner.

use crate::core::{Notice, Notifier, Severity};
use leptos::prelude::*;
use std::collections::VecDeque;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// How long a default notice stays before fading out
const AUTO_DISMISS_MS: u32 = 3000;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notice: Notice,
}

impl NotificationItem {
    /// Destructive notices stay until the user closes them
    pub fn auto_dismiss_ms(&self) -> Option<u32> {
        match self.notice.severity {
            Severity::Default => Some(AUTO_DISMISS_MS),
            Severity::Destructive => None,
        }
    }
}

/// Notifications container component
/// Place this once at the app root
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let notifications = use_notifications().notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm" role="status" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|item| item.id
                children=move |item| view! { <NotificationToast item=item notifications=notifications /> }
            />
        </div>
    }
}

/// Single notification toast component
#[component]
fn NotificationToast(
    item: NotificationItem,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let id = item.id;
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = item.auto_dismiss_ms() {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                notifications.update(|n| n.retain(|i| i.id != id));
            });
        }
    }

    let (container_class, icon_class, icon_path) = match item.notice.severity {
        Severity::Default => (
            "bg-green-500/10 border-green-500/30",
            "text-green-400",
            "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
        Severity::Destructive => (
            "bg-red-500/10 border-red-500/30",
            "text-red-400",
            "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ),
    };

    let Notice {
        title, description, ..
    } = item.notice;

    view! {
        <div
            class=format!(
                "flex items-start gap-3 p-4 rounded-lg border backdrop-blur-sm shadow-lg transition-all duration-300 {}",
                container_class
            )
            style=move || if is_exiting.get() { "opacity: 0; transform: translateX(1rem);" } else { "opacity: 1; transform: translateX(0);" }
        >
            <div class=icon_class>
                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon_path />
                </svg>
            </div>
            <div class="flex-1 min-w-0">
                <h4 class="text-sm font-medium text-theme-primary">{title}</h4>
                <p class="text-xs text-theme-secondary mt-0.5">{description}</p>
            </div>
            <button
                type="button"
                class="text-theme-muted hover:text-theme-primary transition-colors"
                aria-label="Dismiss"
                on:click=move |_| notifications.update(|n| n.retain(|i| i.id != id))
            >
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                </svg>
            </button>
        </div>
    }
}

/// Reactive queue of on-screen notifications
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    /// Add a notification, dropping the oldest beyond the limit
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notice });

            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    /// Clear all notifications
    pub fn clear(&self) {
        self.notifications.set(VecDeque::new());
    }
}

impl Notifier for NotificationManager {
    fn show(&self, notice: Notice) {
        self.push(notice);
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the notification manager to the component tree
pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

/// Get the notification manager from the component tree
pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_caps_queue() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = NotificationManager::new();
            for i in 0..7 {
                manager.push(Notice::new(format!("n{i}"), ""));
            }

            let items = manager.notifications().get_untracked();
            assert_eq!(items.len(), MAX_NOTIFICATIONS);
            assert_eq!(items.front().map(|i| i.notice.title.as_str()), Some("n2"));
            assert_eq!(items.back().map(|i| i.id), Some(6));
        });
    }

    #[test]
    fn test_notifier_show_and_clear() {
        let owner = Owner::new();
        owner.with(|| {
            let manager = NotificationManager::new();
            manager.show(Notice::weak_password());
            assert_eq!(manager.notifications().get_untracked().len(), 1);

            manager.clear();
            assert!(manager.notifications().get_untracked().is_empty());
        });
    }

    #[test]
    fn test_destructive_notices_do_not_auto_dismiss() {
        let item = NotificationItem {
            id: 0,
            notice: Notice::destructive("Sign up failed", "nope"),
        };
        assert_eq!(item.auto_dismiss_ms(), None);

        let item = NotificationItem {
            id: 1,
            notice: Notice::account_created(),
        };
        assert_eq!(item.auto_dismiss_ms(), Some(AUTO_DISMISS_MS));
    }
}
