//! Notification context and toast stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any descendant can call `expect_context::<NotificationHandle>()` and
//! `notify`. The provider renders the visible queue after its children and
//! schedules one prune per notification at its expiry time.

use leptos::prelude::*;

use crate::state::notifications::{NotificationKind, NotificationState};
#[cfg(feature = "hydrate")]
use crate::state::notifications::DISPLAY_DURATION_MS;
use crate::util::clock::now_ms;

/// Copyable handle to the notification queue.
#[derive(Clone, Copy)]
pub struct NotificationHandle {
    state: RwSignal<NotificationState>,
}

impl NotificationHandle {
    pub fn notify(self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        self.state.update(|s| {
            s.enqueue(message, kind, now_ms());
        });

        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(DISPLAY_DURATION_MS)).await;
                // The provider may have unmounted while we slept.
                let _ = state.try_update(|s| s.prune(now_ms()));
            });
        }
    }

    pub fn error(self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn success(self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn dismiss(self, id: u64) {
        self.state.update(|s| s.dismiss(id));
    }
}

#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(NotificationState::default());
    let handle = NotificationHandle { state };
    provide_context(handle);

    view! {
        {children()}
        <div class="toast-stack" aria-live="polite">
            {move || {
                state
                    .get()
                    .visible()
                    .iter()
                    .cloned()
                    .map(|n| {
                        let id = n.id;
                        view! {
                            <div class=format!("toast toast--{}", n.kind.as_str()) role="status">
                                <span class="toast__message">{n.message}</span>
                                <button
                                    class="toast__dismiss"
                                    title="Dismiss"
                                    on:click=move |_| handle.dismiss(id)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
