//! Notification Stack Component
//!
//! Renders every live toast in the configured screen corner. Timers live in
//! the controller; this component only draws registry state.

use leptos::prelude::*;

use crate::context::UiContext;
use crate::models::NotificationKind;
use crate::notify::ToastPhase;
use crate::store::{surface_background, use_ui_store, UiStateStoreFields};

fn default_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✖",
        NotificationKind::Warning => "⚠",
        NotificationKind::Info => "ℹ",
    }
}

#[component]
pub fn NotificationStack() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");
    let store = use_ui_store();

    view! {
        <div class=move || {
            format!(
                "notifications-container {}",
                store.notification_position().get().css_class()
            )
        }>
            {move || {
                ctx.toasts
                    .get()
                    .toasts()
                    .iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = format!(
                            "notification {}{}",
                            toast.kind.css_class(),
                            if toast.phase == ToastPhase::Exiting { " exit" } else { "" },
                        );
                        let icon = toast
                            .icon
                            .clone()
                            .unwrap_or_else(|| default_icon(toast.kind).to_string());
                        view! {
                            <div
                                class=class
                                style:background-color=move || {
                                    surface_background(
                                        store.dark_mode().get(),
                                        store.opacity().get(),
                                    )
                                }
                            >
                                <div class="notification-icon">{icon}</div>
                                <div class="notification-content">
                                    <div class="notification-title">{toast.title.clone()}</div>
                                    <div class="notification-message">{toast.message.clone()}</div>
                                </div>
                                {toast.closable.then(|| {
                                    view! {
                                        <button
                                            class="notification-close"
                                            on:click=move |_| ctx.close_toast(id)
                                        >
                                            "×"
                                        </button>
                                    }
                                })}
                                <div
                                    class="notification-progress"
                                    style:animation-duration=format!("{}ms", toast.duration_ms)
                                ></div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
