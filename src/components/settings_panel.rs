//! Settings Panel Component
//!
//! Every control previews its value live; Save persists, Cancel (and the
//! close button, and escape) reverts to the open-time snapshot.

use leptos::prelude::*;

use crate::context::UiContext;
use crate::models::ScreenCorner;
use crate::panels::PanelId;
use crate::settings::{fraction_to_percent, percent_to_fraction};
use crate::store::{use_ui_store, UiStateStoreFields};
use super::window_frame::WindowFrame;

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");
    let store = use_ui_store();

    let percent = Memo::new(move |_| fraction_to_percent(store.opacity().get()));

    view! {
        <WindowFrame
            id=PanelId::Settings
            title=Signal::derive(|| "Settings".to_string())
            on_close=move || ctx.cancel_settings()
        >
            <div class="settings-row">
                <label for="dark-mode-toggle">"Dark Mode"</label>
                <input
                    id="dark-mode-toggle"
                    type="checkbox"
                    prop:checked=move || store.dark_mode().get()
                    on:change=move |ev| store.dark_mode().set(event_target_checked(&ev))
                />
            </div>
            <div class="settings-row">
                <label for="opacity-slider">"Window Opacity"</label>
                <input
                    id="opacity-slider"
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || percent.get().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                            store.opacity().set(percent_to_fraction(value));
                        }
                    }
                />
                <span class="settings-value">{move || format!("{}%", percent.get())}</span>
            </div>
            <div class="settings-row">
                <label for="free-drag-toggle">"Free Window Dragging"</label>
                <input
                    id="free-drag-toggle"
                    type="checkbox"
                    prop:checked=move || store.free_drag().get()
                    on:change=move |ev| store.free_drag().set(event_target_checked(&ev))
                />
            </div>
            <div class="settings-row">
                <label>"Notification Position"</label>
                <div class="corner-picker">
                    {ScreenCorner::ALL
                        .into_iter()
                        .map(|corner| {
                            let active = move || {
                                store.notification_position().get() == corner
                            };
                            view! {
                                <button
                                    class=move || {
                                        if active() { "corner-btn active" } else { "corner-btn" }
                                    }
                                    on:click=move |_| ctx.set_notification_position(corner)
                                >
                                    {corner.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="button-row">
                <button class="button cancel" on:click=move |_| ctx.cancel_settings()>
                    "Cancel"
                </button>
                <button class="button submit" on:click=move |_| ctx.save_settings()>
                    "Save"
                </button>
            </div>
        </WindowFrame>
    }
}
