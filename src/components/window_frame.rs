//! Window Frame Component
//!
//! Shared chrome for every overlay window: titlebar with close button, the
//! open/close animation classes driven by the panel registry, opacity and
//! dark-mode styling, and optional titlebar dragging.

use leptos::prelude::*;
use leptos_dragwin::{
    bind_window_drag, create_window_drag, make_titlebar_mousedown, reset_position,
};

use crate::context::UiContext;
use crate::panels::{AnimationPhase, PanelId};
use crate::store::{surface_background, use_ui_store, UiStateStoreFields};

/// One overlay window wired into the registry's animation lifecycle
#[component]
pub fn WindowFrame(
    id: PanelId,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");
    let store = use_ui_store();

    let phase = Memo::new(move |_| ctx.registry.get().phase_of(id));
    let free_drag = Signal::derive(move || store.free_drag().get());

    // Per-window drag state; the document-level listeners are bound exactly
    // once and dispatch on signal state afterwards.
    let drag = create_window_drag();
    bind_window_drag(drag, move |dragging| ctx.set_dragging(dragging));

    // Turning free drag off snaps the window back to its resting spot
    Effect::new(move |_| {
        if !free_drag.get() {
            reset_position(&drag);
        }
    });

    let window_class = move || {
        let anim = match phase.get() {
            AnimationPhase::Opening | AnimationPhase::Open => "open",
            AnimationPhase::Closing => "close",
            AnimationPhase::Closed => "",
        };
        let draggable = if free_drag.get() { " draggable" } else { "" };
        if class.is_empty() {
            format!("window {anim}{draggable}")
        } else {
            format!("window {class} {anim}{draggable}")
        }
    };

    view! {
        <div
            class="window-container"
            style:display=move || if phase.get().is_rendered() { "flex" } else { "none" }
        >
            <div
                class=window_class
                style:background-color=move || {
                    surface_background(store.dark_mode().get(), store.opacity().get())
                }
                style:transform=move || {
                    format!("translate({}px, {}px)", drag.offset_x.get(), drag.offset_y.get())
                }
            >
                <div class="titlebar" on:mousedown=make_titlebar_mousedown(drag, free_drag)>
                    <span class="titlebar-title">{move || title.get()}</span>
                    <button class="close-button" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <div class="window-body">{children()}</div>
            </div>
        </div>
    }
}
