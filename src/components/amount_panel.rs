//! Amount Panel Component
//!
//! Stepper-adjusted integer input. Enter and the Confirm button share the
//! same submit path; the submit target was fixed when the panel was shown.

use leptos::prelude::*;

use crate::context::UiContext;
use crate::panels::PanelId;
use super::window_frame::WindowFrame;

#[component]
pub fn AmountPanel() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");

    let title = Signal::derive(move || ctx.amount.get().title.clone());

    view! {
        <WindowFrame id=PanelId::Amount title=title on_close=move || ctx.close_ui()>
            <div class="amount-row">
                <button class="amount-step" on:click=move |_| ctx.amount_step(-1)>
                    "−"
                </button>
                <input
                    id="amount-input"
                    type="number"
                    prop:value=move || ctx.amount.get().value.to_string()
                    on:change=move |ev| ctx.amount_input(&event_target_value(&ev))
                    on:keypress=move |ev| {
                        if ev.key() == "Enter" {
                            ctx.submit_amount();
                        }
                    }
                />
                <button class="amount-step" on:click=move |_| ctx.amount_step(1)>
                    "+"
                </button>
            </div>
            <div class="button-row">
                <button class="button cancel" on:click=move |_| ctx.close_ui()>
                    "Cancel"
                </button>
                <button class="button submit" on:click=move |_| ctx.submit_amount()>
                    "Confirm"
                </button>
            </div>
        </WindowFrame>
    }
}
