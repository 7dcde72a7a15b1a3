//! Transfer Panel Component
//!
//! Transfer form with local validation and a success screen. Completed
//! transfers are folded into the banking overview when this window closes.

use leptos::prelude::*;

use crate::banking::{validate_transfer, TransferRequest};
use crate::context::UiContext;
use crate::models::{format_currency, NotificationKind};
use crate::panels::PanelId;
use super::window_frame::WindowFrame;

fn now_label() -> String {
    let time = js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .as_string()
        .unwrap_or_default();
    format!("Today, {time}")
}

#[component]
pub fn TransferPanel() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");

    let (recipient, set_recipient) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (completed, set_completed) = signal::<Option<TransferRequest>>(None);

    let reset_form = move || {
        set_recipient.set(String::new());
        set_amount.set(String::new());
        set_description.set(String::new());
        set_completed.set(None);
    };

    let leave = move || {
        reset_form();
        ctx.close_transfer();
    };

    let confirm = move |_| {
        let balance = ctx.banking.get_untracked().bank;
        match validate_transfer(
            &recipient.get_untracked(),
            &amount.get_untracked(),
            &description.get_untracked(),
            balance,
        ) {
            Ok(request) => {
                ctx.record_transfer(&request, now_label());
                set_completed.set(Some(request));
            }
            Err(err) => {
                ctx.notify_simple(
                    NotificationKind::Error,
                    "Transfer Failed",
                    err.message(),
                    4_000,
                );
            }
        }
    };

    view! {
        <WindowFrame
            id=PanelId::Transfer
            title=Signal::derive(|| "Transfer".to_string())
            on_close=move || leave()
        >
            <Show when=move || completed.get().is_none()>
                <div class="transfer-form">
                    <div class="transfer-balance">
                        <span>"Available"</span>
                        <span>
                            {move || format!("${}", format_currency(ctx.banking.get().bank))}
                        </span>
                    </div>
                    <label>"Recipient ID"</label>
                    <input
                        type="number"
                        prop:value=move || recipient.get()
                        on:input=move |ev| set_recipient.set(event_target_value(&ev))
                    />
                    <label>"Amount"</label>
                    <input
                        type="number"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(event_target_value(&ev))
                    />
                    <label>"Description"</label>
                    <input
                        type="text"
                        placeholder="Transfer"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    />
                    <div class="button-row">
                        <button class="button cancel" on:click=move |_| leave()>
                            "Cancel"
                        </button>
                        <button class="button submit" on:click=confirm>
                            "Confirm"
                        </button>
                    </div>
                </div>
            </Show>
            <Show when=move || completed.get().is_some()>
                <div class="transfer-success">
                    <div class="transfer-success-icon">"✅"</div>
                    <h2>"Transfer Complete"</h2>
                    {move || {
                        completed
                            .get()
                            .map(|request| {
                                view! {
                                    <p>
                                        {format!(
                                            "${} sent to ID {}",
                                            format_currency(request.amount),
                                            request.recipient_id,
                                        )}
                                    </p>
                                    <p class="transfer-success-date">{now_label()}</p>
                                }
                            })
                    }}
                    <button class="button submit" on:click=move |_| leave()>
                        "Done"
                    </button>
                </div>
            </Show>
        </WindowFrame>
    }
}
