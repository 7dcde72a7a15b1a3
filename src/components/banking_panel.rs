//! Banking Panel Component
//!
//! Account overview: balances, quick actions and the recent transaction
//! list. Deposit and withdrawal amounts are collected through the amount
//! window with a banking submit target.

use leptos::prelude::*;

use crate::amount::BankAction;
use crate::context::UiContext;
use crate::models::{format_currency, NotificationKind};
use crate::panels::PanelId;
use super::window_frame::WindowFrame;

#[component]
pub fn BankingPanel() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");

    let title = Signal::derive(move || {
        let name = ctx.banking.get().bank_name;
        if name.is_empty() {
            "Banking".to_string()
        } else {
            name
        }
    });

    view! {
        <WindowFrame
            id=PanelId::Banking
            class="banking-window"
            title=title
            on_close=move || ctx.close_ui()
        >
            <div class="account-info">
                <div class="account-holder">{move || ctx.banking.get().account_holder}</div>
                <div class="account-number">{move || ctx.banking.get().account_number}</div>
            </div>
            <div class="balance-grid">
                <div class="balance-card">
                    <span class="balance-label">"Cash"</span>
                    <span class="balance-value">
                        {move || format!("${}", format_currency(ctx.banking.get().cash))}
                    </span>
                </div>
                <div class="balance-card">
                    <span class="balance-label">"Checking"</span>
                    <span class="balance-value">
                        {move || format!("${}", format_currency(ctx.banking.get().bank))}
                    </span>
                </div>
                <div class="balance-card total">
                    <span class="balance-label">"Total"</span>
                    <span class="balance-value">
                        {move || format!("${}", format_currency(ctx.banking.get().total()))}
                    </span>
                </div>
            </div>
            <div class="banking-actions">
                <button
                    class="button"
                    on:click=move |_| ctx.banking_amount_action(BankAction::Deposit)
                >
                    "Deposit"
                </button>
                <button
                    class="button"
                    on:click=move |_| ctx.banking_amount_action(BankAction::Withdraw)
                >
                    "Withdraw"
                </button>
                <button class="button" on:click=move |_| ctx.open_transfer()>
                    "Transfer"
                </button>
                <button class="button" on:click=move |_| ctx.open_statement()>
                    "Statement"
                </button>
            </div>
            <div class="transaction-section">
                <div class="transaction-header">
                    <span>"Recent Transactions"</span>
                    <button
                        class="view-all-btn"
                        on:click=move |_| {
                            ctx.notify_simple(
                                NotificationKind::Info,
                                "Transaction History",
                                "Opening detailed transaction history...",
                                2_000,
                            )
                        }
                    >
                        "View All"
                    </button>
                </div>
                <div class="transaction-history">
                    {move || {
                        let session = ctx.banking.get();
                        if session.transactions.is_empty() {
                            view! {
                                <div class="transaction-empty">
                                    <div class="transaction-empty-icon">"📄"</div>
                                    <div class="transaction-empty-text">
                                        "No recent transactions"
                                    </div>
                                </div>
                            }
                                .into_any()
                        } else {
                            session
                                .recent()
                                .iter()
                                .cloned()
                                .map(|tx| {
                                    view! {
                                        <div class=format!(
                                            "transaction-item {}",
                                            tx.kind.css_class(),
                                        )>
                                            <div class="transaction-icon">{tx.kind.icon()}</div>
                                            <div class="transaction-details">
                                                <div class="transaction-description">
                                                    {tx.description.clone()}
                                                </div>
                                                <div class="transaction-date">{tx.date.clone()}</div>
                                            </div>
                                            <div class="transaction-amount">
                                                {format!(
                                                    "{}${}",
                                                    tx.kind.prefix(),
                                                    format_currency(tx.amount),
                                                )}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </WindowFrame>
    }
}
