//! Statement Panel Component
//!
//! Full transaction table with type filter and date/amount sorting.

use leptos::prelude::*;

use crate::banking::{filter_and_sort, sample_statement, TxFilter, TxSort};
use crate::context::UiContext;
use crate::models::{format_currency, NotificationKind, TxKind};
use crate::panels::PanelId;
use super::window_frame::WindowFrame;

const FILTERS: &[(&str, TxFilter)] = &[
    ("All Types", TxFilter::All),
    ("Deposits", TxFilter::Kind(TxKind::Deposit)),
    ("Withdrawals", TxFilter::Kind(TxKind::Withdraw)),
    ("Transfers", TxFilter::Kind(TxKind::Transfer)),
];

#[component]
pub fn StatementPanel() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");

    let (filter, set_filter) = signal(TxFilter::default());
    let (sort, set_sort) = signal(TxSort::default());

    let rows = Memo::new(move |_| filter_and_sort(&sample_statement(), filter.get(), sort.get()));

    view! {
        <WindowFrame
            id=PanelId::Statement
            class="statement-window"
            title=Signal::derive(|| "Account Statement".to_string())
            on_close=move || ctx.close_ui()
        >
            <div class="statement-toolbar">
                <div class="statement-filters">
                    {FILTERS
                        .iter()
                        .map(|(label, value)| {
                            let value = *value;
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == value {
                                            "filter-btn active"
                                        } else {
                                            "filter-btn"
                                        }
                                    }
                                    on:click=move |_| set_filter.set(value)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="statement-sorts">
                    {TxSort::ALL
                        .into_iter()
                        .map(|value| {
                            view! {
                                <button
                                    class=move || {
                                        if sort.get() == value {
                                            "sort-btn active"
                                        } else {
                                            "sort-btn"
                                        }
                                    }
                                    on:click=move |_| set_sort.set(value)
                                >
                                    {value.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <table class="statement-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Description"</th>
                        <th>"Type"</th>
                        <th>"Amount"</th>
                        <th>"Balance"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|tx| {
                                let amount_class = match tx.kind {
                                    TxKind::Deposit => "amount-positive",
                                    _ => "amount-negative",
                                };
                                view! {
                                    <tr>
                                        <td>{tx.date.clone()}</td>
                                        <td>{tx.description.clone()}</td>
                                        <td>
                                            <span class=format!(
                                                "transaction-type {}",
                                                tx.kind.css_class(),
                                            )>{tx.kind.css_class()}</span>
                                        </td>
                                        <td class=amount_class>
                                            {format!(
                                                "{}${}",
                                                tx.kind.prefix(),
                                                format_currency(tx.amount),
                                            )}
                                        </td>
                                        <td>
                                            {tx
                                                .balance
                                                .map(|b| format!("${}", format_currency(b)))
                                                .unwrap_or_default()}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <div class="statement-actions">
                <button class="button" on:click=move |_| ctx.statement_back()>
                    "Back"
                </button>
                <button
                    class="statement-btn download"
                    on:click=move |_| {
                        ctx.notify_simple(
                            NotificationKind::Info,
                            "Download Started",
                            "Your statement PDF is being generated and will download shortly.",
                            3_000,
                        )
                    }
                >
                    "Download PDF"
                </button>
                <button
                    class="statement-btn print"
                    on:click=move |_| {
                        ctx.notify_simple(
                            NotificationKind::Info,
                            "Print Dialog",
                            "Opening print dialog for your statement.",
                            2_000,
                        )
                    }
                >
                    "Print"
                </button>
            </div>
        </WindowFrame>
    }
}
