//! Shop Panel Component
//!
//! One window, five screens: browsing, payment-method selection,
//! processing, success and failure. The screen switch rebuilds the view
//! from session state, so returning to the shop after a purchase renders
//! from scratch instead of reviving a cached fragment.

use leptos::prelude::*;

use crate::checkout::{method_availability, taxed_total, FlowScreen, MethodAvailability};
use crate::context::UiContext;
use crate::models::{format_money, PaymentMethod};
use crate::panels::PanelId;
use super::window_frame::WindowFrame;

#[component]
pub fn ShopPanel() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");

    let title = Signal::derive(move || ctx.shop.get().screen_title());

    view! {
        <WindowFrame
            id=PanelId::Shop
            class="shop-window"
            title=title
            on_close=move || ctx.exit_shopping()
        >
            {move || match ctx.shop.get().flow.screen() {
                FlowScreen::Shop => shop_screen(ctx).into_any(),
                FlowScreen::PaymentMethod => method_screen(ctx).into_any(),
                FlowScreen::Processing => processing_screen().into_any(),
                FlowScreen::Success => success_screen(ctx).into_any(),
                FlowScreen::Failure => failure_screen(ctx).into_any(),
            }}
        </WindowFrame>
    }
}

// ========================
// Browsing screen
// ========================

fn shop_screen(ctx: UiContext) -> impl IntoView {
    view! {
        <div class="shop-layout">
            <div class="shop-categories">
                {move || {
                    let session = ctx.shop.get();
                    let selected = session.selected_category.clone();
                    session
                        .categories
                        .iter()
                        .map(|category| {
                            let id = category.id.clone();
                            let active = selected.as_deref() == Some(category.id.as_str());
                            let class = if active {
                                "shop-category active"
                            } else {
                                "shop-category"
                            };
                            view! {
                                <div class=class on:click=move |_| ctx.select_category(&id)>
                                    {category
                                        .icon
                                        .clone()
                                        .map(|icon| {
                                            view! { <div class="shop-category-icon">{icon}</div> }
                                        })}
                                    <div class="shop-category-name">{category.label.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="shop-main">
                <div class="shop-items-grid">
                    {move || {
                        let session = ctx.shop.get();
                        let visible = session.visible_items();
                        if visible.is_empty() {
                            view! {
                                <div class="shop-empty">"No items available in this category"</div>
                            }
                                .into_any()
                        } else {
                            visible
                                .into_iter()
                                .cloned()
                                .map(|item| {
                                    let icon = item
                                        .icon
                                        .clone()
                                        .unwrap_or_else(|| "📦".to_string());
                                    let add_item = item.clone();
                                    view! {
                                        <div class="shop-item">
                                            <div class="shop-item-image">{icon}</div>
                                            <div class="shop-item-name">{item.name.clone()}</div>
                                            <div class="shop-item-price">
                                                {format!("${}", format_money(item.price))}
                                            </div>
                                            {item
                                                .description
                                                .clone()
                                                .map(|desc| {
                                                    view! { <div class="shop-item-desc">{desc}</div> }
                                                })}
                                            <button
                                                class="shop-item-add"
                                                on:click=move |_| ctx.add_to_cart(&add_item)
                                            >
                                                "+"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>
            <div class="shop-cart">
                <CartColumn />
            </div>
        </div>
    }
}

#[component]
fn CartColumn() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");

    view! {
        <div class="shop-cart-items">
            {move || {
                let session = ctx.shop.get();
                if session.cart.is_empty() {
                    view! {
                        <div class="shop-cart-empty">
                            <div class="shop-cart-empty-icon">"🛒"</div>
                            <div class="shop-cart-empty-text">"Your cart is empty"</div>
                        </div>
                    }
                        .into_any()
                } else {
                    session
                        .cart
                        .lines()
                        .iter()
                        .cloned()
                        .map(|line| {
                            let icon = line.icon.clone().unwrap_or_else(|| "📦".to_string());
                            let remove_id = line.id.clone();
                            let dec_id = line.id.clone();
                            let inc_id = line.id.clone();
                            view! {
                                <div class="shop-cart-item">
                                    <div class="shop-cart-item-icon">{icon}</div>
                                    <div class="shop-cart-item-details">
                                        <div class="shop-cart-item-name">{line.name.clone()}</div>
                                        <div class="shop-cart-item-price">
                                            {format!("${}", format_money(line.price))}
                                        </div>
                                    </div>
                                    <div class="shop-cart-item-quantity">
                                        <button on:click=move |_| {
                                            ctx.adjust_cart_quantity(&dec_id, -1)
                                        }>"−"</button>
                                        <span>{line.quantity}</span>
                                        <button on:click=move |_| {
                                            ctx.adjust_cart_quantity(&inc_id, 1)
                                        }>"+"</button>
                                    </div>
                                    <button
                                        class="shop-cart-item-remove"
                                        on:click=move |_| ctx.remove_cart_line(&remove_id)
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
        <div class="shop-cart-total">
            <span>"Total"</span>
            <span>{move || format!("${}", format_money(ctx.shop.get().cart.total()))}</span>
        </div>
        <div class="shop-cart-actions">
            <ClearCartButton />
            <button
                class="button submit"
                prop:disabled=move || ctx.shop.get().cart.is_empty()
                on:click=move |_| ctx.begin_checkout()
            >
                "Checkout"
            </button>
        </div>
    }
}

/// Inline confirmation so a stray click cannot empty the cart
#[component]
fn ClearCartButton() -> impl IntoView {
    let ctx = use_context::<UiContext>().expect("UiContext should be provided");
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="button cancel"
                prop:disabled=move || ctx.shop.get().cart.is_empty()
                on:click=move |_| {
                    if !ctx.shop.get_untracked().cart.is_empty() {
                        set_confirming.set(true);
                    }
                }
            >
                "Clear Cart"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="clear-confirm">
                <span>"Clear?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        ctx.clear_cart();
                        set_confirming.set(false);
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "✗"
                </button>
            </span>
        </Show>
    }
}

// ========================
// Payment screens
// ========================

fn method_button(ctx: UiContext, method: PaymentMethod) -> impl IntoView {
    let availability = Memo::new(move |_| {
        let session = ctx.shop.get();
        method_availability(session.balances.as_ref(), method, session.cart.total())
    });

    let class = move || match availability.get() {
        MethodAvailability::Loading => "payment-method-btn loading",
        MethodAvailability::InsufficientFunds => "payment-method-btn disabled",
        MethodAvailability::Available => "payment-method-btn",
    };

    let balance_view = move || {
        let session = ctx.shop.get();
        match session.balances {
            None => view! { <span class="payment-method-balance loading">"Loading..."</span> }
                .into_any(),
            Some(balances) => {
                let amount = format!("${}", format_money(balances.of(method)));
                if availability.get() == MethodAvailability::InsufficientFunds {
                    view! {
                        <span class="payment-method-balance insufficient">{amount}</span>
                        <span class="payment-method-insufficient">"Insufficient Funds"</span>
                    }
                        .into_any()
                } else {
                    view! { <span class="payment-method-balance">{amount}</span> }.into_any()
                }
            }
        }
    };

    let tax_view = move || {
        let session = ctx.shop.get();
        let rate = session.tax_rates.as_ref().and_then(|r| r.of(method))?;
        let total = session.cart.total();
        Some(view! {
            <div class="payment-method-tax">
                <span class="payment-method-tax-icon">"🧾"</span>
                <span class="payment-method-tax-text">{format!("{rate}% VAT tax applied")}</span>
            </div>
            <div class="payment-method-taxed-price">
                {format!("Final price: ${}", format_money(taxed_total(total, Some(rate))))}
            </div>
        })
    };

    view! {
        <button
            class=class
            prop:disabled=move || availability.get() != MethodAvailability::Available
            on:click=move |_| {
                if availability.get_untracked() == MethodAvailability::Available {
                    ctx.select_payment_method(method);
                }
            }
        >
            <span class="payment-method-icon">{method.icon()}</span>
            <span class="payment-method-label">{method.label()}</span>
            {balance_view}
            {tax_view}
        </button>
    }
}

fn method_screen(ctx: UiContext) -> impl IntoView {
    view! {
        <div class="payment-method-screen">
            <h2>"Select Payment Method"</h2>
            <p class="payment-total">
                {move || format!("Total: ${}", format_money(ctx.shop.get().cart.total()))}
            </p>
            <div class="payment-methods">
                {method_button(ctx, PaymentMethod::Cash)}
                {method_button(ctx, PaymentMethod::Bank)}
            </div>
            <div class="payment-actions">
                <button class="button cancel" on:click=move |_| ctx.cancel_payment()>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

fn processing_screen() -> impl IntoView {
    view! {
        <div class="payment-processing-screen">
            <div class="payment-loader"></div>
            <h2>"Processing Payment"</h2>
            <p>"Please wait while we process your payment..."</p>
        </div>
    }
}

fn success_screen(ctx: UiContext) -> impl IntoView {
    let final_total = move || {
        let session = ctx.shop.get();
        let rate = session
            .flow
            .selected_method()
            .and_then(|m| session.tax_rates.as_ref().and_then(|r| r.of(m)));
        (taxed_total(session.cart.total(), rate), rate)
    };

    view! {
        <div class="payment-result-screen payment-success">
            <div class="payment-result-icon">"✅"</div>
            <h2>"Payment Successful"</h2>
            <p>
                {move || {
                    let (total, _) = final_total();
                    format!(
                        "Your payment of ${} has been processed successfully.",
                        format_money(total),
                    )
                }}
            </p>
            {move || {
                let session = ctx.shop.get();
                let rate = session
                    .flow
                    .selected_method()
                    .and_then(|m| session.tax_rates.as_ref().and_then(|r| r.of(m)))?;
                let tax = (session.cart.total() * rate / 100.0).floor();
                Some(view! {
                    <p>{format!("Including {rate}% VAT: ${}", format_money(tax))}</p>
                })
            }}
            <p>"Thank you for your purchase!"</p>
            <div class="payment-actions">
                <button class="button submit" on:click=move |_| ctx.continue_from_success()>
                    "Continue Shopping"
                </button>
                <button class="button cancel" on:click=move |_| ctx.exit_shopping()>
                    "Exit"
                </button>
            </div>
        </div>
    }
}

fn failure_screen(ctx: UiContext) -> impl IntoView {
    view! {
        <div class="payment-result-screen payment-failure">
            <div class="payment-result-icon">"❌"</div>
            <h2>"Payment Failed"</h2>
            <p>
                {move || {
                    format!(
                        "We couldn't process your payment of ${}.",
                        format_money(ctx.shop.get().cart.total()),
                    )
                }}
            </p>
            <p>"Reason: Insufficient funds."</p>
            <div class="payment-actions">
                <button class="button submit" on:click=move |_| ctx.try_another_method()>
                    "Try Another Method"
                </button>
                <button class="button" on:click=move |_| ctx.continue_shopping()>
                    "Continue Shopping"
                </button>
                <button class="button cancel" on:click=move |_| ctx.exit_shopping()>
                    "Exit"
                </button>
            </div>
        </div>
    }
}
