//! Shop Callbacks
//!
//! Checkout submission and the fresh balance/tax lookups the payment-method
//! screen depends on. Balances are never cached: a prior purchase may have
//! changed them.

use serde::Serialize;

use super::{endpoint_url, post, post_for_json};
use crate::models::{Balances, CartLine, PaymentMethod, TaxRates};

#[derive(Serialize)]
struct CheckoutArgs<'a> {
    items: &'a [CartLine],
    total: f64,
    #[serde(rename = "paymentMethod")]
    payment_method: PaymentMethod,
}

/// Submit the cart for debiting. The host answers the HTTP call when it has
/// processed the purchase; transport failure is the failure branch of the
/// payment flow.
pub async fn shop_checkout(
    items: &[CartLine],
    total: f64,
    payment_method: PaymentMethod,
) -> Result<(), String> {
    let args = CheckoutArgs {
        items,
        total,
        payment_method,
    };
    reqwest::Client::new()
        .post(endpoint_url("shopCheckout"))
        .json(&args)
        .send()
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Per-method tax rates; `false` on the wire means untaxed
pub async fn get_tax_rates() -> Result<TaxRates, String> {
    post_for_json("getTaxRates", &serde_json::json!({})).await
}

/// Fresh player balances
pub async fn get_player_balances() -> Result<Balances, String> {
    post_for_json("getPlayerBalances", &serde_json::json!({})).await
}

/// Fired after a successful purchase once the shop view is rebuilt and a
/// new purchase may begin.
pub async fn shop_ready_for_new_purchase() {
    post("shopReadyForNewPurchase").await;
}
