//! Banking Callbacks

use serde::Serialize;

use super::post_json;
use crate::amount::BankAction;

#[derive(Serialize)]
struct BankingActionArgs {
    action: &'static str,
    amount: u32,
}

/// Deposit or withdrawal amount confirmed through the amount window
pub async fn banking_action(action: BankAction, amount: u32) {
    post_json(
        "bankingAction",
        &BankingActionArgs {
            action: action.endpoint_value(),
            amount,
        },
    )
    .await;
}
