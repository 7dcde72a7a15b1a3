//! Menu Callbacks
//!
//! Selections and closures of the amount, list and dropdown panels.

use serde::Serialize;

use super::{post, post_json, CLOSE};
use crate::models::ListItem;

#[derive(Serialize)]
struct AmountArgs {
    amount: u32,
}

#[derive(Serialize)]
struct SelectionArgs<'a> {
    index: usize,
    item: &'a ListItem,
}

#[derive(Serialize)]
struct DropdownArgs<'a> {
    index: usize,
    value: &'a str,
}

/// Confirmed amount from the amount panel
pub async fn amount_submit(amount: u32) {
    post_json("amountSubmit", &AmountArgs { amount }).await;
}

/// Plain list selection; sent only after the close animation completed
pub async fn list_select(index: usize, item: &ListItem) {
    post_json("listSelect", &SelectionArgs { index, item }).await;
}

/// Submenu entered; the panel stays open
pub async fn submenu_select(index: usize, item: &ListItem) {
    post_json("submenuSelect", &SelectionArgs { index, item }).await;
}

/// Back-navigation out of a submenu
pub async fn submenu_back() {
    post("submenuBack").await;
}

/// Dropdown choice confirmed
pub async fn dropdown_select(index: usize, value: &str) {
    post_json("dropdownSelect", &DropdownArgs { index, value }).await;
}

/// Generic close / host focus release
pub async fn close() {
    post(CLOSE).await;
}

/// Tell the interaction-prompt collaborator whether any overlay window is
/// visible.
pub async fn ui_visibility_changed(visible: bool) {
    #[derive(Serialize)]
    struct Args {
        visible: bool,
    }
    post_json("uiVisibilityChanged", &Args { visible }).await;
}
