//! Inbound Host Protocol
//!
//! Commands arrive as `message` events whose data is a tagged object
//! `{type: "...", ...}`. The tag set is closed: decoding dispatches over an
//! exhaustive enum instead of a handler table, and malformed payloads
//! degrade instead of throwing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::{ListItem, NotificationKind, ShopCategory, ShopItem, Transaction};

/// Every command the host can send
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    #[serde(rename = "showAmount")]
    ShowAmount {
        title: String,
        #[serde(default, rename = "initialAmount")]
        initial_amount: Option<u32>,
    },
    #[serde(rename = "showList")]
    ShowList {
        title: String,
        #[serde(default = "missing_items", deserialize_with = "lenient_items")]
        items: Vec<ListItem>,
        #[serde(default, rename = "isSubmenu")]
        is_submenu: bool,
    },
    #[serde(rename = "showDropdown")]
    ShowDropdown {
        title: String,
        #[serde(default)]
        options: Vec<String>,
        #[serde(default, rename = "selectedIndex")]
        selected_index: Option<usize>,
    },
    #[serde(rename = "showSettings")]
    ShowSettings,
    #[serde(rename = "showShop")]
    ShowShop {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        categories: Vec<ShopCategory>,
        #[serde(default)]
        items: Vec<ShopItem>,
    },
    #[serde(rename = "showBanking")]
    ShowBanking {
        #[serde(default, rename = "bankName")]
        bank_name: Option<String>,
        #[serde(default, rename = "accountHolder")]
        account_holder: Option<String>,
        #[serde(default, rename = "accountNumber")]
        account_number: Option<String>,
        #[serde(default)]
        cash: f64,
        #[serde(default)]
        bank: f64,
        #[serde(default)]
        transactions: Option<Vec<Transaction>>,
    },
    #[serde(rename = "showNotification")]
    ShowNotification {
        #[serde(default, rename = "notificationType")]
        notification_type: NotificationKind,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        duration: Option<u32>,
        #[serde(default)]
        icon: Option<String>,
        #[serde(default)]
        closable: Option<bool>,
    },
    #[serde(rename = "toggleDarkMode")]
    ToggleDarkMode,
    #[serde(rename = "hide")]
    Hide,
}

/// Accept a proper item array, unwrap `{items: [...]}` envelopes some host
/// versions send, and degrade anything else to a disabled error item so the
/// panel still opens.
fn lenient_items<'de, D>(deserializer: D) -> Result<Vec<ListItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_items(value))
}

fn missing_items() -> Vec<ListItem> {
    vec![ListItem::error_placeholder("Error: No menu items")]
}

pub fn coerce_items(value: Value) -> Vec<ListItem> {
    let array = match value {
        Value::Array(array) => array,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(array)) => array,
            _ => return vec![ListItem::error_placeholder("Error: Invalid menu data")],
        },
        _ => return missing_items(),
    };
    if array.is_empty() {
        // An empty array is a proper sequence; render an empty list
        return Vec::new();
    }
    let items: Vec<ListItem> = array
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();
    if items.is_empty() {
        vec![ListItem::error_placeholder("Error: Invalid menu data")]
    } else {
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: Value) -> HostCommand {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn show_amount_decodes_with_optional_initial() {
        match decode(json!({"type": "showAmount", "title": "Enter Amount"})) {
            HostCommand::ShowAmount {
                title,
                initial_amount,
            } => {
                assert_eq!(title, "Enter Amount");
                assert_eq!(initial_amount, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        match decode(json!({"type": "showAmount", "title": "T", "initialAmount": 5})) {
            HostCommand::ShowAmount { initial_amount, .. } => {
                assert_eq!(initial_amount, Some(5))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_list_decodes_items_in_order() {
        let cmd = decode(json!({
            "type": "showList",
            "title": "Menu",
            "items": [
                {"label": "A", "submenu": true},
                {"label": "B", "disabled": true},
                {"label": "Back", "isBack": true}
            ],
            "isSubmenu": true
        }));
        match cmd {
            HostCommand::ShowList {
                items, is_submenu, ..
            } => {
                assert!(is_submenu);
                assert_eq!(items.len(), 3);
                assert_eq!(items[0].label, "A");
                assert!(items[0].submenu);
                assert!(items[1].disabled);
                assert!(items[2].is_back);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn malformed_list_payload_degrades_to_placeholder() {
        let cmd = decode(json!({
            "type": "showList",
            "title": "X",
            "items": {"notAnArray": true}
        }));
        match cmd {
            HostCommand::ShowList { items, .. } => {
                assert_eq!(items.len(), 1);
                assert!(items[0].disabled);
                assert!(items[0].label.starts_with("Error:"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn wrapped_items_object_is_unwrapped() {
        let items = coerce_items(json!({"items": [{"label": "A"}]}));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "A");
        assert!(!items[0].disabled);
    }

    #[test]
    fn absent_items_decode_to_placeholder() {
        let cmd = decode(json!({"type": "showList", "title": "X"}));
        match cmd {
            HostCommand::ShowList { items, .. } => {
                assert_eq!(items.len(), 1);
                assert!(items[0].disabled);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        let items = coerce_items(json!(null));
        assert_eq!(items.len(), 1);
        assert!(items[0].disabled);
    }

    #[test]
    fn empty_item_array_stays_empty() {
        let items = coerce_items(json!([]));
        assert!(items.is_empty());
    }

    #[test]
    fn unknown_command_type_is_an_error_not_a_panic() {
        let result: Result<HostCommand, _> =
            serde_json::from_value(json!({"type": "selfDestruct"}));
        assert!(result.is_err());
    }

    #[test]
    fn show_notification_applies_serde_defaults() {
        let cmd = decode(json!({
            "type": "showNotification",
            "notificationType": "error",
            "title": "Oops",
            "message": "Something broke"
        }));
        match cmd {
            HostCommand::ShowNotification {
                notification_type,
                duration,
                closable,
                ..
            } => {
                assert_eq!(notification_type, NotificationKind::Error);
                assert_eq!(duration, None);
                assert_eq!(closable, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_banking_tolerates_missing_fields() {
        let cmd = decode(json!({"type": "showBanking", "cash": 100, "bank": 2500}));
        match cmd {
            HostCommand::ShowBanking {
                bank_name,
                cash,
                bank,
                transactions,
                ..
            } => {
                assert_eq!(bank_name, None);
                assert_eq!(cash, 100.0);
                assert_eq!(bank, 2500.0);
                assert_eq!(transactions, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
