//! Overlay Models
//!
//! Data structures matching the host-side payloads.

use serde::{Deserialize, Serialize};

/// One entry of a list/submenu panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub submenu: bool,
    #[serde(default, rename = "isBack")]
    pub is_back: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ListItem {
    /// Fail-soft placeholder rendered when the host sends a malformed item list
    pub fn error_placeholder(label: &str) -> Self {
        Self {
            label: label.to_string(),
            description: Some("Please report this issue".to_string()),
            icon: None,
            disabled: true,
            submenu: false,
            is_back: false,
            price: None,
        }
    }

    pub fn kind(&self) -> ListItemKind {
        if self.submenu {
            ListItemKind::Submenu
        } else if self.is_back {
            ListItemKind::Back
        } else {
            ListItemKind::Plain
        }
    }
}

/// Role of a list item, derived from its flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListItemKind {
    /// Closes the panel and emits the selection
    Plain,
    /// Keeps the panel open, pushes a menu frame
    Submenu,
    /// Pops one menu frame
    Back,
}

/// Shop category (sidebar entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopCategory {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Item offered by a shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, rename = "inventoryName", skip_serializing_if = "Option::is_none")]
    pub inventory_name: Option<String>,
}

/// One line of the shopping cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub quantity: u32,
    #[serde(rename = "inventoryName")]
    pub inventory_name: String,
}

/// Payment method offered at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Bank,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Cash, PaymentMethod::Bank];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Bank => "Bank",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "💵",
            PaymentMethod::Bank => "🏦",
        }
    }
}

/// Player balances, fetched fresh on every payment-method screen
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
pub struct Balances {
    #[serde(default)]
    pub cash: f64,
    #[serde(default)]
    pub bank: f64,
}

impl Balances {
    pub fn of(&self, method: PaymentMethod) -> f64 {
        match method {
            PaymentMethod::Cash => self.cash,
            PaymentMethod::Bank => self.bank,
        }
    }
}

/// Per-method tax rates in percent; `None` means no tax for that method.
/// Wire form is `{cash: number|false, bank: number|false}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaxRates {
    pub cash: Option<f64>,
    pub bank: Option<f64>,
}

impl TaxRates {
    pub fn of(&self, method: PaymentMethod) -> Option<f64> {
        match method {
            PaymentMethod::Cash => self.cash,
            PaymentMethod::Bank => self.bank,
        }
    }
}

impl<'de> Deserialize<'de> for TaxRates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RateField {
            Rate(f64),
            Disabled(bool),
        }

        fn to_rate(field: Option<RateField>) -> Option<f64> {
            match field {
                Some(RateField::Rate(r)) => Some(r),
                _ => None,
            }
        }

        #[derive(Deserialize)]
        struct Wire {
            #[serde(default)]
            cash: Option<RateField>,
            #[serde(default)]
            bank: Option<RateField>,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(TaxRates {
            cash: to_rate(wire.cash),
            bank: to_rate(wire.bank),
        })
    }
}

/// Banking transaction kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Deposit,
    Withdraw,
    Transfer,
}

impl TxKind {
    pub fn css_class(self) -> &'static str {
        match self {
            TxKind::Deposit => "deposit",
            TxKind::Withdraw => "withdraw",
            TxKind::Transfer => "transfer",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TxKind::Deposit => "📥",
            TxKind::Withdraw => "📤",
            TxKind::Transfer => "↔️",
        }
    }

    /// Sign prefix shown next to the amount
    pub fn prefix(self) -> &'static str {
        match self {
            TxKind::Deposit => "+",
            TxKind::Withdraw | TxKind::Transfer => "-",
        }
    }
}

/// Banking transaction as sent by the host (or synthesized locally)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: f64,
    pub date: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}

/// Screen corner the toast stack is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ScreenCorner {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl ScreenCorner {
    pub const ALL: [ScreenCorner; 4] = [
        ScreenCorner::TopRight,
        ScreenCorner::TopLeft,
        ScreenCorner::BottomRight,
        ScreenCorner::BottomLeft,
    ];

    pub fn css_class(self) -> &'static str {
        match self {
            ScreenCorner::TopRight => "corner-top-right",
            ScreenCorner::TopLeft => "corner-top-left",
            ScreenCorner::BottomRight => "corner-bottom-right",
            ScreenCorner::BottomLeft => "corner-bottom-left",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScreenCorner::TopRight => "Top Right",
            ScreenCorner::TopLeft => "Top Left",
            ScreenCorner::BottomRight => "Bottom Right",
            ScreenCorner::BottomLeft => "Bottom Left",
        }
    }

    pub fn storage_value(self) -> &'static str {
        match self {
            ScreenCorner::TopRight => "top-right",
            ScreenCorner::TopLeft => "top-left",
            ScreenCorner::BottomRight => "bottom-right",
            ScreenCorner::BottomLeft => "bottom-left",
        }
    }

    pub fn from_storage_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.storage_value() == value)
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a dollar amount with thousands separators, no cents (`1234567` → `1,234,567`)
pub fn format_money(amount: f64) -> String {
    let grouped = group_digits(amount.abs().trunc() as u64);
    if amount < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a dollar amount with two decimals and thousands separators
pub fn format_currency(amount: f64) -> String {
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!(
        "{sign}{}.{:02}",
        group_digits(total_cents / 100),
        total_cents % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_rates_decode_number_or_false() {
        let rates: TaxRates = serde_json::from_str(r#"{"cash": 7.5, "bank": false}"#).unwrap();
        assert_eq!(rates.cash, Some(7.5));
        assert_eq!(rates.bank, None);

        let rates: TaxRates = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(rates.cash, None);
        assert_eq!(rates.bank, None);
    }

    #[test]
    fn list_item_kind_from_flags() {
        let mut item = ListItem::error_placeholder("x");
        assert_eq!(item.kind(), ListItemKind::Plain);
        item.submenu = true;
        assert_eq!(item.kind(), ListItemKind::Submenu);
        item.submenu = false;
        item.is_back = true;
        assert_eq!(item.kind(), ListItemKind::Back);
    }

    #[test]
    fn money_formatting_groups_thousands() {
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(999.0), "999");
        assert_eq!(format_money(1000.0), "1,000");
        assert_eq!(format_money(1234567.0), "1,234,567");
        assert_eq!(format_currency(2500.5), "2,500.50");
    }
}
