//! Overlay Components
//!
//! Leptos views for every panel plus the shared window chrome and the toast
//! stack.

mod amount_panel;
mod banking_panel;
mod dropdown_panel;
mod list_panel;
mod notifications;
mod settings_panel;
mod shop_panel;
mod statement_panel;
mod transfer_panel;
mod window_frame;

pub use amount_panel::AmountPanel;
pub use banking_panel::BankingPanel;
pub use dropdown_panel::DropdownPanel;
pub use list_panel::ListPanel;
pub use notifications::NotificationStack;
pub use settings_panel::SettingsPanel;
pub use shop_panel::ShopPanel;
pub use statement_panel::StatementPanel;
pub use transfer_panel::TransferPanel;
