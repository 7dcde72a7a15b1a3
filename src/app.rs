//! Overlay App
//!
//! Wires the host listeners to the session controller and mounts every
//! panel plus the toast stack. Panels stay mounted; the registry decides
//! what is visible.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::banking::{sample_transactions, BankingSession};
use crate::checkout::ShopSession;
use crate::components::{
    AmountPanel, BankingPanel, DropdownPanel, ListPanel, NotificationStack, SettingsPanel,
    ShopPanel, StatementPanel, TransferPanel,
};
use crate::context::UiContext;
use crate::notify::NotificationSpec;
use crate::protocol::HostCommand;
use crate::storage;
use crate::store::{UiState, UiStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Preferences are read once at startup
    let preferences = storage::load_preferences();
    let store = Store::new(UiState::from_snapshot(&preferences));
    provide_context(store);

    let ctx = UiContext::new(
        signal(Default::default()),
        signal(Default::default()),
        signal(Default::default()),
        signal(Default::default()),
        signal(Default::default()),
        signal(Default::default()),
        signal(Default::default()),
        signal(None),
        store,
    );
    provide_context(ctx);

    bind_host_listeners(ctx);

    view! {
        <div class=move || {
            if store.dark_mode().get() {
                "overlay-root dark-mode"
            } else {
                "overlay-root"
            }
        }>
            <AmountPanel />
            <ListPanel />
            <DropdownPanel />
            <SettingsPanel />
            <BankingPanel />
            <TransferPanel />
            <StatementPanel />
            <ShopPanel />
            <NotificationStack />
        </div>
    }
}

/// Bind the `message` command listener and the single global escape
/// handler. Both are installed once for the app lifetime and dispatch on
/// current state, so nothing accumulates across open/close cycles.
fn bind_host_listeners(ctx: UiContext) {
    let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
        move |event: web_sys::MessageEvent| {
            match serde_wasm_bindgen::from_value::<HostCommand>(event.data()) {
                Ok(command) => handle_command(ctx, command),
                Err(err) => {
                    web_sys::console::warn_1(&format!("unhandled message event: {err}").into());
                }
            }
        },
    );
    let on_keyup =
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                ctx.escape_pressed();
            }
        });

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref());
        if let Some(document) = window.document() {
            let _ = document
                .add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref());
        }
    }
    on_message.forget();
    on_keyup.forget();
}

/// Exhaustive dispatch over the host command set
pub fn handle_command(ctx: UiContext, command: HostCommand) {
    match command {
        HostCommand::ShowAmount {
            title,
            initial_amount,
        } => {
            ctx.open_amount(title, initial_amount, Default::default());
        }
        HostCommand::ShowList {
            title,
            items,
            is_submenu,
        } => {
            ctx.show_list(title, items, is_submenu);
        }
        HostCommand::ShowDropdown {
            title,
            options,
            selected_index,
        } => {
            ctx.open_dropdown(title, options, selected_index);
        }
        HostCommand::ShowSettings => ctx.open_settings(),
        HostCommand::ShowShop {
            title,
            categories,
            items,
        } => {
            ctx.open_shop(ShopSession::open(title, categories, items));
        }
        HostCommand::ShowBanking {
            bank_name,
            account_holder,
            account_number,
            cash,
            bank,
            transactions,
        } => {
            ctx.open_banking(BankingSession {
                bank_name: bank_name.unwrap_or_default(),
                account_holder: account_holder.unwrap_or_default(),
                account_number: account_number.unwrap_or_default(),
                cash,
                bank,
                transactions: transactions.unwrap_or_else(sample_transactions),
                pending: Vec::new(),
            });
        }
        HostCommand::ShowNotification {
            notification_type,
            title,
            message,
            duration,
            icon,
            closable,
        } => {
            ctx.notify(NotificationSpec {
                kind: notification_type,
                title,
                message,
                duration_ms: duration,
                icon,
                closable,
            });
        }
        HostCommand::ToggleDarkMode => ctx.toggle_dark_mode(),
        HostCommand::Hide => ctx.close_ui(),
    }
}
