//! Overlay Session Controller
//!
//! All session state lives here as explicit signals owned by one
//! controller, provided via the Leptos Context API. The methods are the
//! only place panel choreography happens: animation completion scheduling,
//! host callbacks, focus release and toast timers, so components stay
//! declarative.

use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_time::Instant;

use crate::amount::{AmountSession, AmountTarget, BankAction};
use crate::banking::BankingSession;
use crate::checkout::{both_methods_insufficient, remaining_dwell, ShopSession};
use crate::commands;
use crate::dropdown::DropdownSession;
use crate::menu::{ConfirmAction, EscapeAction, MenuState, SelectOutcome};
use crate::models::{
    NotificationKind, PaymentMethod, ScreenCorner, ShopItem, Transaction, TxKind,
};
use crate::notify::{NotificationRegistry, NotificationSpec, EXIT_ANIMATION_MS};
use crate::panels::{
    AnimationPhase, CloseOutcome, HideAllOutcome, PanelId, PanelRegistry, ShowOutcome, ANIMATION,
};
use crate::settings::SettingsSnapshot;
use crate::storage;
use crate::store::{apply_snapshot, snapshot_of, UiStateStoreFields, UiStore};

/// App-wide session state and the controller methods over it
#[derive(Clone, Copy)]
pub struct UiContext {
    pub registry: ReadSignal<PanelRegistry>,
    set_registry: WriteSignal<PanelRegistry>,
    pub menu: ReadSignal<MenuState>,
    set_menu: WriteSignal<MenuState>,
    pub amount: ReadSignal<AmountSession>,
    set_amount: WriteSignal<AmountSession>,
    pub dropdown: ReadSignal<DropdownSession>,
    set_dropdown: WriteSignal<DropdownSession>,
    pub banking: ReadSignal<BankingSession>,
    set_banking: WriteSignal<BankingSession>,
    pub shop: ReadSignal<ShopSession>,
    set_shop: WriteSignal<ShopSession>,
    pub toasts: ReadSignal<NotificationRegistry>,
    set_toasts: WriteSignal<NotificationRegistry>,
    settings_snapshot: ReadSignal<Option<SettingsSnapshot>>,
    set_settings_snapshot: WriteSignal<Option<SettingsSnapshot>>,
    pub store: UiStore,
}

impl UiContext {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry: (ReadSignal<PanelRegistry>, WriteSignal<PanelRegistry>),
        menu: (ReadSignal<MenuState>, WriteSignal<MenuState>),
        amount: (ReadSignal<AmountSession>, WriteSignal<AmountSession>),
        dropdown: (ReadSignal<DropdownSession>, WriteSignal<DropdownSession>),
        banking: (ReadSignal<BankingSession>, WriteSignal<BankingSession>),
        shop: (ReadSignal<ShopSession>, WriteSignal<ShopSession>),
        toasts: (ReadSignal<NotificationRegistry>, WriteSignal<NotificationRegistry>),
        settings_snapshot: (
            ReadSignal<Option<SettingsSnapshot>>,
            WriteSignal<Option<SettingsSnapshot>>,
        ),
        store: UiStore,
    ) -> Self {
        Self {
            registry: registry.0,
            set_registry: registry.1,
            menu: menu.0,
            set_menu: menu.1,
            amount: amount.0,
            set_amount: amount.1,
            dropdown: dropdown.0,
            set_dropdown: dropdown.1,
            banking: banking.0,
            set_banking: banking.1,
            shop: shop.0,
            set_shop: shop.1,
            toasts: toasts.0,
            set_toasts: toasts.1,
            settings_snapshot: settings_snapshot.0,
            set_settings_snapshot: settings_snapshot.1,
            store,
        }
    }

    // ========================
    // Panel registry choreography
    // ========================

    fn emit_visibility(&self, visible: bool) {
        spawn_local(commands::ui_visibility_changed(visible));
    }

    fn schedule_finish_open(&self, id: PanelId) {
        let set_registry = self.set_registry;
        spawn_local(async move {
            TimeoutFuture::new(ANIMATION.as_millis() as u32).await;
            set_registry.try_update(|r| r.finish_open(id));
        });
    }

    fn schedule_finish_close(&self, id: PanelId) {
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(ANIMATION.as_millis() as u32).await;
            this.set_registry.try_update(|r| r.finish_close(id));
            this.teardown_if_closed(id);
        });
    }

    /// Per-panel cleanup once a close animation completed and the panel was
    /// not reopened in the meantime.
    fn teardown_if_closed(&self, id: PanelId) {
        if self.registry.get_untracked().phase_of(id) != AnimationPhase::Closed {
            return;
        }
        if let PanelId::List = id {
            // The submenu stack dies with the panel
            self.set_menu.try_update(|m| m.clear());
        }
    }

    /// Activate a panel, animating the displaced one out
    pub fn open_panel(&self, id: PanelId) {
        let Some(outcome) = self.set_registry.try_update(|r| r.show(id)) else {
            return;
        };
        match outcome {
            ShowOutcome::AlreadyActive => {}
            ShowOutcome::Opened {
                closing,
                became_visible,
            } => {
                if became_visible {
                    self.emit_visibility(true);
                }
                self.schedule_finish_open(id);
                if let Some(prev) = closing {
                    self.schedule_finish_close(prev);
                }
            }
        }
    }

    /// Close the active panel and run `after` once the close animation has
    /// completed; selections race host-side teardown otherwise.
    pub fn close_active_then<Fut>(&self, after: Fut)
    where
        Fut: Future<Output = ()> + 'static,
    {
        let Some(id) = self.registry.get_untracked().active_id() else {
            return;
        };
        let Some(CloseOutcome::Closing { became_hidden }) =
            self.set_registry.try_update(|r| r.begin_close(id))
        else {
            return;
        };
        if became_hidden {
            self.emit_visibility(false);
        }
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(ANIMATION.as_millis() as u32).await;
            this.set_registry.try_update(|r| r.finish_close(id));
            this.teardown_if_closed(id);
            after.await;
        });
    }

    /// Generic close: hides whatever is open and releases host focus.
    /// Refused while the active window is being dragged.
    pub fn close_ui(&self) {
        let Some(outcome) = self.set_registry.try_update(|r| r.hide_all()) else {
            return;
        };
        match outcome {
            HideAllOutcome::RejectedDragging => {}
            HideAllOutcome::NothingOpen => {
                spawn_local(commands::close());
            }
            HideAllOutcome::Hidden { closing } => {
                self.emit_visibility(false);
                self.schedule_finish_close(closing);
                spawn_local(commands::close());
            }
        }
    }

    /// Mirror of the drag state, read by the `hide_all` guard
    pub fn set_dragging(&self, dragging: bool) {
        self.set_registry.try_update(|r| r.set_dragging(dragging));
    }

    // ========================
    // Escape dispatch
    // ========================

    /// One global keyup listener dispatches here; panels never stack their
    /// own escape handlers.
    pub fn escape_pressed(&self) {
        let active = self.registry.get_untracked().active_id();
        match active {
            None => {}
            Some(PanelId::List) => match self.menu.get_untracked().escape() {
                EscapeAction::SelectBack(index) => self.list_click(index),
                EscapeAction::Close => self.close_ui(),
            },
            Some(PanelId::Dropdown) => {
                if self
                    .set_dropdown
                    .try_update(|d| d.escape_collapses_list())
                    != Some(true)
                {
                    self.close_ui();
                }
            }
            Some(PanelId::Settings) => self.cancel_settings(),
            Some(PanelId::Shop) => self.exit_shopping(),
            Some(PanelId::Transfer) => self.close_transfer(),
            Some(PanelId::Amount | PanelId::Banking | PanelId::Statement) => self.close_ui(),
        }
    }

    // ========================
    // Notifications
    // ========================

    /// Register a toast and start its auto-close timer
    pub fn notify(&self, spec: NotificationSpec) {
        let Some((id, evicted)) = self.set_toasts.try_update(|n| n.create(spec)) else {
            return;
        };
        if let Some(old) = evicted {
            self.finish_toast_later(old);
        }
        let duration = self
            .toasts
            .get_untracked()
            .toasts()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.duration_ms)
            .unwrap_or_default();
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            // A manual close in the meantime makes this a no-op
            if this.set_toasts.try_update(|n| n.begin_close(id)) == Some(true) {
                this.finish_toast_later(id);
            }
        });
    }

    pub fn notify_simple(
        &self,
        kind: NotificationKind,
        title: &str,
        message: &str,
        duration_ms: u32,
    ) {
        self.notify(NotificationSpec::new(kind, title, message, duration_ms));
    }

    /// Close button on a toast; idempotent
    pub fn close_toast(&self, id: u64) {
        if self.set_toasts.try_update(|n| n.begin_close(id)) == Some(true) {
            self.finish_toast_later(id);
        }
    }

    fn finish_toast_later(&self, id: u64) {
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(EXIT_ANIMATION_MS).await;
            set_toasts.try_update(|n| n.finish_close(id));
        });
    }

    // ========================
    // Amount panel
    // ========================

    pub fn open_amount(&self, title: String, initial: Option<u32>, target: AmountTarget) {
        self.set_amount
            .try_update(|a| *a = AmountSession::open(title, initial, target));
        self.open_panel(PanelId::Amount);
    }

    pub fn amount_step(&self, delta: i64) {
        self.set_amount.try_update(|a| a.step(delta));
    }

    pub fn amount_input(&self, raw: &str) {
        self.set_amount.try_update(|a| a.set_from_input(raw));
    }

    /// Confirm button and the Enter key share this path
    pub fn submit_amount(&self) {
        let session = self.amount.get_untracked();
        if !session.submittable() {
            return;
        }
        let value = session.value;
        match session.target {
            AmountTarget::Submit => {
                self.close_active_then(async move { commands::amount_submit(value).await });
            }
            AmountTarget::Banking(action) => {
                self.close_active_then(async move {
                    commands::banking_action(action, value).await;
                });
                self.notify_banking_action(action, value);
            }
        }
    }

    fn notify_banking_action(&self, action: BankAction, amount: u32) {
        let amount = crate::models::format_currency(amount as f64);
        let (title, message) = match action {
            BankAction::Deposit => (
                "Deposit Successful",
                format!("Successfully deposited ${amount} to your checking account."),
            ),
            BankAction::Withdraw => (
                "Withdrawal Successful",
                format!("Successfully withdrew ${amount} from your checking account."),
            ),
        };
        self.notify_simple(NotificationKind::Success, title, &message, 4_000);
    }

    // ========================
    // List panel
    // ========================

    pub fn show_list(&self, title: String, items: Vec<crate::models::ListItem>, is_submenu: bool) {
        if is_submenu {
            // In-place re-render: no animation restart, no focus churn
            self.set_menu.try_update(|m| m.show_submenu(title, items));
        } else {
            self.set_menu.try_update(|m| m.show_root(title, items));
        }
        self.open_panel(PanelId::List);
    }

    pub fn list_click(&self, index: usize) {
        let Some(outcome) = self.set_menu.try_update(|m| m.select(index)) else {
            return;
        };
        match outcome {
            SelectOutcome::Ignored | SelectOutcome::Marked => {}
            SelectOutcome::AutoConfirm(action) => self.dispatch_menu_action(action),
        }
    }

    /// Submit button: dispatch the marked selection, or close when nothing
    /// is selected.
    pub fn confirm_list_selection(&self) {
        match self.set_menu.try_update(|m| m.confirm()).flatten() {
            Some(action) => self.dispatch_menu_action(action),
            None => self.close_ui(),
        }
    }

    fn dispatch_menu_action(&self, action: ConfirmAction) {
        match action {
            ConfirmAction::Plain { index, item } => {
                self.close_active_then(async move {
                    commands::list_select(index, &item).await;
                });
            }
            ConfirmAction::Submenu { index, item } => {
                spawn_local(async move {
                    commands::submenu_select(index, &item).await;
                });
            }
            ConfirmAction::Back => {
                spawn_local(commands::submenu_back());
            }
        }
    }

    // ========================
    // Dropdown panel
    // ========================

    pub fn open_dropdown(&self, title: String, options: Vec<String>, selected: Option<usize>) {
        self.set_dropdown
            .try_update(|d| *d = DropdownSession::open(title, options, selected));
        self.open_panel(PanelId::Dropdown);
    }

    pub fn dropdown_toggle_list(&self) {
        self.set_dropdown.try_update(|d| d.toggle_list());
    }

    pub fn dropdown_choose(&self, index: usize) {
        self.set_dropdown.try_update(|d| d.choose(index));
    }

    pub fn submit_dropdown(&self) {
        match self.dropdown.get_untracked().submission() {
            Some((index, value)) => {
                let value = value.to_string();
                self.close_active_then(async move {
                    commands::dropdown_select(index, &value).await;
                });
            }
            None => self.close_ui(),
        }
    }

    // ========================
    // Settings panel
    // ========================

    pub fn open_settings(&self) {
        let snapshot = snapshot_of(&self.store);
        self.set_settings_snapshot.try_update(|s| *s = Some(snapshot));
        self.open_panel(PanelId::Settings);
    }

    /// Persist the previewed values and mirror them to the host
    pub fn save_settings(&self) {
        let current = snapshot_of(&self.store);
        storage::save_preferences(&current);
        spawn_local(async move {
            commands::dark_mode_changed(current.dark_mode).await;
            commands::opacity_changed(current.opacity).await;
            commands::free_drag_changed(current.free_drag).await;
            commands::notification_position_changed(current.notification_position).await;
        });
        self.set_settings_snapshot.try_update(|s| *s = None);
        self.close_ui();
    }

    /// Revert every previewed change to the open-time snapshot
    pub fn cancel_settings(&self) {
        if let Some(snapshot) = self.settings_snapshot.get_untracked() {
            apply_snapshot(&self.store, &snapshot);
        }
        self.set_settings_snapshot.try_update(|s| *s = None);
        self.close_ui();
    }

    /// Host-driven dark-mode flip; persists immediately
    pub fn toggle_dark_mode(&self) {
        let store = self.store;
        let enabled = !store.dark_mode().get_untracked();
        store.dark_mode().set(enabled);
        storage::save_dark_mode(enabled);
        spawn_local(commands::dark_mode_changed(enabled));
    }

    pub fn set_notification_position(&self, corner: ScreenCorner) {
        self.store.notification_position().set(corner);
    }

    // ========================
    // Banking panels
    // ========================

    pub fn open_banking(&self, session: BankingSession) {
        self.set_banking.try_update(|b| *b = session);
        self.open_panel(PanelId::Banking);
    }

    pub fn banking_amount_action(&self, action: BankAction) {
        self.open_amount(action.title().to_string(), None, AmountTarget::Banking(action));
    }

    pub fn open_transfer(&self) {
        self.open_panel(PanelId::Transfer);
    }

    /// Leave the transfer window, folding completed transfers into the
    /// overview history.
    pub fn close_transfer(&self) {
        self.set_banking.try_update(|b| b.absorb_pending());
        self.open_panel(PanelId::Banking);
    }

    pub fn open_statement(&self) {
        self.open_panel(PanelId::Statement);
    }

    /// Record a completed transfer: the overview balance drops immediately
    /// and the transaction joins the history once the transfer window
    /// closes.
    pub fn record_transfer(&self, request: &crate::banking::TransferRequest, date: String) {
        let tx = Transaction {
            kind: TxKind::Transfer,
            amount: request.amount,
            date,
            description: format!("Transfer to ID: {}", request.recipient_id),
            category: Some("transfer".to_string()),
            balance: None,
        };
        let amount = request.amount;
        self.set_banking.try_update(|b| {
            b.bank -= amount;
            b.pending.push(tx);
        });
    }

    pub fn statement_back(&self) {
        self.open_panel(PanelId::Banking);
    }

    // ========================
    // Shop and payment flow
    // ========================

    pub fn open_shop(&self, session: ShopSession) {
        self.set_shop.try_update(|s| *s = session);
        self.open_panel(PanelId::Shop);
    }

    pub fn add_to_cart(&self, item: &ShopItem) {
        let name = item.name.clone();
        self.set_shop.try_update(|s| s.cart.add(item));
        self.notify_simple(
            NotificationKind::Success,
            "Added to Cart",
            &format!("Added {name} to your cart"),
            2_000,
        );
    }

    pub fn remove_cart_line(&self, id: &str) {
        self.set_shop.try_update(|s| s.cart.remove(id));
    }

    pub fn adjust_cart_quantity(&self, id: &str, delta: i32) {
        self.set_shop.try_update(|s| s.cart.adjust_quantity(id, delta));
    }

    pub fn clear_cart(&self) {
        self.set_shop.try_update(|s| s.cart.clear());
    }

    pub fn select_category(&self, id: &str) {
        self.set_shop.try_update(|s| s.select_category(id));
    }

    /// Checkout button: enter the payment-method screen and start the fresh
    /// balance/tax lookups.
    pub fn begin_checkout(&self) {
        if self.shop.get_untracked().cart.is_empty() {
            self.notify_simple(
                NotificationKind::Warning,
                "Empty Cart",
                "Your cart is empty",
                3_000,
            );
            return;
        }
        let generation = self
            .set_shop
            .try_update(|s| {
                s.clear_fetched();
                s.flow.begin_checkout()
            })
            .flatten();
        if let Some(generation) = generation {
            self.fetch_payment_data(generation);
        }
    }

    /// Launch the two independent lookups the method screen depends on.
    /// Results stamped with a stale generation are discarded.
    fn fetch_payment_data(&self, generation: u64) {
        let this = *self;
        spawn_local(async move {
            match commands::get_tax_rates().await {
                Ok(rates) => {
                    this.set_shop.try_update(|s| {
                        if s.flow.is_current(generation) {
                            s.tax_rates = Some(rates);
                        }
                    });
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("tax rate fetch failed: {err}").into());
                }
            }
        });
        let this = *self;
        spawn_local(async move {
            match commands::get_player_balances().await {
                Ok(balances) => {
                    let total = this.shop.get_untracked().cart.total();
                    let applied = this
                        .set_shop
                        .try_update(|s| {
                            if s.flow.is_current(generation) {
                                s.balances = Some(balances);
                                true
                            } else {
                                false
                            }
                        })
                        .unwrap_or(false);
                    if applied && both_methods_insufficient(&balances, total) {
                        this.notify_simple(
                            NotificationKind::Error,
                            "Insufficient Funds",
                            "You cannot afford this purchase with any payment method.",
                            5_000,
                        );
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("balance fetch failed: {err}").into());
                    let current = this
                        .shop
                        .with_untracked(|s| s.flow.is_current(generation));
                    if !current {
                        return;
                    }
                    this.notify_simple(
                        NotificationKind::Error,
                        "Error",
                        "Could not retrieve account balances. Please try again.",
                        5_000,
                    );
                    // Short delay, then fall back to the shop screen
                    spawn_local(async move {
                        TimeoutFuture::new(1_000).await;
                        this.set_shop.try_update(|s| {
                            if s.flow.is_current(generation) {
                                s.flow.cancel_payment();
                            }
                        });
                    });
                }
            }
        });
    }

    pub fn cancel_payment(&self) {
        self.set_shop.try_update(|s| s.flow.cancel_payment());
    }

    /// Method button: enter processing, submit the checkout, and leave the
    /// processing screen only once both the host responded and the minimum
    /// dwell elapsed.
    pub fn select_payment_method(&self, method: PaymentMethod) {
        let entered = Instant::now();
        let Some(Some(generation)) = self.set_shop.try_update(|s| {
            if !s.flow.select_method(method) {
                return None;
            }
            s.processing_entered = Some(entered);
            Some(s.flow.generation())
        }) else {
            return;
        };
        let (lines, total) = self
            .shop
            .with_untracked(|s| (s.cart.lines().to_vec(), s.cart.total()));
        let this = *self;
        spawn_local(async move {
            let result = commands::shop_checkout(&lines, total, method).await;
            let wait = remaining_dwell(entered.elapsed());
            if !wait.is_zero() {
                TimeoutFuture::new(wait.as_millis() as u32).await;
            }
            this.set_shop.try_update(|s| {
                if s.flow.is_current(generation) {
                    s.flow.complete(result.is_ok());
                    s.processing_entered = None;
                }
            });
        });
    }

    /// Success-screen continue: rebuild the shop for a new purchase
    pub fn continue_from_success(&self) {
        let ready = self
            .set_shop
            .try_update(|s| {
                s.flow.continue_from_success();
                s.cart.clear();
                s.clear_fetched();
                s.flow.take_purchase_complete()
            })
            .unwrap_or(false);
        if ready {
            spawn_local(commands::shop_ready_for_new_purchase());
            self.notify_simple(
                NotificationKind::Success,
                "Purchase Complete",
                "Your purchase was successful!",
                3_000,
            );
        }
    }

    /// Failure-screen retry: back to method selection with fresh lookups
    pub fn try_another_method(&self) {
        let generation = self
            .set_shop
            .try_update(|s| {
                s.clear_fetched();
                s.flow.try_another_method()
            })
            .flatten();
        if let Some(generation) = generation {
            self.fetch_payment_data(generation);
        }
    }

    pub fn continue_shopping(&self) {
        self.set_shop.try_update(|s| s.flow.continue_shopping());
    }

    /// Full shop teardown: the one place in the whole flow that closes the
    /// panel and releases host focus.
    pub fn exit_shopping(&self) {
        self.set_shop.try_update(|s| {
            s.flow.reset();
            s.cart.clear();
            s.clear_fetched();
            s.processing_entered = None;
        });
        self.close_ui();
    }
}
