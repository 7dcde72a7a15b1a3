//! Checkout / Payment Flow
//!
//! Screen sequence shop → payment-method → processing → success|failure.
//! The flow owns a generation counter: every transition that leaves a
//! screen bumps it, and async results (balance/tax fetches, dwell timers)
//! carry the generation they were started under so stale completions are
//! discarded instead of being applied to a screen the user has left.

use web_time::{Duration, Instant};

use crate::cart::Cart;
use crate::models::{Balances, PaymentMethod, ShopCategory, ShopItem, TaxRates};

/// Minimum time the processing screen stays visible, measured from entry,
/// regardless of how fast the host responds.
pub const MIN_PROCESSING_DWELL: Duration = Duration::from_millis(1_500);

/// What the shop window is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowScreen {
    #[default]
    Shop,
    PaymentMethod,
    Processing,
    Success,
    Failure,
}

/// Wait this much longer after the host responds so the processing screen
/// never flashes imperceptibly.
pub fn remaining_dwell(elapsed: Duration) -> Duration {
    MIN_PROCESSING_DWELL.saturating_sub(elapsed)
}

/// Taxed total for display: `total + floor(total * rate / 100)`
pub fn taxed_total(total: f64, rate: Option<f64>) -> f64 {
    match rate {
        Some(rate) => total + (total * rate / 100.0).floor(),
        None => total,
    }
}

/// Availability of one payment method against the cart total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodAvailability {
    /// Balances still in flight; button shows a loading placeholder
    Loading,
    Available,
    InsufficientFunds,
}

pub fn method_availability(
    balances: Option<&Balances>,
    method: PaymentMethod,
    total: f64,
) -> MethodAvailability {
    match balances {
        None => MethodAvailability::Loading,
        Some(b) if b.of(method) < total => MethodAvailability::InsufficientFunds,
        Some(_) => MethodAvailability::Available,
    }
}

/// True when no method can cover the total; fires the single error toast
pub fn both_methods_insufficient(balances: &Balances, total: f64) -> bool {
    PaymentMethod::ALL
        .into_iter()
        .all(|m| balances.of(m) < total)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutFlow {
    screen: FlowScreen,
    selected_method: Option<PaymentMethod>,
    purchase_complete: bool,
    generation: u64,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> FlowScreen {
        self.screen
    }

    pub fn selected_method(&self) -> Option<PaymentMethod> {
        self.selected_method
    }

    /// Generation stamp to attach to an async task started now
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a result stamped with `generation` may still be applied
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    fn transition(&mut self, screen: FlowScreen) {
        self.screen = screen;
        self.generation += 1;
    }

    /// Checkout button: move to the method screen. Fresh balance and tax
    /// fetches are started by the caller under the returned generation.
    /// Rejected with `None` unless the shop screen is showing.
    pub fn begin_checkout(&mut self) -> Option<u64> {
        if self.screen != FlowScreen::Shop {
            return None;
        }
        self.selected_method = None;
        self.transition(FlowScreen::PaymentMethod);
        Some(self.generation)
    }

    /// Cancel on the method screen: back to the shop, in-flight fetches
    /// become stale.
    pub fn cancel_payment(&mut self) {
        if self.screen == FlowScreen::PaymentMethod {
            self.selected_method = None;
            self.transition(FlowScreen::Shop);
        }
    }

    /// Method button: enter processing. The selected method is recorded
    /// here and nowhere earlier.
    pub fn select_method(&mut self, method: PaymentMethod) -> bool {
        if self.screen != FlowScreen::PaymentMethod {
            return false;
        }
        self.selected_method = Some(method);
        self.transition(FlowScreen::Processing);
        true
    }

    /// Host acknowledged (or failed) the checkout and the dwell has
    /// elapsed.
    pub fn complete(&mut self, success: bool) -> bool {
        if self.screen != FlowScreen::Processing {
            return false;
        }
        self.transition(if success {
            FlowScreen::Success
        } else {
            FlowScreen::Failure
        });
        true
    }

    /// Success-screen continue button: back to the shop for a new purchase.
    /// `take_purchase_complete` decides whether the host is told a new
    /// purchase may begin.
    pub fn continue_from_success(&mut self) {
        if self.screen == FlowScreen::Success {
            self.purchase_complete = true;
            self.selected_method = None;
            self.transition(FlowScreen::Shop);
        }
    }

    /// Failure-screen retry: back to method selection with fresh fetches
    pub fn try_another_method(&mut self) -> Option<u64> {
        if self.screen != FlowScreen::Failure {
            return None;
        }
        self.selected_method = None;
        self.transition(FlowScreen::PaymentMethod);
        Some(self.generation)
    }

    /// Failure-screen continue-shopping button
    pub fn continue_shopping(&mut self) {
        if self.screen == FlowScreen::Failure {
            self.selected_method = None;
            self.transition(FlowScreen::Shop);
        }
    }

    /// Consumes the transient purchase-complete flag
    pub fn take_purchase_complete(&mut self) -> bool {
        std::mem::take(&mut self.purchase_complete)
    }

    /// Full teardown on shop exit: every in-flight task becomes stale and
    /// the flow returns to the shop screen.
    pub fn reset(&mut self) {
        self.selected_method = None;
        self.purchase_complete = false;
        self.transition(FlowScreen::Shop);
    }
}

/// Everything one open shop window owns: the catalog, the cart, the payment
/// flow and the fetched balance/tax data of the current method screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopSession {
    pub title: String,
    pub categories: Vec<ShopCategory>,
    pub items: Vec<ShopItem>,
    pub selected_category: Option<String>,
    pub cart: Cart,
    pub flow: CheckoutFlow,
    /// `None` while the fresh fetch is in flight
    pub balances: Option<Balances>,
    pub tax_rates: Option<TaxRates>,
    /// Entry time of the processing screen, for dwell enforcement
    pub processing_entered: Option<Instant>,
}

impl ShopSession {
    /// Fresh session for a `showShop` command; the first category (if any)
    /// starts selected.
    pub fn open(title: Option<String>, categories: Vec<ShopCategory>, items: Vec<ShopItem>) -> Self {
        let selected_category = categories.first().map(|c| c.id.clone());
        Self {
            title: title.unwrap_or_else(|| "Shop".to_string()),
            categories,
            items,
            selected_category,
            ..Default::default()
        }
    }

    pub fn select_category(&mut self, id: &str) {
        if self.categories.iter().any(|c| c.id == id) {
            self.selected_category = Some(id.to_string());
        }
    }

    /// Items of the selected category; all items when there are no
    /// categories.
    pub fn visible_items(&self) -> Vec<&ShopItem> {
        match &self.selected_category {
            None => self.items.iter().collect(),
            Some(cat) => self
                .items
                .iter()
                .filter(|i| i.category.as_deref() == Some(cat))
                .collect(),
        }
    }

    /// Balances and taxes are refetched whenever the method screen is
    /// entered, so the stale copies must not linger.
    pub fn clear_fetched(&mut self) {
        self.balances = None;
        self.tax_rates = None;
    }

    /// Screen title shown in the titlebar, tracking the flow
    pub fn screen_title(&self) -> String {
        match self.flow.screen() {
            FlowScreen::Shop => self.title.clone(),
            FlowScreen::PaymentMethod => "Payment Method".to_string(),
            FlowScreen::Processing => "Processing Payment".to_string(),
            FlowScreen::Success => "Payment Successful".to_string(),
            FlowScreen::Failure => "Payment Failed".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_reaches_success() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.begin_checkout().is_some());
        assert_eq!(flow.screen(), FlowScreen::PaymentMethod);
        assert_eq!(flow.selected_method(), None);
        assert!(flow.select_method(PaymentMethod::Cash));
        assert_eq!(flow.screen(), FlowScreen::Processing);
        assert_eq!(flow.selected_method(), Some(PaymentMethod::Cash));
        assert!(flow.complete(true));
        assert_eq!(flow.screen(), FlowScreen::Success);
    }

    #[test]
    fn selected_method_only_set_from_processing_on() {
        let mut flow = CheckoutFlow::new();
        flow.begin_checkout();
        assert_eq!(flow.selected_method(), None);
        flow.select_method(PaymentMethod::Bank);
        assert_eq!(flow.selected_method(), Some(PaymentMethod::Bank));
    }

    #[test]
    fn checkout_only_starts_from_shop_screen() {
        let mut flow = CheckoutFlow::new();
        flow.begin_checkout();
        assert!(flow.begin_checkout().is_none());
        assert!(!flow.select_method(PaymentMethod::Cash) || flow.screen() == FlowScreen::Processing);
    }

    #[test]
    fn cancel_returns_to_shop_and_invalidates_fetches() {
        let mut flow = CheckoutFlow::new();
        let generation = flow.begin_checkout().unwrap();
        assert!(flow.is_current(generation));
        flow.cancel_payment();
        assert_eq!(flow.screen(), FlowScreen::Shop);
        // The balance fetch launched on the method screen is now stale
        assert!(!flow.is_current(generation));
    }

    #[test]
    fn failure_branches() {
        let mut flow = CheckoutFlow::new();
        flow.begin_checkout();
        flow.select_method(PaymentMethod::Cash);
        flow.complete(false);
        assert_eq!(flow.screen(), FlowScreen::Failure);

        assert!(flow.try_another_method().is_some());
        assert_eq!(flow.screen(), FlowScreen::PaymentMethod);
        assert_eq!(flow.selected_method(), None);

        flow.select_method(PaymentMethod::Bank);
        flow.complete(false);
        flow.continue_shopping();
        assert_eq!(flow.screen(), FlowScreen::Shop);
    }

    #[test]
    fn purchase_complete_is_transient() {
        let mut flow = CheckoutFlow::new();
        flow.begin_checkout();
        flow.select_method(PaymentMethod::Cash);
        flow.complete(true);
        flow.continue_from_success();
        assert_eq!(flow.screen(), FlowScreen::Shop);
        assert!(flow.take_purchase_complete());
        assert!(!flow.take_purchase_complete());
    }

    #[test]
    fn reset_tears_everything_down() {
        let mut flow = CheckoutFlow::new();
        let generation = flow.begin_checkout().unwrap();
        flow.select_method(PaymentMethod::Cash);
        flow.reset();
        assert_eq!(flow.screen(), FlowScreen::Shop);
        assert_eq!(flow.selected_method(), None);
        assert!(!flow.is_current(generation));
        assert!(!flow.take_purchase_complete());
    }

    #[test]
    fn dwell_never_shorter_than_minimum() {
        assert_eq!(
            remaining_dwell(Duration::ZERO),
            MIN_PROCESSING_DWELL
        );
        assert_eq!(
            remaining_dwell(Duration::from_millis(600)),
            Duration::from_millis(900)
        );
        assert_eq!(remaining_dwell(Duration::from_millis(1_500)), Duration::ZERO);
        assert_eq!(remaining_dwell(Duration::from_secs(10)), Duration::ZERO);
    }

    #[test]
    fn taxed_total_floors_the_tax_amount() {
        assert_eq!(taxed_total(10.0, None), 10.0);
        assert_eq!(taxed_total(10.0, Some(7.5)), 10.0); // floor(0.75) = 0
        assert_eq!(taxed_total(100.0, Some(7.5)), 107.0);
        assert_eq!(taxed_total(1000.0, Some(10.0)), 1100.0);
    }

    #[test]
    fn availability_tracks_balances() {
        let total = 10.0;
        assert_eq!(
            method_availability(None, PaymentMethod::Cash, total),
            MethodAvailability::Loading
        );
        let balances = Balances { cash: 3.0, bank: 20.0 };
        assert_eq!(
            method_availability(Some(&balances), PaymentMethod::Cash, total),
            MethodAvailability::InsufficientFunds
        );
        assert_eq!(
            method_availability(Some(&balances), PaymentMethod::Bank, total),
            MethodAvailability::Available
        );
        assert!(!both_methods_insufficient(&balances, total));
        let broke = Balances { cash: 3.0, bank: 2.0 };
        assert!(both_methods_insufficient(&broke, total));
    }

    #[test]
    fn stale_generation_results_are_discarded() {
        let mut flow = CheckoutFlow::new();
        let generation = flow.begin_checkout().unwrap();
        // User leaves the screen before the fetch resolves
        flow.cancel_payment();
        let _ = flow.begin_checkout().unwrap();
        assert!(!flow.is_current(generation));
    }

    fn catalog() -> (Vec<ShopCategory>, Vec<ShopItem>) {
        let cat = |id: &str| ShopCategory {
            id: id.to_string(),
            label: id.to_uppercase(),
            icon: None,
        };
        let item = |id: &str, category: &str| ShopItem {
            id: id.to_string(),
            name: id.to_string(),
            price: 5.0,
            icon: None,
            description: None,
            category: Some(category.to_string()),
            inventory_name: None,
        };
        (
            vec![cat("food"), cat("drink")],
            vec![item("bread", "food"), item("water", "drink"), item("beer", "drink")],
        )
    }

    #[test]
    fn first_category_starts_selected() {
        let (categories, items) = catalog();
        let session = ShopSession::open(Some("Store".into()), categories, items);
        assert_eq!(session.selected_category.as_deref(), Some("food"));
        let visible: Vec<_> = session.visible_items().iter().map(|i| i.id.clone()).collect();
        assert_eq!(visible, ["bread"]);
    }

    #[test]
    fn category_selection_filters_items() {
        let (categories, items) = catalog();
        let mut session = ShopSession::open(None, categories, items);
        session.select_category("drink");
        let visible: Vec<_> = session.visible_items().iter().map(|i| i.id.clone()).collect();
        assert_eq!(visible, ["water", "beer"]);
        // Unknown categories are ignored
        session.select_category("ghost");
        assert_eq!(session.selected_category.as_deref(), Some("drink"));
    }

    #[test]
    fn no_categories_shows_everything() {
        let (_, items) = catalog();
        let session = ShopSession::open(None, Vec::new(), items);
        assert_eq!(session.title, "Shop");
        assert_eq!(session.visible_items().len(), 3);
    }

    #[test]
    fn screen_title_tracks_flow() {
        let (categories, items) = catalog();
        let mut session = ShopSession::open(Some("Corner Store".into()), categories, items);
        assert_eq!(session.screen_title(), "Corner Store");
        session.flow.begin_checkout();
        assert_eq!(session.screen_title(), "Payment Method");
        session.flow.select_method(PaymentMethod::Cash);
        assert_eq!(session.screen_title(), "Processing Payment");
    }
}
