//! Shopping Cart
//!
//! In-memory cart owned by the shop session. Lines merge by item id; a
//! quantity dropping to zero removes the line entirely.

use crate::models::{CartLine, ShopItem};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of an item; an existing line for the same id gains
    /// quantity instead of a duplicate line.
    pub fn add(&mut self, item: &ShopItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            icon: item.icon.clone(),
            quantity: 1,
            inventory_name: item
                .inventory_name
                .clone()
                .unwrap_or_else(|| item.id.clone()),
        });
    }

    pub fn remove(&mut self, id: &str) {
        self.lines.retain(|l| l.id != id);
    }

    /// Adjust a line's quantity; at zero or below the line disappears
    pub fn adjust_quantity(&mut self, id: &str, delta: i32) {
        let Some(line) = self.lines.iter_mut().find(|l| l.id == id) else {
            return;
        };
        let next = line.quantity as i64 + delta as i64;
        if next <= 0 {
            self.remove(id);
        } else {
            line.quantity = next as u32;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recomputed on every call; never cached
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.price * l.quantity as f64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64) -> ShopItem {
        ShopItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            price,
            icon: None,
            description: None,
            category: None,
            inventory_name: None,
        }
    }

    #[test]
    fn add_merges_by_id() {
        let mut cart = Cart::new();
        cart.add(&item("water", 5.0));
        cart.add(&item("water", 5.0));
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn total_is_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add(&item("water", 5.0));
        cart.add(&item("water", 5.0));
        cart.add(&item("bread", 3.0));
        assert_eq!(cart.total(), 13.0);
    }

    #[test]
    fn quantity_floor_removes_line() {
        let mut cart = Cart::new();
        cart.add(&item("water", 5.0));
        cart.add(&item("water", 5.0));
        cart.adjust_quantity("water", -2);
        assert!(cart.is_empty());
    }

    #[test]
    fn no_line_ever_has_zero_quantity() {
        let mut cart = Cart::new();
        cart.add(&item("water", 5.0));
        cart.adjust_quantity("water", -5);
        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        cart.add(&item("bread", 3.0));
        cart.adjust_quantity("bread", 3);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn adjust_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&item("water", 5.0));
        cart.adjust_quantity("ghost", 1);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn inventory_name_falls_back_to_id() {
        let mut cart = Cart::new();
        cart.add(&item("water", 5.0));
        assert_eq!(cart.lines()[0].inventory_name, "water");
        let mut named = item("beer", 8.0);
        named.inventory_name = Some("drink_beer".into());
        cart.add(&named);
        assert_eq!(cart.lines()[1].inventory_name, "drink_beer");
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&item("water", 5.0));
        cart.add(&item("bread", 3.0));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
