use crate::domain::a001_product::Product;
use serde::{Deserialize, Serialize};

/// Order value above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;

/// Flat shipping fee charged below the threshold.
pub const FLAT_SHIPPING_FEE: f64 = 10.0;

/// One product paired with a strictly positive quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// Monetary totals derived from the current cart contents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

/// The in-memory basket.
///
/// Invariants: at most one line per product id, lines keep the order the
/// products were first added, and no line ever holds quantity zero. Every
/// operation is a total function; unknown ids are no-ops, not errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`: merges into the existing line when the id
    /// is already present, otherwise appends a new line with quantity 1.
    pub fn add_item(&mut self, product: Product) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::new(product)),
        }
    }

    /// Apply a quantity delta, clamped at zero. A line reaching zero is
    /// removed from the cart.
    pub fn update_quantity(&mut self, id: &str, delta: i32) {
        let index = match self.lines.iter().position(|line| line.product.id == id) {
            Some(index) => index,
            None => return,
        };
        let next = (self.lines[index].quantity as i64 + delta as i64).max(0);
        if next == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = next as u32;
        }
    }

    /// Drop the line with this id, if present.
    pub fn remove_item(&mut self, id: &str) {
        self.lines.retain(|line| line.product.id != id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Recomputed on every read; nothing monetary is stored.
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING_FEE
        };
        CartTotals {
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            tagline: String::new(),
            description: String::new(),
            price,
            unit: "jar".to_string(),
            image: String::new(),
            benefits: Vec::new(),
        }
    }

    #[test]
    fn test_add_merges_by_id() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 5.0));
        cart.add_item(product("b", 3.0));
        cart.add_item(product("a", 5.0));
        cart.add_item(product("a", 5.0));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.lines()[1].quantity, 1);
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_insertion_order_preserved_across_updates() {
        let mut cart = Cart::new();
        cart.add_item(product("first", 1.0));
        cart.add_item(product("second", 2.0));
        cart.add_item(product("third", 3.0));
        cart.update_quantity("second", 5);

        let ids: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product.id.as_str())
            .collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
        assert_eq!(cart.lines()[1].quantity, 6);
    }

    #[test]
    fn test_update_clamps_at_zero_and_removes_line() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 5.0));
        cart.update_quantity("a", -3);

        assert!(cart.is_empty());
        assert!(!cart.lines().iter().any(|line| line.quantity == 0));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 5.0));
        cart.update_quantity("missing", 2);
        cart.remove_item("missing");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_remove_drops_line() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 5.0));
        cart.add_item(product("b", 3.0));
        cart.remove_item("a");

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product.id, "b");
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 5.0));
        cart.add_item(product("b", 3.0));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_totals_below_threshold() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 12.0));
        cart.update_quantity("a", 1);
        cart.add_item(product("b", 10.0));

        let totals = cart.totals();
        assert_eq!(totals.subtotal, 34.0);
        assert_eq!(totals.shipping, 10.0);
        assert_eq!(totals.total, 44.0);
    }

    #[test]
    fn test_totals_above_threshold_ship_free() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 12.0));
        cart.update_quantity("a", 1);
        cart.add_item(product("b", 10.0));
        cart.add_item(product("c", 45.0));

        let totals = cart.totals();
        assert_eq!(totals.subtotal, 79.0);
        assert_eq!(totals.shipping, 0.0);
        assert_eq!(totals.total, 79.0);
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 50.0));

        assert_eq!(cart.totals().shipping, FLAT_SHIPPING_FEE);

        cart.add_item(product("b", 0.01));
        assert_eq!(cart.totals().shipping, 0.0);
    }
}
