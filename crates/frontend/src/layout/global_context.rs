use contracts::domain::a001_product::Product;
use contracts::domain::a002_cart::{Cart, CartTotals};
use leptos::prelude::*;

/// App-wide basket state, provided once from `App` and shared by every
/// component that reads or mutates the cart. Mutation semantics live in
/// `contracts::domain::a002_cart`; this service wires them to signals and
/// to the panel the mutations surface.
#[derive(Clone, Copy)]
pub struct CartService {
    pub cart: RwSignal<Cart>,
    pub panel_open: RwSignal<bool>,
}

impl CartService {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
            panel_open: RwSignal::new(false),
        }
    }

    /// Add one unit and surface the basket panel.
    pub fn add_item(&self, product: Product) {
        self.cart.update(|cart| cart.add_item(product));
        self.panel_open.set(true);
    }

    pub fn update_quantity(&self, id: &str, delta: i32) {
        let id = id.to_string();
        self.cart.update(|cart| cart.update_quantity(&id, delta));
    }

    pub fn remove_item(&self, id: &str) {
        let id = id.to_string();
        self.cart.update(|cart| cart.remove_item(&id));
    }

    pub fn clear(&self) {
        self.cart.update(|cart| cart.clear());
    }

    /// Reactive unit count across all lines.
    pub fn count(&self) -> u32 {
        self.cart.with(|cart| cart.count())
    }

    /// Reactive monetary totals, recomputed from the lines on every read.
    pub fn totals(&self) -> CartTotals {
        self.cart.with(|cart| cart.totals())
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(|cart| cart.is_empty())
    }

    pub fn open_panel(&self) {
        self.panel_open.set(true);
    }

    pub fn close_panel(&self) {
        self.panel_open.set(false);
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartService {
    use_context::<CartService>().expect("CartService not provided in context")
}
