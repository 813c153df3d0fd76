pub mod aggregate;

pub use aggregate::{Cart, CartLine, CartTotals, FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD};
