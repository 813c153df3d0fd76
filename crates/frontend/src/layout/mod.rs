pub mod footer;
pub mod global_context;
pub mod navbar;

pub use global_context::{use_cart, CartService};
