pub mod a001_product;
pub mod a002_cart;
pub mod a003_checkout;
pub mod a004_coaching;
pub mod a005_newsletter;
pub mod a006_wholesale;
