pub mod flow;
pub mod request;

pub use flow::{order_reference, CheckoutStep, OrderDetails};
pub use request::{CheckoutLineItem, CheckoutRequest, PaymentConfig};
