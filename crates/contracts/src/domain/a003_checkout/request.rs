use crate::domain::a002_cart::Cart;
use crate::domain::a003_checkout::OrderDetails;
use serde::{Deserialize, Serialize};

/// One cart line on the wire: the backend reprices from its own catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutLineItem {
    pub id: String,
    pub quantity: u32,
}

/// Payload for the order-creation endpoint. Shipped as the integration
/// surface for a real payment backend; the storefront's own submission
/// flow simulates processing locally and never sends it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub cart_items: Vec<CheckoutLineItem>,
    pub subscribe_newsletter: bool,
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

impl CheckoutRequest {
    pub fn new(details: &OrderDetails, cart: &Cart) -> Self {
        let totals = cart.totals();
        Self {
            email: details.email.clone(),
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            phone: details.phone.clone(),
            cart_items: cart
                .lines()
                .iter()
                .map(|line| CheckoutLineItem {
                    id: line.product.id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            subscribe_newsletter: false,
            subtotal: totals.subtotal,
            shipping: totals.shipping,
            total: totals.total,
        }
    }
}

/// Public payment-provider configuration used to bootstrap a real
/// payment form.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaymentConfig {
    #[serde(rename = "publishableKey")]
    pub publishable_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: id.to_string(),
            tagline: String::new(),
            description: String::new(),
            price,
            unit: String::new(),
            image: String::new(),
            benefits: Vec::new(),
        }
    }

    #[test]
    fn test_request_mirrors_cart_lines_and_totals() {
        let mut cart = Cart::new();
        cart.add_item(product("a", 12.0));
        cart.add_item(product("a", 12.0));
        cart.add_item(product("b", 10.0));

        let details = OrderDetails {
            email: "visitor@example.com".to_string(),
            first_name: "Sam".to_string(),
            ..OrderDetails::default()
        };
        let request = CheckoutRequest::new(&details, &cart);

        assert_eq!(request.email, "visitor@example.com");
        assert_eq!(request.cart_items.len(), 2);
        assert_eq!(request.cart_items[0].quantity, 2);
        assert_eq!(request.subtotal, 34.0);
        assert_eq!(request.shipping, 10.0);
        assert_eq!(request.total, 44.0);
    }

    #[test]
    fn test_payment_config_uses_camel_case_key() {
        let config: PaymentConfig =
            serde_json::from_str(r#"{"publishableKey": "pk_test_123"}"#).unwrap();
        assert_eq!(config.publishable_key, "pk_test_123");
    }
}
