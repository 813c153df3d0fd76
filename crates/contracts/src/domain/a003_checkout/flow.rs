use crate::domain::a002_cart::Cart;
use uuid::Uuid;

/// The three steps of the checkout panel. Transitions are linear:
/// review → details → confirmation, with "back" allowed from details only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    Cart,
    Details,
    Success,
}

impl CheckoutStep {
    /// Advance from review to detail capture. An empty cart never proceeds;
    /// any other step stays where it is.
    pub fn proceed(self, cart: &Cart) -> CheckoutStep {
        match self {
            CheckoutStep::Cart if !cart.is_empty() => CheckoutStep::Details,
            step => step,
        }
    }

    /// Return from detail capture to review.
    pub fn back(self) -> CheckoutStep {
        match self {
            CheckoutStep::Details => CheckoutStep::Cart,
            step => step,
        }
    }

    /// A submitted order lands on the confirmation step.
    pub fn complete(self) -> CheckoutStep {
        match self {
            CheckoutStep::Details => CheckoutStep::Success,
            step => step,
        }
    }

    /// Step to show when the panel is (re)opened: a finished checkout starts
    /// over at review, every other step resumes where it left off.
    pub fn on_panel_open(self) -> CheckoutStep {
        match self {
            CheckoutStep::Success => CheckoutStep::Cart,
            step => step,
        }
    }
}

/// Contact, shipping and payment fields captured on the details step.
/// Opaque to the checkout flow itself; presence is enforced at the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDetails {
    pub email: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

/// Short reference shown on the confirmation panel, e.g. `#ORD-9F2C41AB`.
pub fn order_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("#ORD-{}", id[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::Product;

    fn cart_with_one_item() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(Product {
            id: "a".to_string(),
            name: "Beet Kvass".to_string(),
            tagline: String::new(),
            description: String::new(),
            price: 9.0,
            unit: "bottle".to_string(),
            image: String::new(),
            benefits: Vec::new(),
        });
        cart
    }

    #[test]
    fn test_empty_cart_cannot_proceed() {
        let empty = Cart::new();
        assert_eq!(CheckoutStep::Cart.proceed(&empty), CheckoutStep::Cart);
    }

    #[test]
    fn test_nonempty_cart_proceeds_to_details() {
        let cart = cart_with_one_item();
        assert_eq!(CheckoutStep::Cart.proceed(&cart), CheckoutStep::Details);
    }

    #[test]
    fn test_back_only_from_details() {
        assert_eq!(CheckoutStep::Details.back(), CheckoutStep::Cart);
        assert_eq!(CheckoutStep::Cart.back(), CheckoutStep::Cart);
        assert_eq!(CheckoutStep::Success.back(), CheckoutStep::Success);
    }

    #[test]
    fn test_complete_only_from_details() {
        assert_eq!(CheckoutStep::Details.complete(), CheckoutStep::Success);
        assert_eq!(CheckoutStep::Cart.complete(), CheckoutStep::Cart);
    }

    #[test]
    fn test_reopening_after_success_resets_to_cart() {
        assert_eq!(CheckoutStep::Success.on_panel_open(), CheckoutStep::Cart);
        assert_eq!(CheckoutStep::Details.on_panel_open(), CheckoutStep::Details);
        assert_eq!(CheckoutStep::Cart.on_panel_open(), CheckoutStep::Cart);
    }

    #[test]
    fn test_order_reference_shape() {
        let reference = order_reference();
        assert!(reference.starts_with("#ORD-"));
        assert_eq!(reference.len(), "#ORD-".len() + 8);
        assert!(reference["#ORD-".len()..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_ne!(reference, order_reference());
    }
}
