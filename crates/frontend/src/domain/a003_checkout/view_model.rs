use contracts::domain::a003_checkout::{
    order_reference, CheckoutStep, OrderDetails, PaymentConfig,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::domain::a003_checkout::api::fetch_payment_config;
use crate::layout::global_context::CartService;
use crate::shared::toast::ToastService;

/// Simulated processing delay before an order is confirmed.
const PROCESSING_DELAY_MS: u32 = 2000;

/// Checkout panel state. Step transitions live in
/// `contracts::domain::a003_checkout`; this wires them to signals.
#[derive(Clone, Copy)]
pub struct CheckoutVm {
    pub step: RwSignal<CheckoutStep>,
    pub is_processing: RwSignal<bool>,
    pub details: RwSignal<OrderDetails>,
    pub payment_config: RwSignal<Option<PaymentConfig>>,
    pub order_reference: RwSignal<String>,
}

impl CheckoutVm {
    pub fn new() -> Self {
        Self {
            step: RwSignal::new(CheckoutStep::Cart),
            is_processing: RwSignal::new(false),
            details: RwSignal::new(OrderDetails::default()),
            payment_config: RwSignal::new(None),
            order_reference: RwSignal::new(String::new()),
        }
    }

    /// Move from review to detail capture; an empty cart stays put. Entering
    /// the details step bootstraps the payment provider config.
    pub fn proceed(&self, cart: CartService) {
        let current = cart.cart.get_untracked();
        self.step.update(|step| *step = step.proceed(&current));
        if self.step.get_untracked() == CheckoutStep::Details {
            self.load_payment_config();
        }
    }

    pub fn back(&self) {
        self.step.update(|step| *step = step.back());
    }

    /// Called whenever the panel opens: a finished checkout starts over at
    /// review.
    pub fn on_panel_open(&self) {
        self.step.update(|step| *step = step.on_panel_open());
    }

    fn load_payment_config(&self) {
        if self.payment_config.get_untracked().is_some() {
            return;
        }
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_payment_config().await {
                Ok(config) => vm.payment_config.set(Some(config)),
                // The simulated flow renders fine without it.
                Err(e) => log::warn!("Payment config unavailable: {}", e),
            }
        });
    }

    /// Submit the order: a fixed delay standing in for the order backend,
    /// then the cart is emptied, a toast fires and the confirmation step
    /// shows. Re-entry while processing is ignored.
    pub fn submit(&self, cart: CartService, toasts: ToastService) {
        if self.is_processing.get_untracked() {
            return;
        }
        self.is_processing.set(true);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(PROCESSING_DELAY_MS).await;

            vm.order_reference.set(order_reference());
            cart.clear();
            toasts.success("Order placed successfully!");
            vm.step.update(|step| *step = step.complete());
            vm.is_processing.set(false);
        });
    }
}

impl Default for CheckoutVm {
    fn default() -> Self {
        Self::new()
    }
}
