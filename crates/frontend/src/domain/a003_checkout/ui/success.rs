use crate::domain::a003_checkout::view_model::CheckoutVm;
use crate::layout::global_context::use_cart;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Confirmation panel shown after a submitted order.
#[component]
#[allow(non_snake_case)]
pub fn CheckoutSuccess(vm: CheckoutVm) -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="checkout-success">
            <div class="checkout-success-mark">{icon("check-circle")}</div>
            <h3>"Thank You!"</h3>
            <p>
                "Your order has been placed. We'll send a confirmation email \
                 shortly with tracking details."
            </p>
            <div class="checkout-success-reference">
                <p class="checkout-success-label">"Order Reference"</p>
                <p class="checkout-success-code">{move || vm.order_reference.get()}</p>
            </div>
            <button class="btn btn-primary" on:click=move |_| cart.close_panel()>
                "Return to Home"
            </button>
        </div>
    }
}
