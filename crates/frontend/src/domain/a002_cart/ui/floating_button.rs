use crate::layout::global_context::use_cart;
use crate::shared::icons::icon;
use crate::shared::scroll::use_scroll_threshold;
use leptos::prelude::*;

/// Scroll depth past which the shortcut appears.
const SCROLL_THRESHOLD_PX: f64 = 400.0;

/// Floating "view basket" shortcut: visible once the visitor has scrolled
/// past the threshold and the basket holds something.
#[component]
#[allow(non_snake_case)]
pub fn FloatingCartButton() -> impl IntoView {
    let cart = use_cart();
    let scrolled = use_scroll_threshold(SCROLL_THRESHOLD_PX);

    view! {
        <Show when=move || scrolled.get() && (cart.count() > 0)>
            <button class="floating-cart" on:click=move |_| cart.open_panel()>
                {icon("cart")}
                <span class="floating-cart-count">{move || cart.count()}</span>
                <span class="floating-cart-label">"View Basket"</span>
            </button>
        </Show>
    }
}
