use crate::domain::a003_checkout::ui::{CheckoutDetailsForm, CheckoutSuccess};
use crate::domain::a003_checkout::view_model::CheckoutVm;
use crate::layout::global_context::use_cart;
use crate::shared::icons::icon;
use crate::shared::keys::use_escape_key;
use contracts::domain::a003_checkout::CheckoutStep;
use leptos::prelude::*;

/// The sliding basket panel. Owns the checkout step sequence: review →
/// details → confirmation.
#[component]
#[allow(non_snake_case)]
pub fn CartSidebar() -> impl IntoView {
    let cart = use_cart();
    let vm = CheckoutVm::new();

    // Reopening after a completed order starts over at review; any other
    // step resumes where it left off.
    Effect::new(move |_| {
        if cart.panel_open.get() {
            vm.on_panel_open();
        }
    });

    use_escape_key(move || {
        if cart.panel_open.get_untracked() {
            cart.close_panel();
        }
    });

    let title = move || match vm.step.get() {
        CheckoutStep::Cart => "Your Basket",
        CheckoutStep::Details => "Secure Checkout",
        CheckoutStep::Success => "Order Confirmed",
    };

    let show_footer = move || vm.step.get() != CheckoutStep::Success && !cart.is_empty();

    view! {
        <Show when=move || cart.panel_open.get()>
            <div class="cart-overlay">
                <div class="cart-backdrop" on:click=move |_| cart.close_panel()></div>
                <aside class="cart-panel">
                    <header class="cart-header">
                        <h2>{title}</h2>
                        <button class="cart-close" on:click=move |_| cart.close_panel()>
                            {icon("close")}
                        </button>
                    </header>

                    <div class="cart-content">
                        {move || match vm.step.get() {
                            CheckoutStep::Cart => view! { <CartLines /> }.into_any(),
                            CheckoutStep::Details => {
                                view! { <CheckoutDetailsForm vm=vm /> }.into_any()
                            }
                            CheckoutStep::Success => view! { <CheckoutSuccess vm=vm /> }.into_any(),
                        }}
                    </div>

                    <Show when=show_footer>
                        <footer class="cart-footer">
                            <CartTotalsBlock />
                            {move || match vm.step.get() {
                                CheckoutStep::Cart => view! {
                                    <button
                                        class="btn btn-primary btn-block"
                                        on:click=move |_| vm.proceed(cart)
                                    >
                                        "Proceed to Checkout"
                                        {icon("arrow-right")}
                                    </button>
                                }
                                .into_any(),
                                _ => view! {
                                    <div class="cart-footer-actions">
                                        <button
                                            class="btn btn-secondary"
                                            on:click=move |_| vm.back()
                                        >
                                            "Back"
                                        </button>
                                        <button
                                            form="checkout-form"
                                            type="submit"
                                            class="btn btn-primary"
                                            disabled=move || vm.is_processing.get()
                                        >
                                            {move || {
                                                if vm.is_processing.get() {
                                                    "Processing...".to_string()
                                                } else {
                                                    format!("Pay ${:.2}", cart.totals().total)
                                                }
                                            }}
                                        </button>
                                    </div>
                                }
                                .into_any(),
                            }}
                        </footer>
                    </Show>
                </aside>
            </div>
        </Show>
    }
}

/// Review step: the line list, or the empty state.
#[component]
#[allow(non_snake_case)]
fn CartLines() -> impl IntoView {
    let cart = use_cart();

    view! {
        <Show
            when=move || !cart.is_empty()
            fallback=move || view! {
                <div class="cart-empty">
                    <div class="cart-empty-mark">{icon("cart")}</div>
                    <h3>"Your basket is empty"</h3>
                    <p>"Looks like you haven't added anything yet."</p>
                    <button class="btn btn-primary" on:click=move |_| cart.close_panel()>
                        "Start Shopping"
                    </button>
                </div>
            }
        >
            <ul class="cart-lines">
                {move || {
                    cart.cart
                        .get()
                        .lines()
                        .iter()
                        .map(|line| {
                            let id_minus = line.product.id.clone();
                            let id_plus = line.product.id.clone();
                            let id_remove = line.product.id.clone();
                            let unit_price =
                                format!("{} • ${:.2}", line.product.unit, line.product.price);
                            view! {
                                <li class="cart-line">
                                    <img
                                        class="cart-line-image"
                                        src=line.product.image.clone()
                                        alt=line.product.name.clone()
                                    />
                                    <div class="cart-line-body">
                                        <h4>{line.product.name.clone()}</h4>
                                        <p class="cart-line-unit">{unit_price}</p>
                                        <div class="cart-line-controls">
                                            <div class="cart-line-stepper">
                                                <button on:click=move |_| {
                                                    cart.update_quantity(&id_minus, -1)
                                                }>{icon("minus")}</button>
                                                <span>{line.quantity}</span>
                                                <button on:click=move |_| {
                                                    cart.update_quantity(&id_plus, 1)
                                                }>{icon("plus")}</button>
                                            </div>
                                            <button
                                                class="cart-line-remove"
                                                on:click=move |_| cart.remove_item(&id_remove)
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </Show>
    }
}

/// Subtotal / shipping / total rows; recomputed from the cart on every read.
#[component]
#[allow(non_snake_case)]
fn CartTotalsBlock() -> impl IntoView {
    let cart = use_cart();

    view! {
        <div class="cart-totals">
            <div class="cart-totals-row">
                <span>"Subtotal"</span>
                <span>{move || format!("${:.2}", cart.totals().subtotal)}</span>
            </div>
            <div class="cart-totals-row">
                <span>
                    "Shipping "
                    <Show when=move || cart.totals().shipping == 0.0>
                        <span class="cart-totals-free">"(Free)"</span>
                    </Show>
                </span>
                <span>{move || format!("${:.2}", cart.totals().shipping)}</span>
            </div>
            <div class="cart-totals-row cart-totals-grand">
                <span>"Total"</span>
                <span>{move || format!("${:.2}", cart.totals().total)}</span>
            </div>
        </div>
    }
}
