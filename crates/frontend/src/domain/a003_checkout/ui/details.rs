use crate::domain::a003_checkout::view_model::CheckoutVm;
use crate::layout::global_context::use_cart;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use leptos::prelude::*;

/// Contact, shipping and payment capture. Field presence is enforced by the
/// browser via `required`; the submit button in the sidebar footer targets
/// this form by id.
#[component]
#[allow(non_snake_case)]
pub fn CheckoutDetailsForm(vm: CheckoutVm) -> impl IntoView {
    let cart = use_cart();
    let toasts = use_toasts();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit(cart, toasts);
    };

    view! {
        <form id="checkout-form" class="checkout-form" on:submit=on_submit>
            <fieldset class="checkout-group">
                <legend>"Contact Info"</legend>
                <input
                    required
                    type="email"
                    placeholder="Email Address"
                    class="form-input"
                    prop:value=move || vm.details.get().email
                    on:input=move |ev| vm.details.update(|d| d.email = event_target_value(&ev))
                />
                <input
                    required
                    type="tel"
                    placeholder="Phone Number"
                    class="form-input"
                    prop:value=move || vm.details.get().phone
                    on:input=move |ev| vm.details.update(|d| d.phone = event_target_value(&ev))
                />
            </fieldset>

            <fieldset class="checkout-group">
                <legend>"Shipping Address"</legend>
                <div class="form-row">
                    <input
                        required
                        type="text"
                        placeholder="First Name"
                        class="form-input"
                        prop:value=move || vm.details.get().first_name
                        on:input=move |ev| {
                            vm.details.update(|d| d.first_name = event_target_value(&ev))
                        }
                    />
                    <input
                        required
                        type="text"
                        placeholder="Last Name"
                        class="form-input"
                        prop:value=move || vm.details.get().last_name
                        on:input=move |ev| {
                            vm.details.update(|d| d.last_name = event_target_value(&ev))
                        }
                    />
                </div>
                <input
                    required
                    type="text"
                    placeholder="Street Address"
                    class="form-input"
                    prop:value=move || vm.details.get().street
                    on:input=move |ev| vm.details.update(|d| d.street = event_target_value(&ev))
                />
                <div class="form-row">
                    <input
                        required
                        type="text"
                        placeholder="City"
                        class="form-input"
                        prop:value=move || vm.details.get().city
                        on:input=move |ev| vm.details.update(|d| d.city = event_target_value(&ev))
                    />
                    <input
                        required
                        type="text"
                        placeholder="Zip Code"
                        class="form-input"
                        prop:value=move || vm.details.get().zip_code
                        on:input=move |ev| {
                            vm.details.update(|d| d.zip_code = event_target_value(&ev))
                        }
                    />
                </div>
            </fieldset>

            <fieldset class="checkout-group">
                <legend>"Payment"</legend>
                <p class="checkout-secure-note">
                    {icon("lock")}
                    "Payments are encrypted and secure."
                </p>
                <div class="form-input-icon">
                    {icon("card")}
                    <input
                        required
                        type="text"
                        placeholder="Card Number"
                        class="form-input"
                        prop:value=move || vm.details.get().card_number
                        on:input=move |ev| {
                            vm.details.update(|d| d.card_number = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form-row">
                    <input
                        required
                        type="text"
                        placeholder="MM/YY"
                        class="form-input"
                        prop:value=move || vm.details.get().card_expiry
                        on:input=move |ev| {
                            vm.details.update(|d| d.card_expiry = event_target_value(&ev))
                        }
                    />
                    <input
                        required
                        type="text"
                        placeholder="CVC"
                        class="form-input"
                        prop:value=move || vm.details.get().card_cvc
                        on:input=move |ev| {
                            vm.details.update(|d| d.card_cvc = event_target_value(&ev))
                        }
                    />
                </div>
            </fieldset>
        </form>
    }
}
