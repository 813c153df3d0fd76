use crate::domain::a006_wholesale::api::submit_inquiry;
use crate::shared::icons::icon;
use contracts::domain::a005_leads::WholesaleInquiry;
use leptos::prelude::*;

/// Wholesale landing page: pitch, partner benefits and the inquiry form.
#[component]
#[allow(non_snake_case)]
pub fn WholesalePage() -> impl IntoView {
    let form = RwSignal::new(WholesaleInquiry::default());
    let (loading, set_loading) = signal(false);
    let (submitted, set_submitted) = signal(false);
    let (error, set_error) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_loading.set(true);
        set_error.set(String::new());

        let inquiry = form.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match submit_inquiry(&inquiry).await {
                Ok(_) => set_submitted.set(true),
                Err(e) => {
                    log::error!("Wholesale inquiry failed: {}", e);
                    set_error.set("Failed to submit inquiry. Please try again.".to_string());
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="wholesale-page">
            <Show
                when=move || !submitted.get()
                fallback=|| view! {
                    <div class="wholesale-confirmation">
                        <div class="wholesale-confirmation-mark">{icon("check-circle")}</div>
                        <h2>"Thank You for Your Interest!"</h2>
                        <p>
                            "We've received your wholesale inquiry and will get back to you \
                             within 1-2 business days to talk partnership."
                        </p>
                        <a href="/" class="btn btn-primary">"Return to Homepage"</a>
                    </div>
                }
            >
                <section class="wholesale-hero">
                    <h1>"Become a Wholesale Partner"</h1>
                    <p>"Bring regenerative, gut-healthy foods to your customers."</p>
                </section>

                <section class="wholesale-benefits">
                    <div class="wholesale-benefit">
                        <span class="wholesale-benefit-mark">{icon("store")}</span>
                        <h3>"Premium Products"</h3>
                        <p>
                            "Offer small-batch ferments and pantry staples that stand apart \
                             from mass-produced alternatives."
                        </p>
                    </div>
                    <div class="wholesale-benefit">
                        <span class="wholesale-benefit-mark">{icon("package")}</span>
                        <h3>"Flexible Ordering"</h3>
                        <p>
                            "Weekly deliveries, wholesale pricing and order volumes sized \
                             to your shelf."
                        </p>
                    </div>
                    <div class="wholesale-benefit">
                        <span class="wholesale-benefit-mark">{icon("leaf")}</span>
                        <h3>"A Story Worth Telling"</h3>
                        <p>
                            "Every jar carries the rescued-ingredient story your customers \
                             ask about."
                        </p>
                    </div>
                </section>

                <section class="wholesale-form-section">
                    <h2>"Tell Us About Your Business"</h2>
                    <form class="wholesale-form" on:submit=on_submit>
                        <div class="form-row">
                            <input
                                required
                                type="text"
                                placeholder="Business Name"
                                class="form-input"
                                prop:value=move || form.get().business_name
                                on:input=move |ev| {
                                    form.update(|f| f.business_name = event_target_value(&ev))
                                }
                            />
                            <input
                                required
                                type="text"
                                placeholder="Contact Name"
                                class="form-input"
                                prop:value=move || form.get().contact_name
                                on:input=move |ev| {
                                    form.update(|f| f.contact_name = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="form-row">
                            <input
                                required
                                type="email"
                                placeholder="Email"
                                class="form-input"
                                prop:value=move || form.get().email
                                on:input=move |ev| {
                                    form.update(|f| f.email = event_target_value(&ev))
                                }
                            />
                            <input
                                type="tel"
                                placeholder="Phone"
                                class="form-input"
                                prop:value=move || form.get().phone
                                on:input=move |ev| {
                                    form.update(|f| f.phone = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="form-row">
                            <select
                                required
                                class="form-input"
                                on:change=move |ev| {
                                    form.update(|f| f.business_type = event_target_value(&ev))
                                }
                            >
                                <option value="">"Business Type"</option>
                                <option value="grocery">"Grocery / Market"</option>
                                <option value="restaurant">"Restaurant / Cafe"</option>
                                <option value="wellness">"Wellness / Clinic"</option>
                                <option value="other">"Other"</option>
                            </select>
                            <input
                                required
                                type="text"
                                placeholder="City, State"
                                class="form-input"
                                prop:value=move || form.get().location
                                on:input=move |ev| {
                                    form.update(|f| f.location = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="form-row">
                            <input
                                type="url"
                                placeholder="Website (optional)"
                                class="form-input"
                                prop:value=move || form.get().website
                                on:input=move |ev| {
                                    form.update(|f| f.website = event_target_value(&ev))
                                }
                            />
                            <input
                                type="text"
                                placeholder="Estimated Monthly Volume"
                                class="form-input"
                                prop:value=move || form.get().estimated_monthly_volume
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.estimated_monthly_volume = event_target_value(&ev)
                                    })
                                }
                            />
                        </div>
                        <textarea
                            rows="4"
                            placeholder="Anything else we should know?"
                            class="form-input"
                            prop:value=move || form.get().message
                            on:input=move |ev| {
                                form.update(|f| f.message = event_target_value(&ev))
                            }
                        ></textarea>

                        <Show when=move || !error.get().is_empty()>
                            <p class="form-error">{move || error.get()}</p>
                        </Show>

                        <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                            {move || if loading.get() { "Sending..." } else { "Submit Inquiry" }}
                        </button>
                    </form>
                </section>
            </Show>
        </div>
    }
}
