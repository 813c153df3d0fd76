use crate::shared::scroll::scroll_to_section;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-inner">
                <p class="hero-kicker">"Small-batch • Zero-waste • Food as medicine"</p>
                <h1>"Food that remembers where it came from"</h1>
                <p class="hero-lede">
                    "We rescue surplus harvests from nearby farms and turn them into \
                     ferments, broths and pantry staples that feed your gut and your mood."
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| { scroll_to_section("products"); }
                    >
                        "Shop the Current Menu"
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| { scroll_to_section("about"); }
                    >
                        "Our Story"
                    </button>
                </div>
            </div>
        </section>
    }
}
