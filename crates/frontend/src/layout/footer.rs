use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="footer-brand-mark">{icon("sprout")}</span>
                    <span>"Fernhollow Foods"</span>
                    <p class="footer-tagline">
                        "Small-batch, farm-to-table foods made from rescued ingredients."
                    </p>
                </div>
                <div class="footer-links">
                    <a href="/about">"About"</a>
                    <a href="/wholesale">"Wholesale"</a>
                    <a href="mailto:hello@fernhollow.example">"Contact"</a>
                </div>
                <p class="footer-note">"© 2025 Fernhollow Foods. All rights reserved."</p>
            </div>
        </footer>
    }
}
