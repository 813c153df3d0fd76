use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn Mission() -> impl IntoView {
    view! {
        <section class="mission">
            <div class="mission-inner">
                <h2>"Why we cook"</h2>
                <div class="mission-grid">
                    <div class="mission-card">
                        <span class="mission-mark">{icon("leaf")}</span>
                        <h3>"Zero waste"</h3>
                        <p>"Surplus and imperfect produce becomes the main ingredient, not compost."</p>
                    </div>
                    <div class="mission-card">
                        <span class="mission-mark">{icon("check-circle")}</span>
                        <h3>"Gut first"</h3>
                        <p>"Live ferments and slow broths, built around what your microbiome actually wants."</p>
                    </div>
                    <div class="mission-card">
                        <span class="mission-mark">{icon("store")}</span>
                        <h3>"Farm to table"</h3>
                        <p>"Named farms, short miles and batches you can trace to a single week."</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
