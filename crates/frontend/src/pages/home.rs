use crate::domain::a001_product::api::fetch_catalog;
use crate::domain::a001_product::ui::list::ProductsSection;
use crate::domain::a005_newsletter::ui::NewsletterSignup;
use crate::pages::education::Education;
use crate::pages::hero::Hero;
use crate::pages::mission::Mission;
use crate::pages::story::Story;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// The landing page: hero, story sections, the catalog grid and the
/// newsletter banner. The catalog loads once per visit; a failed load
/// degrades to an empty menu.
#[component]
#[allow(non_snake_case)]
pub fn HomePage() -> impl IntoView {
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        set_products.set(fetch_catalog().await);
        set_loading.set(false);
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="page-loading">
                    <div class="spinner"></div>
                    <p>"Loading products..."</p>
                </div>
            }
        >
            <div class="home">
                <div id="home">
                    <Hero />
                </div>
                <div id="about">
                    <Story />
                </div>
                <div id="mission">
                    <Mission />
                </div>
                <div id="products">
                    <ProductsSection products=products />
                </div>
                <div id="education">
                    <Education />
                </div>
                <NewsletterSignup />
            </div>
        </Show>
    }
}
