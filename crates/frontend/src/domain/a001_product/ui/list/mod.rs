use crate::layout::global_context::use_cart;
use crate::shared::icons::icon;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// The "Current Menu" grid on the home page.
#[component]
#[allow(non_snake_case)]
pub fn ProductsSection(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <section class="products-section">
            <div class="section-heading">
                <div class="section-badge">
                    {icon("leaf")}
                    <span>"Small-Batch • Farm-to-Table • Food as Medicine"</span>
                </div>
                <h2>"Current Menu"</h2>
                <p>
                    "Limited batches of healing foods, made fresh from rescued ingredients. \
                     Subscribe below to hear when a new batch is ready."
                </p>
            </div>

            <div class="products-grid">
                <Show
                    when=move || !products.get().is_empty()
                    fallback=|| view! {
                        <p class="products-empty">
                            "The menu is taking a moment to load. Check back shortly."
                        </p>
                    }
                >
                    {move || {
                        products
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product /> })
                            .collect_view()
                    }}
                </Show>
            </div>
        </section>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let detail_href = format!("/product/{}", product.id);
    let price_badge = format!("${:.2}/{}", product.price, product.unit);
    let benefits = product.benefits.iter().take(3).cloned().collect::<Vec<_>>();
    let add_product = product.clone();

    view! {
        <article class="product-card">
            <a href=detail_href.clone() class="product-card-image">
                <img src=product.image.clone() alt=product.name.clone() loading="lazy" />
                <span class="product-card-price">{price_badge}</span>
            </a>
            <div class="product-card-body">
                <h3>{product.name.clone()}</h3>
                <p class="product-card-tagline">{product.tagline.clone()}</p>
                <p class="product-card-description">{product.description.clone()}</p>
                <ul class="product-card-benefits">
                    {benefits
                        .into_iter()
                        .map(|benefit| view! {
                            <li>
                                {icon("check")}
                                <span>{benefit}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
                <button
                    class="btn btn-primary"
                    on:click=move |_| cart.add_item(add_product.clone())
                >
                    {icon("cart")}
                    "Add to Box"
                </button>
                <a href=detail_href class="btn btn-secondary">
                    "View Details"
                    {icon("arrow-right")}
                </a>
            </div>
        </article>
    }
}
