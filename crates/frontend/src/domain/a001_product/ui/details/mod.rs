use crate::domain::a001_product::api::fetch_catalog;
use crate::layout::global_context::use_cart;
use crate::shared::icons::icon;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Stand-alone product page reached via `/product/:id`.
#[component]
#[allow(non_snake_case)]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let (product, set_product) = signal::<Option<Product>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let id = params.read().get("id").unwrap_or_default();
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let catalog = fetch_catalog().await;
            set_product.set(catalog.into_iter().find(|p| p.id == id));
            set_loading.set(false);
        });
    });

    view! {
        <div class="product-page">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="page-loading">
                        <div class="spinner"></div>
                        <p>"Loading product..."</p>
                    </div>
                }
            >
                {move || match product.get() {
                    Some(product) => view! { <ProductDetail product=product /> }.into_any(),
                    None => view! {
                        <div class="product-missing">
                            <h2>"We couldn't find that product."</h2>
                            <a href="/" class="btn btn-primary">"Back to the menu"</a>
                        </div>
                    }
                    .into_any(),
                }}
            </Show>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ProductDetail(product: Product) -> impl IntoView {
    let cart = use_cart();
    let add_product = product.clone();
    let price = format!("${:.2} / {}", product.price, product.unit);

    view! {
        <article class="product-detail">
            <div class="product-detail-image">
                <img src=product.image.clone() alt=product.name.clone() />
            </div>
            <div class="product-detail-info">
                <h1>{product.name.clone()}</h1>
                <p class="product-detail-tagline">{product.tagline.clone()}</p>
                <p class="product-detail-price">{price}</p>
                <p class="product-detail-description">{product.description.clone()}</p>
                <ul class="product-detail-benefits">
                    {product
                        .benefits
                        .iter()
                        .cloned()
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
            </div>
        </article>
    }
}
