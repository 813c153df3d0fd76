use crate::layout::global_context::use_cart;
use crate::shared::icons::icon;
use crate::shared::scroll::scroll_to_section;
use leptos::prelude::*;

/// Fixed top navigation: brand, page links, in-page section links and the
/// basket button with its unit-count badge.
#[component]
pub fn Navbar() -> impl IntoView {
    let cart = use_cart();
    let (menu_open, set_menu_open) = signal(false);

    // Section links scroll in place on the home page; everywhere else they
    // reload the home page anchored at the section.
    let go = move |section: &'static str| {
        if !scroll_to_section(section) {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&format!("/#{}", section));
            }
        }
        set_menu_open.set(false);
    };

    let cart_button = move || {
        view! {
            <button class="navbar-cart" on:click=move |_| cart.open_panel()>
                {icon("cart")}
                <Show when=move || (cart.count() > 0)>
                    <span class="navbar-cart-badge">{move || cart.count()}</span>
                </Show>
            </button>
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a href="/" class="navbar-brand">
                    <span class="navbar-brand-mark">{icon("sprout")}</span>
                    <span class="navbar-brand-name">"Fernhollow Foods"</span>
                </a>

                <div class="navbar-links">
                    <a href="/">"Home"</a>
                    <a href="/about">"About"</a>
                    <button on:click=move |_| go("products")>"Shop"</button>
                    <button on:click=move |_| go("education")>"Education"</button>
                    <a href="/wholesale">"Wholesale"</a>
                    {cart_button}
                </div>

                <div class="navbar-mobile">
                    {cart_button}
                    <button
                        class="navbar-menu-toggle"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || icon(if menu_open.get() { "close" } else { "menu" })}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar-mobile-menu">
                    <a href="/" on:click=move |_| set_menu_open.set(false)>"Home"</a>
                    <a href="/about" on:click=move |_| set_menu_open.set(false)>"About"</a>
                    <button on:click=move |_| go("products")>"Shop"</button>
                    <button on:click=move |_| go("education")>"Education"</button>
                    <a href="/wholesale" on:click=move |_| set_menu_open.set(false)>"Wholesale"</a>
                </div>
            </Show>
        </nav>
    }
}
