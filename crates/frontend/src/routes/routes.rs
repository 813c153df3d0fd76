use crate::domain::a001_product::ui::details::ProductPage;
use crate::domain::a002_cart::ui::floating_button::FloatingCartButton;
use crate::domain::a002_cart::ui::sidebar::CartSidebar;
use crate::domain::a004_coaching::ui::widget::CoachWidget;
use crate::domain::a006_wholesale::ui::page::WholesalePage;
use crate::layout::footer::Footer;
use crate::layout::navbar::Navbar;
use crate::pages::about::AboutPage;
use crate::pages::home::HomePage;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="page">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/wholesale") view=WholesalePage />
                    <Route path=path!("/product/:id") view=ProductPage />
                </Routes>
            </main>
            <Footer />

            // Overlays live outside the routed area so they survive navigation.
            <CoachWidget />
            <CartSidebar />
            <FloatingCartButton />
            <ToastHost />
        </Router>
    }
}
