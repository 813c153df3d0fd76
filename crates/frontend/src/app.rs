use crate::domain::a004_coaching::view_model::CoachSession;
use crate::layout::global_context::CartService;
use crate::routes::AppRoutes;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // App-wide services. The coach session lives here so its identifier and
    // transcript survive the widget being opened and closed.
    provide_context(ToastService::new());
    provide_context(CartService::new());
    provide_context(CoachSession::new());

    view! {
        <AppRoutes />
    }
}
