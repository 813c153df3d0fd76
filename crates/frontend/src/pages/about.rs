use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="about-hero">
                <h1>"About Fernhollow Foods"</h1>
                <p>"A farmhouse kitchen with a stubborn idea: nothing good gets wasted."</p>
            </section>
            <section class="about-body">
                <p>
                    "We partner with a handful of farms in our valley and take the harvest \
                     the wholesale buyers won't: split tomatoes, oversized beets, the last \
                     picking of cabbage. It becomes the ferments, broths and preserves on \
                     our menu: small batches, labeled with the week they were made."
                </p>
                <p>
                    "We sell direct, at the farm gate and here, and to a few shops and \
                     kitchens that share the idea. If that's you, see the wholesale page."
                </p>
                <p>
                    "Questions about the food or what it does for your gut? The coach in \
                     the corner has read everything we have."
                </p>
            </section>
        </div>
    }
}
