use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn Story() -> impl IntoView {
    view! {
        <section class="story">
            <div class="story-inner">
                <h2>"From rescued harvests to your table"</h2>
                <p>
                    "Fernhollow started in a farmhouse kitchen with a crate of seconds \
                     tomatoes nobody wanted. We ferment, simmer and preserve what the \
                     supply chain leaves behind, in batches small enough to taste the week \
                     they were made."
                </p>
                <p>
                    "Everything is made by hand, a few dozen jars at a time, from \
                     ingredients grown within a day's drive."
                </p>
            </div>
        </section>
    }
}
