use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn Education() -> impl IntoView {
    view! {
        <section class="education">
            <div class="education-inner">
                <h2>"The gut-brain kitchen"</h2>
                <p>
                    "Most of your serotonin is made in your gut. What you feed it shapes \
                     how you feel, so we publish what we learn as we cook."
                </p>
                <div class="education-grid">
                    <article class="education-card">
                        <h3>"Why ferments?"</h3>
                        <p>
                            "Live cultures pre-digest the hard parts and leave your gut \
                             bacteria something to thrive on."
                        </p>
                    </article>
                    <article class="education-card">
                        <h3>"Start with one jar"</h3>
                        <p>
                            "A forkful of kraut with one meal a day is a gentler start than \
                             overhauling your whole pantry."
                        </p>
                    </article>
                    <article class="education-card">
                        <h3>"Ask the coach"</h3>
                        <p>
                            "The chat bubble in the corner knows our menu and the research \
                             behind it. Ask it anything."
                        </p>
                    </article>
                </div>
            </div>
        </section>
    }
}
