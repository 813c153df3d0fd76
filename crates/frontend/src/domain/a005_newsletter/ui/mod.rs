use crate::domain::a005_newsletter::api::subscribe;
use crate::shared::icons::icon;
use contracts::domain::a005_leads::{looks_like_email, NewsletterSubscription};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// How long the success/error note stays up before the form resets.
const STATUS_RESET_MS: u32 = 5000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SignupStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// Newsletter signup banner on the home page.
#[component]
#[allow(non_snake_case)]
pub fn NewsletterSignup() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (status, set_status) = signal(SignupStatus::Idle);
    let (message, set_message) = signal(String::new());

    let reset_later = move || {
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(STATUS_RESET_MS).await;
            set_status.set(SignupStatus::Idle);
            set_message.set(String::new());
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SignupStatus::Loading {
            return;
        }

        let address = email.get_untracked();
        if !looks_like_email(&address) {
            set_status.set(SignupStatus::Error);
            set_message.set("Please enter a valid email address".to_string());
            reset_later();
            return;
        }

        set_status.set(SignupStatus::Loading);
        wasm_bindgen_futures::spawn_local(async move {
            match subscribe(&NewsletterSubscription::from_site(address)).await {
                Ok(reply) => {
                    set_status.set(SignupStatus::Success);
                    set_message.set(reply.message);
                    set_email.set(String::new());
                }
                Err(e) => {
                    set_status.set(SignupStatus::Error);
                    set_message.set(e);
                }
            }
            reset_later();
        });
    };

    let button_label = move || match status.get() {
        SignupStatus::Loading => "Subscribing...",
        SignupStatus::Success => "Subscribed!",
        _ => "Get Updates",
    };

    view! {
        <section class="newsletter">
            <div class="newsletter-inner">
                <span class="newsletter-mark">{icon("mail")}</span>
                <h2>"Join Our Food-As-Medicine Community"</h2>
                <p>
                    "We make small batches, and they go fast. Subscribe to hear when \
                     new healing foods come out of the kitchen."
                </p>

                <form class="newsletter-form" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        disabled=move || status.get() == SignupStatus::Loading
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class=move || {
                            if status.get() == SignupStatus::Success {
                                "btn btn-success"
                            } else {
                                "btn btn-accent"
                            }
                        }
                        disabled=move || status.get() == SignupStatus::Loading
                    >
                        <Show when=move || status.get() == SignupStatus::Success>
                            {icon("check")}
                        </Show>
                        {button_label}
                    </button>
                </form>

                <Show when=move || !message.get().is_empty()>
                    <p class=move || {
                        if status.get() == SignupStatus::Error {
                            "newsletter-note newsletter-note-error"
                        } else {
                            "newsletter-note newsletter-note-success"
                        }
                    }>
                        {move || message.get()}
                    </p>
                </Show>

                <p class="newsletter-fine-print">
                    "Join 1,000+ people healing through food. Unsubscribe anytime."
                </p>
            </div>
        </section>
    }
}
