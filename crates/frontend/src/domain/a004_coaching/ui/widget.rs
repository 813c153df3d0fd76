use crate::domain::a004_coaching::view_model::use_coach;
use crate::shared::icons::icon;
use crate::shared::keys::use_escape_key;
use contracts::domain::a004_coaching::ChatRole;
use leptos::prelude::*;

/// Floating chat widget in the corner of every page. The window is gated
/// with `Show`, so closing it never unmounts the session state.
#[component]
#[allow(non_snake_case)]
pub fn CoachWidget() -> impl IntoView {
    let session = use_coach();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Keep the latest turn in view while the window is open.
    Effect::new(move |_| {
        let _ = session.transcript.with(|transcript| transcript.len());
        if session.is_open.get() {
            scroll_to_bottom();
        }
    });

    use_escape_key(move || {
        if session.is_open.get_untracked() {
            session.close();
        }
    });

    let send_disabled = move || {
        session.is_loading.get() || session.input.with(|input| input.trim().is_empty())
    };

    view! {
        <div class="coach">
            <Show when=move || session.is_open.get()>
                <div class="coach-window">
                    <header class="coach-header">
                        <div class="coach-identity">
                            <span class="coach-avatar">{icon("bot")}</span>
                            <div>
                                <h3>"Fernhollow Coach"</h3>
                                <p class="coach-status">"Online & Ready to Help"</p>
                            </div>
                        </div>
                        <button class="coach-close" on:click=move |_| session.close()>
                            {icon("close")}
                        </button>
                    </header>

                    <div class="coach-messages" node_ref=messages_ref>
                        {move || {
                            session
                                .transcript
                                .get()
                                .turns()
                                .iter()
                                .map(|turn| {
                                    let side = match turn.role {
                                        ChatRole::User => "coach-turn coach-turn-user",
                                        ChatRole::Assistant => "coach-turn coach-turn-assistant",
                                    };
                                    view! {
                                        <div class=side>
                                            <div class="coach-bubble">{turn.text.clone()}</div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <Show when=move || session.is_loading.get()>
                            <div class="coach-turn coach-turn-assistant">
                                <div class="coach-bubble coach-bubble-thinking">
                                    <span class="spinner spinner-small"></span>
                                    "Consulting nature..."
                                </div>
                            </div>
                        </Show>
                    </div>

                    <div class="coach-input-row">
                        <input
                            type="text"
                            placeholder="Ask about gut health..."
                            aria-label="Message input"
                            prop:value=move || session.input.get()
                            disabled=move || session.is_loading.get()
                            on:input=move |ev| session.input.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    session.send();
                                }
                            }
                        />
                        <button
                            class="coach-send"
                            disabled=send_disabled
                            on:click=move |_| session.send()
                        >
                            {icon("send")}
                        </button>
                    </div>
                </div>
            </Show>

            <button
                class="coach-toggle"
                on:click=move |_| session.toggle()
                aria-label=move || if session.is_open.get() { "Close chat" } else { "Open chat" }
            >
                {move || icon(if session.is_open.get() { "close" } else { "chat" })}
            </button>
        </div>
    }
}
