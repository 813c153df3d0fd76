use contracts::domain::a004_coaching::{new_session_id, ChatReply, Transcript};
use leptos::prelude::*;

use crate::domain::a004_coaching::api::send_chat_turn;

/// Page-lifetime coaching session. Provided from `App`, not the widget, so
/// the identifier and transcript survive the panel being closed and
/// reopened. Neither is persisted; a reload starts a fresh session.
#[derive(Clone, Copy)]
pub struct CoachSession {
    pub session_id: RwSignal<String>,
    pub transcript: RwSignal<Transcript>,
    pub input: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
    pub is_open: RwSignal<bool>,
}

impl CoachSession {
    pub fn new() -> Self {
        Self {
            session_id: RwSignal::new(new_session_id()),
            transcript: RwSignal::new(Transcript::seeded()),
            input: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
            is_open: RwSignal::new(false),
        }
    }

    pub fn toggle(&self) {
        self.is_open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.is_open.set(false);
    }

    /// Send the current input as one turn: append the user side immediately,
    /// then exactly one assistant turn (the reply, or the fixed fallback on
    /// failure). Whitespace-only input sends nothing; one turn may be in
    /// flight at a time.
    pub fn send(&self) {
        if self.is_loading.get_untracked() {
            return;
        }
        let text = self.input.get_untracked();
        if text.trim().is_empty() {
            return;
        }

        let mut outgoing = None;
        self.transcript
            .update(|transcript| outgoing = transcript.push_user(&text));
        let message = match outgoing {
            Some(message) => message,
            None => return,
        };
        self.input.set(String::new());
        self.is_loading.set(true);

        let session = *self;
        let session_id = self.session_id.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let reply = send_chat_turn(&session_id, &message).await;
            if let Err(ref e) = reply {
                log::error!("Chat turn failed: {}", e);
            }
            session.transcript.update(|transcript| {
                transcript.push_reply(reply.map(|ChatReply { message }| message))
            });
            session.is_loading.set(false);
        });
    }
}

impl Default for CoachSession {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_coach() -> CoachSession {
    use_context::<CoachSession>().expect("CoachSession not provided in context")
}
