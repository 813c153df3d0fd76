use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed greeting seeded into every fresh transcript. Not a round trip.
pub const WELCOME_MESSAGE: &str = "Welcome to Fernhollow Foods! I'm your Gut-Brain Coach. \
     Ask me how to eat for a steadier mood, or about our small-batch ferments.";

/// Shown in place of a reply when the coaching endpoint cannot be reached.
pub const FALLBACK_MESSAGE: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

/// Who spoke a transcript turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            _ => Err(format!("Unknown chat role: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One turn of the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered conversation transcript. Grows monotonically for the page
/// lifetime; never truncated or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    /// A fresh transcript, seeded with the assistant greeting.
    pub fn seeded() -> Self {
        Self {
            turns: vec![ChatTurn::assistant(WELCOME_MESSAGE)],
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Append the user's side of a turn. Whitespace-only input appends
    /// nothing; otherwise returns the message to put on the wire.
    pub fn push_user(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }
        self.turns.push(ChatTurn::user(text));
        Some(text.to_string())
    }

    /// Append the assistant's side: the reply text, or the fixed fallback
    /// when the round trip failed.
    pub fn push_reply(&mut self, reply: Result<String, String>) {
        let text = reply.unwrap_or_else(|_| FALLBACK_MESSAGE.to_string());
        self.turns.push(ChatTurn::assistant(text));
    }
}

/// Opaque per-page-load session identifier: a millisecond timestamp plus a
/// random suffix, unique enough for the backend to key conversation history.
pub fn new_session_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("session-{}-{}", Utc::now().timestamp_millis(), &suffix[..9])
}

/// One turn on the wire.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChatReply {
    pub message: String,
}

/// Server-side conversation history for a session.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Conversation {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub messages: Vec<ConversationMessage>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ConversationMessage {
    pub role: String,
    pub content: String,
}

impl Conversation {
    /// Turns the stored history back into transcript turns, skipping roles
    /// this client never renders.
    pub fn into_turns(self) -> Vec<ChatTurn> {
        self.messages
            .into_iter()
            .filter_map(|message| {
                ChatRole::from_str(&message.role)
                    .ok()
                    .map(|role| ChatTurn {
                        role,
                        text: message.content,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_transcript_has_one_assistant_turn() {
        let transcript = Transcript::seeded();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turns()[0].role, ChatRole::Assistant);
        assert_eq!(transcript.turns()[0].text, WELCOME_MESSAGE);
    }

    #[test]
    fn test_whitespace_only_send_appends_nothing() {
        let mut transcript = Transcript::seeded();
        assert_eq!(transcript.push_user("   \t"), None);
        assert_eq!(transcript.push_user(""), None);
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_successful_turn_grows_transcript_by_two() {
        let mut transcript = Transcript::seeded();
        let outgoing = transcript.push_user("hello");
        assert_eq!(outgoing.as_deref(), Some("hello"));
        transcript.push_reply(Ok("hi there".to_string()));

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.turns()[1], ChatTurn::user("hello"));
        assert_eq!(transcript.turns()[2], ChatTurn::assistant("hi there"));
    }

    #[test]
    fn test_failed_turn_appends_fallback() {
        let mut transcript = Transcript::seeded();
        transcript.push_user("hello");
        transcript.push_reply(Err("HTTP 502".to_string()));

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.turns()[2].role, ChatRole::Assistant);
        assert_eq!(transcript.turns()[2].text, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_session_ids_are_prefixed_and_distinct() {
        let first = new_session_id();
        let second = new_session_id();
        assert!(first.starts_with("session-"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            session_id: "session-1-abc".to_string(),
            message: "hello".to_string(),
            email: String::new(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["session_id"], "session-1-abc");
        assert_eq!(json["message"], "hello");
        assert_eq!(json["email"], "");
    }

    #[test]
    fn test_conversation_maps_known_roles_only() {
        let conversation: Conversation = serde_json::from_str(
            r#"{
                "session_id": "session-1-abc",
                "messages": [
                    {"role": "user", "content": "hi"},
                    {"role": "system", "content": "prompt"},
                    {"role": "assistant", "content": "hello"}
                ]
            }"#,
        )
        .unwrap();

        let turns = conversation.into_turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, ChatRole::User);
        assert_eq!(turns[1].role, ChatRole::Assistant);
    }
}
