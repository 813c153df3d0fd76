use contracts::domain::a004_coaching::{ChatReply, ChatRequest, Conversation};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Send one user turn and wait for the coach's reply.
pub async fn send_chat_turn(session_id: &str, message: &str) -> Result<ChatReply, String> {
    let request = ChatRequest {
        session_id: session_id.to_string(),
        message: message.to_string(),
        email: String::new(),
    };

    let response = Request::post(&api_url("/api/coaching/chat/"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Chat request failed: {}", response.status()));
    }

    response
        .json::<ChatReply>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Server-side transcript for a session. Optional rehydration surface; the
/// widget keeps its own transcript for the page lifetime.
pub async fn fetch_conversation(session_id: &str) -> Result<Conversation, String> {
    let response = Request::get(&api_url(&format!(
        "/api/coaching/conversation/{}/",
        session_id
    )))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Conversation lookup failed: {}", response.status()));
    }

    response
        .json::<Conversation>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
