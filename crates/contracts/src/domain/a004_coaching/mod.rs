pub mod session;

pub use session::{
    new_session_id, ChatReply, ChatRequest, ChatRole, ChatTurn, Conversation,
    ConversationMessage, Transcript, FALLBACK_MESSAGE, WELCOME_MESSAGE,
};
