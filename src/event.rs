//! Wire events — the JSON protocol between server and the chat page.
//!
//! DESIGN
//! ======
//! Every websocket payload is one tagged JSON event. Server → client events
//! are full view refreshes, never deltas: the client re-renders the whole
//! presence or message view from the payload, which keeps every open tab
//! convergent without client-side merge logic.

use serde::{Deserialize, Serialize};

use crate::state::ChatMessage;

/// Events pushed from the server to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Transport handshake acknowledgment. Always the first event a session
    /// receives; the client holds off on scroll positioning until it arrives.
    Connected { identity: String, avatar_url: String },
    /// Full refresh of the online count.
    Presence { online: usize },
    /// Full refresh of the recent message view. An empty list means the
    /// "no messages yet" indicator should show.
    Messages { messages: Vec<ChatMessage> },
    /// Transient user-facing notice, e.g. a rejected empty post.
    Warning { message: String },
}

/// Events sent by the chat page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Submit one message.
    Post { text: String },
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;
