//! View refresh fan-out — pushing state changes to every open session.
//!
//! DESIGN
//! ======
//! Two topics, "presence" and "messages". Publishing a topic pushes the full
//! current view to every registered session over its channel, so no session
//! ever polls. `try_send` keeps publishing non-blocking: a session that has
//! disconnected mid-refresh, or is hopelessly backed up, is skipped rather
//! than awaited.

use crate::event::ServerEvent;
use crate::services::{log, presence};
use crate::state::AppState;

/// Push the current online count to every session.
pub async fn publish_presence(state: &AppState) {
    let online = presence::count(state).await;
    publish(state, &ServerEvent::Presence { online }).await;
}

/// Push the recent message view to every session.
pub async fn publish_messages(state: &AppState) {
    let messages = log::recent_view(state).await;
    publish(state, &ServerEvent::Messages { messages }).await;
}

async fn publish(state: &AppState, event: &ServerEvent) {
    let registry = state.registry.read().await;
    for handle in registry.sessions.values() {
        // Best-effort: a closed or full channel means the session is on its
        // way out.
        let _ = handle.tx.try_send(event.clone());
    }
}

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod tests;
