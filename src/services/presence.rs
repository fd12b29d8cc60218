//! Presence tracking — who is connected right now.
//!
//! DESIGN
//! ======
//! One registry entry per live websocket session. The same browser identity
//! may appear under several sessions (multiple tabs); the online count is
//! the number of sessions, and deregistration removes exactly one entry
//! regardless of how many siblings share the identity.

use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::event::ServerEvent;
use crate::state::{AppState, SessionHandle};

/// Register a live session under its identity. Always succeeds.
pub async fn register(
    state: &AppState,
    session_id: Uuid,
    identity: &str,
    tx: mpsc::Sender<ServerEvent>,
) {
    let mut registry = state.registry.write().await;
    registry
        .sessions
        .insert(session_id, SessionHandle { identity: identity.to_owned(), tx });
    info!(%session_id, identity, online = registry.sessions.len(), "session registered");
}

/// Remove one session. A missing entry would be a lifecycle bug upstream,
/// but it is never worth crashing the room over; log and carry on.
pub async fn deregister(state: &AppState, session_id: Uuid) {
    let mut registry = state.registry.write().await;
    let Some(handle) = registry.sessions.remove(&session_id) else {
        warn!(%session_id, "deregister for unknown session");
        return;
    };
    info!(
        %session_id,
        identity = %handle.identity,
        online = registry.sessions.len(),
        "session deregistered"
    );
}

/// Number of currently open sessions.
pub async fn count(state: &AppState) -> usize {
    state.registry.read().await.sessions.len()
}

#[cfg(test)]
#[path = "presence_test.rs"]
mod tests;
