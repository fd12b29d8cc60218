//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the two process-wide singletons — the append-only message log and
//! the registry of live sessions — each behind its own `RwLock`. Nothing is
//! persisted: both vanish on process exit, which is the point.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::event::ServerEvent;

/// Cap on the message-view slice. Large enough to be a practical no-op; it
/// exists so one long-lived room cannot grow a render payload without bound.
pub const MAX_MESSAGES_DISPLAY: usize = 9999;

// =============================================================================
// CHAT MESSAGE
// =============================================================================

/// One posted message. Immutable once appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Identity token of the author.
    pub author: String,
    /// Third-party avatar image derived from the author identity.
    pub avatar_url: String,
    /// Raw markdown-flavored text, rendered client-side.
    pub text: String,
    /// Human-readable UTC timestamp assigned at append time.
    pub stamp: String,
}

// =============================================================================
// MESSAGE LOG
// =============================================================================

/// Append-only chat history. Append is the only mutation; the log never
/// shrinks except by process restart.
#[derive(Default)]
pub struct MessageLog {
    pub messages: Vec<ChatMessage>,
}

// =============================================================================
// SESSION REGISTRY
// =============================================================================

/// One live websocket connection.
pub struct SessionHandle {
    /// Owning browser identity. Several sessions may share one identity
    /// (multiple tabs from the same browser).
    pub identity: String,
    /// Sender for view-refresh events bound for this session.
    pub tx: mpsc::Sender<ServerEvent>,
}

/// Currently connected sessions keyed by session ID. The presence count is
/// the number of entries.
#[derive(Default)]
pub struct SessionRegistry {
    pub sessions: HashMap<Uuid, SessionHandle>,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub log: Arc<RwLock<MessageLog>>,
    pub registry: Arc<RwLock<SessionRegistry>>,
    /// Signing key for the identity cookie.
    pub key: Key,
}

impl AppState {
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            log: Arc::new(RwLock::new(MessageLog::default())),
            registry: Arc::new(RwLock::new(SessionRegistry::default())),
            key,
        }
    }
}

/// Lets `SignedCookieJar` pull its key straight out of the app state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
