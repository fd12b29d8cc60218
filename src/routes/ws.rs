//! WebSocket handler — the per-session chat controller.
//!
//! DESIGN
//! ======
//! On upgrade the identity cookie is resolved (and set on the upgrade
//! response for first-time visitors), then the connection runs a `select!`
//! loop:
//! - Inbound client events → validate, append, trigger view refreshes
//! - Refresh events from the broadcaster → forward to this client
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → register session → send `connected` ack
//! 2. After the ack, send the initial message view (the client defers
//!    scroll-to-bottom until it has seen `connected`)
//! 3. Broadcast the presence view to everyone, this session included
//! 4. Close or socket error → deregister → presence broadcast

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::{IntoResponse, Response};
use axum_extra::extract::SignedCookieJar;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::event::{ClientEvent, ServerEvent};
use crate::services::{broadcast, identity, log, presence};
use crate::state::AppState;

/// Outgoing-channel depth per session. A client that cannot drain this many
/// view refreshes is effectively gone and gets skipped by the broadcaster.
const SESSION_CHANNEL_CAPACITY: usize = 256;

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ws: WebSocketUpgrade,
) -> Response {
    let (identity, jar) = identity::resolve(jar);
    (jar, ws.on_upgrade(move |socket| run_session(socket, state, identity))).into_response()
}

// =============================================================================
// SESSION
// =============================================================================

async fn run_session(mut socket: WebSocket, state: AppState, identity: String) {
    let session_id = Uuid::new_v4();
    let avatar_url = identity::avatar_url(&identity);

    // Registering also subscribes this session to both refresh topics.
    let (tx, mut rx) = mpsc::channel::<ServerEvent>(SESSION_CHANNEL_CAPACITY);
    presence::register(&state, session_id, &identity, tx).await;
    info!(%session_id, %identity, "ws: session connected");

    // Handshake ack first, then the initial message view. The ack gates the
    // client's first render, so the message view never lands on a transport
    // that is not ready to scroll it into place.
    let connected =
        ServerEvent::Connected { identity: identity.clone(), avatar_url: avatar_url.clone() };
    let initial_view = ServerEvent::Messages { messages: log::recent_view(&state).await };
    let handshake_ok = send_event(&mut socket, &connected).await.is_ok()
        && send_event(&mut socket, &initial_view).await.is_ok();

    if handshake_ok {
        broadcast::publish_presence(&state).await;

        loop {
            tokio::select! {
                msg = socket.recv() => {
                    let Some(Ok(msg)) = msg else { break };
                    match msg {
                        Message::Text(text) => {
                            for event in handle_client_text(&state, &identity, &avatar_url, &text).await {
                                // A failed send surfaces as a recv error on
                                // the next loop turn.
                                let _ = send_event(&mut socket, &event).await;
                            }
                        }
                        Message::Close(_) => break,
                        _ => {}
                    }
                }
                Some(event) = rx.recv() => {
                    if send_event(&mut socket, &event).await.is_err() {
                        break;
                    }
                }
            }
        }
    }

    presence::deregister(&state, session_id).await;
    broadcast::publish_presence(&state).await;
    info!(%session_id, "ws: session disconnected");
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Process one inbound text payload and return events for the sender only.
/// View refreshes for everyone go out from here via the broadcaster.
///
/// Kept free of socket handling so tests can exercise submit validation and
/// broadcast behavior without a live connection.
async fn handle_client_text(
    state: &AppState,
    identity: &str,
    avatar_url: &str,
    text: &str,
) -> Vec<ServerEvent> {
    let event: ClientEvent = match serde_json::from_str(text) {
        Ok(event) => event,
        Err(e) => {
            warn!(identity, error = %e, "ws: invalid inbound event");
            return vec![ServerEvent::Warning { message: format!("invalid event: {e}") }];
        }
    };

    match event {
        ClientEvent::Post { text } => {
            match log::append(state, identity, avatar_url, &text).await {
                Ok(_) => {
                    let total = log::len(state).await;
                    info!(identity, total, "message appended");
                    // Both views refresh after a post, sender included.
                    broadcast::publish_messages(state).await;
                    broadcast::publish_presence(state).await;
                    vec![]
                }
                Err(e) => vec![ServerEvent::Warning { message: e.to_string() }],
            }
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

async fn send_event(socket: &mut WebSocket, event: &ServerEvent) -> Result<(), ()> {
    let json = match serde_json::to_string(event) {
        Ok(json) => json,
        Err(e) => {
            warn!(error = %e, "ws: failed to serialize event");
            return Err(());
        }
    };
    socket.send(Message::Text(json.into())).await.map_err(|_| ())
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
