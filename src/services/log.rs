//! Message log service — the append-only chat history.
//!
//! DESIGN
//! ======
//! The log is a plain Vec behind the `AppState` write lock. Validation,
//! timestamp assignment, and the push all happen under a single lock hold,
//! so concurrent posts from independent sessions serialize into a clean
//! total order. Readers take the most recent slice in chronological order.

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::state::{AppState, ChatMessage, MAX_MESSAGES_DISPLAY};

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("message text is empty")]
    EmptyText,
}

/// Validate and append one message, returning the stored record.
///
/// # Errors
///
/// Returns `LogError::EmptyText` when the trimmed text is empty; the log is
/// not mutated in that case.
pub async fn append(
    state: &AppState,
    author: &str,
    avatar_url: &str,
    text: &str,
) -> Result<ChatMessage, LogError> {
    if text.trim().is_empty() {
        return Err(LogError::EmptyText);
    }

    // Stamp under the lock: append order and timestamp order always agree.
    let mut log = state.log.write().await;
    let message = ChatMessage {
        author: author.to_owned(),
        avatar_url: avatar_url.to_owned(),
        text: text.to_owned(),
        stamp: stamp_at(OffsetDateTime::now_utc()),
    };
    log.messages.push(message.clone());
    Ok(message)
}

/// The last `limit` messages in chronological order (oldest first among the
/// returned slice), or everything if fewer exist.
pub async fn recent(state: &AppState, limit: usize) -> Vec<ChatMessage> {
    let log = state.log.read().await;
    let start = log.messages.len().saturating_sub(limit);
    log.messages[start..].to_vec()
}

/// The message view as shipped to clients, capped at the display limit.
pub async fn recent_view(state: &AppState) -> Vec<ChatMessage> {
    recent(state, MAX_MESSAGES_DISPLAY).await
}

pub async fn is_empty(state: &AppState) -> bool {
    state.log.read().await.messages.is_empty()
}

pub async fn len(state: &AppState) -> usize {
    state.log.read().await.messages.len()
}

// =============================================================================
// TIMESTAMP
// =============================================================================

// Always UTC, so the offset and zone annotation are literals.
const STAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] +0000 (UTC)");

fn stamp_at(at: OffsetDateTime) -> String {
    at.format(STAMP_FORMAT).unwrap_or_else(|_| String::from("unknown time"))
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
