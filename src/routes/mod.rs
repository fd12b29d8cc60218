//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page, one websocket, one favicon. The chat page at `/` opens a
//! websocket to `/ws`, which carries the whole session protocol; everything
//! else the browser needs (markdown rendering, avatar images) is fetched
//! from third parties client-side.

pub mod pages;
pub mod ws;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/favicon.ico", get(pages::favicon))
        .route("/ws", get(ws::handle_ws))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
