//! Page and static asset handlers.

use axum::http::header;
use axum::response::{Html, IntoResponse};

/// `GET /` — the chat page. The whole UI ships as one embedded document.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// `GET /favicon.ico`
pub async fn favicon() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/x-icon")],
        include_bytes!("../../assets/favicon.ico").as_slice(),
    )
}
