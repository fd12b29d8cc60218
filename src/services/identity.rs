//! Identity resolution — stable anonymous per-browser identifiers.
//!
//! DESIGN
//! ======
//! The identity is a UUIDv4 minted on a browser's first visit and carried in
//! a signed, HTTP-only cookie, so repeated visits (and every tab) resolve to
//! the same token. It is never stored server-side: the cookie *is* the
//! storage, and the signature stops clients from choosing their own token.

use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;
use uuid::Uuid;

/// Cookie holding the per-browser identity token.
pub const IDENTITY_COOKIE: &str = "chat_id";

/// How long a minted identity persists in the browser.
const IDENTITY_MAX_AGE: Duration = Duration::days(365);

/// Return the identity stored in the jar, or mint a new one and persist it.
/// The returned jar carries the cookie to set on the response.
pub fn resolve(jar: SignedCookieJar) -> (String, SignedCookieJar) {
    if let Some(cookie) = jar.get(IDENTITY_COOKIE) {
        return (cookie.value().to_owned(), jar);
    }

    let identity = Uuid::new_v4().to_string();
    let cookie = Cookie::build((IDENTITY_COOKIE, identity.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(IDENTITY_MAX_AGE);
    (identity, jar.add(cookie))
}

/// Deterministic avatar for an identity, rendered by a third-party image
/// service and fetched by browsers, never by this process.
#[must_use]
pub fn avatar_url(identity: &str) -> String {
    format!("https://robohash.org/{identity}?bgset=bg2")
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
