//! Startup configuration.
//!
//! DESIGN
//! ======
//! Everything comes from environment variables read once at startup:
//! `APP_HOST` (default `127.0.0.1`; deployments set `0.0.0.0`), `APP_PORT`
//! (default `8080`), and `STORAGE_SECRET`, the key material for signing the
//! identity cookie. Without a secret a random per-process key is generated,
//! so identities rotate on restart — acceptable for an ephemeral room, and
//! better than refusing to start.

use axum_extra::extract::cookie::Key;
use rand::RngCore;
use sha2::{Digest, Sha512};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid APP_PORT: {0}")]
    InvalidPort(String),
}

pub struct Config {
    pub host: String,
    pub port: u16,
    /// Signing key for the identity cookie, derived from `STORAGE_SECRET`.
    pub key: Key,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `APP_PORT` is set but does not
    /// parse as a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var("APP_HOST").ok(),
            std::env::var("APP_PORT").ok(),
            std::env::var("STORAGE_SECRET").ok(),
        )
    }

    fn from_parts(
        host: Option<String>,
        port: Option<String>,
        secret: Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match port {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let key = match secret {
            Some(secret) if !secret.trim().is_empty() => signing_key(secret.as_bytes()),
            _ => {
                tracing::warn!("STORAGE_SECRET not set; identities will not survive a restart");
                random_key()
            }
        };
        Ok(Self { host, port, key })
    }

    /// Socket address string for the listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Stretch the configured secret into the 64 bytes of key material the
/// cookie signer requires. Same secret, same key, so identities survive
/// restarts.
fn signing_key(secret: &[u8]) -> Key {
    let digest = Sha512::digest(secret);
    Key::from(digest.as_slice())
}

fn random_key() -> Key {
    let mut bytes = [0u8; 64];
    rand::rng().fill_bytes(&mut bytes);
    Key::from(&bytes)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
