//! Server-side view of seller sessions: issue, check, revoke.

use std::collections::HashMap;
use std::sync::Mutex;

use namkeen_core::session::{self, SessionToken};
use tracing::debug;

use crate::LOG_TARGET;

/// Cookie carrying the seller session token.
pub const SESSION_COOKIE_NAME: &str = "seller-session";

/// Narrow seam between the guards and session storage.
pub trait SessionStore: Send + Sync {
    /// Mint a fresh token for a just-authenticated seller.
    fn create(&self, now_ms: u64) -> SessionToken;

    /// Single-boolean check: absent, malformed, expired and revoked
    /// tokens all collapse to `false`.
    fn validate(&self, raw: Option<&str>, now_ms: u64) -> bool;

    /// Drop a session at logout. Unknown or malformed input is a no-op.
    fn revoke(&self, raw: &str, now_ms: u64);
}

/// Process-local store. Token validity is self-contained (parse plus
/// clock), so the store only has to remember revocations, and only
/// until the revoked token would have expired on its own.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    /// Revoked token suffix -> expiry of the revoked token.
    revoked: Mutex<HashMap<String, u64>>,
}

impl SessionStore for MemorySessionStore {
    fn create(&self, now_ms: u64) -> SessionToken {
        SessionToken::mint(now_ms)
    }

    fn validate(&self, raw: Option<&str>, now_ms: u64) -> bool {
        let token = match session::validate(raw, now_ms) {
            Ok(token) => token,
            Err(reason) => {
                debug!(target: LOG_TARGET, %reason, "Rejecting seller session");
                return false;
            }
        };
        !self
            .revoked
            .lock()
            .expect("Can't fail")
            .contains_key(token.suffix())
    }

    fn revoke(&self, raw: &str, now_ms: u64) {
        let Ok(token) = SessionToken::parse(raw) else {
            return;
        };
        let mut revoked = self.revoked.lock().expect("Can't fail");
        revoked.retain(|_, expires_at_ms| now_ms <= *expires_at_ms);
        revoked.insert(token.suffix().to_owned(), token.expires_at_ms());
    }
}
