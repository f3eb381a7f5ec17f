//! Seller session token codec and validation.
//!
//! The token travels as a cookie value of the form
//! `SESSION-<unix-millis>-<random-suffix>`. Validity is self-contained:
//! a token is accepted iff it parses and its mint time is within the
//! session lifetime of the current time. There is no signature over the
//! timestamp — the format is compatibility-frozen and the limitation is
//! recorded in DESIGN.md.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng as _;
use rand::distr::Alphanumeric;
use snafu::{OptionExt as _, Snafu, ensure};

/// Literal marker every token starts with.
pub const TOKEN_PREFIX: &str = "SESSION";

/// How long a seller session stays valid after mint. One shared
/// constant; every consumer derives expiry from it.
pub const SESSION_TTL_MS: u64 = 24 * 60 * 60 * 1000;

const SUFFIX_LEN: usize = 16;

#[derive(Debug, Snafu)]
#[snafu(display("malformed session token"))]
pub struct TokenMalformedError;

/// A parsed seller session token.
///
/// Exists only as a cookie value; created once at login, never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken {
    issued_at_ms: u64,
    suffix: String,
}

impl SessionToken {
    /// Mint a fresh token issued `now_ms`, with a random alphanumeric
    /// suffix for uniqueness. The suffix carries no meaning and is
    /// never validated.
    pub fn mint(now_ms: u64) -> Self {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect();
        Self {
            issued_at_ms: now_ms,
            suffix,
        }
    }

    /// Parse a raw cookie value.
    ///
    /// Requires at least three `-`-separated segments: the literal
    /// marker, a base-10 millisecond timestamp, and an opaque suffix
    /// (which may itself contain `-`).
    pub fn parse(raw: &str) -> Result<Self, TokenMalformedError> {
        let mut segments = raw.splitn(3, '-');
        let (Some(marker), Some(millis), Some(suffix)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return TokenMalformedSnafu.fail();
        };
        ensure!(marker == TOKEN_PREFIX, TokenMalformedSnafu);
        let issued_at_ms = millis.parse().ok().context(TokenMalformedSnafu)?;
        Ok(Self {
            issued_at_ms,
            suffix: suffix.to_owned(),
        })
    }

    pub fn issued_at_ms(&self) -> u64 {
        self.issued_at_ms
    }

    pub fn expires_at_ms(&self) -> u64 {
        self.issued_at_ms.saturating_add(SESSION_TTL_MS)
    }

    /// Current iff `now` has not passed the expiry (inclusive at
    /// exactly the session lifetime). A timestamp so large the expiry
    /// overflows is rejected like any other stale token.
    pub fn is_current(&self, now_ms: u64) -> bool {
        self.issued_at_ms
            .checked_add(SESSION_TTL_MS)
            .is_some_and(|expires_at_ms| now_ms <= expires_at_ms)
    }

    /// The opaque random part of the token.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TOKEN_PREFIX}-{}-{}", self.issued_at_ms, self.suffix)
    }
}

impl FromStr for SessionToken {
    type Err = TokenMalformedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Why a token was rejected. Diagnostic only: every consumer collapses
/// all three to "not authenticated" so responses never reveal which
/// case applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Absent,
    Malformed,
    Expired,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RejectReason::Absent => "absent",
            RejectReason::Malformed => "malformed",
            RejectReason::Expired => "expired",
        })
    }
}

/// Check a raw cookie value against the clock.
///
/// Deterministic in its two inputs; no I/O.
pub fn validate(raw: Option<&str>, now_ms: u64) -> Result<SessionToken, RejectReason> {
    let raw = raw.filter(|s| !s.is_empty()).ok_or(RejectReason::Absent)?;
    let token = SessionToken::parse(raw).map_err(|_| RejectReason::Malformed)?;
    if token.is_current(now_ms) {
        Ok(token)
    } else {
        Err(RejectReason::Expired)
    }
}

/// The single-boolean contract: absent, malformed and expired are
/// indistinguishable to the caller.
pub fn is_authenticated(raw: Option<&str>, now_ms: u64) -> bool {
    validate(raw, now_ms).is_ok()
}

/// Milliseconds since the unix epoch.
pub fn now_millis() -> u64 {
    u64::try_from(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Can't fail")
            .as_millis(),
    )
    .expect("Can't fail")
}
