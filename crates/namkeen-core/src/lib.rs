//! Domain types shared across the namkeen storefront services.
//!
//! Everything here is pure: the session token codec and validator take
//! the current time as an argument instead of reading the clock, so
//! callers (and tests) control it.

pub mod fmt;
pub mod session;
