//! # Session Identity
//!
//! Opaque identity of a builder session's owning actor, minted by the host.
//! The zone system only ever compares these for equality; it never
//! constructs one itself and never looks inside.

use std::fmt;

/// Stable, opaque identity of a builder session owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Wraps a host-supplied identity value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identity value, for host-side logging.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}
