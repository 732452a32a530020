//! # Zone Error Types
//!
//! All errors that can occur in zone bookkeeping and persistence.

use thiserror::Error;

use wardstone_geom::CodecError;

use crate::session::SessionId;

/// Errors that can occur in the zone system.
#[derive(Error, Debug)]
pub enum ZoneError {
    /// The store carries a format version this build cannot read.
    ///
    /// Never self-healed: the file may belong to a newer build and must not
    /// be overwritten.
    #[error("unsupported zone store version {found}, only version 1 is supported")]
    UnsupportedVersion {
        /// Version found in the store header.
        found: u16,
    },

    /// A zone references a shape type with no registered decoder.
    #[error("zone store references unknown shape type: {0}")]
    UnknownShapeType(String),

    /// Structural corruption in the store (truncation, bad varint, bad
    /// UTF-8). Recovered locally by resetting to an empty store.
    #[error("zone store is corrupted: {0}")]
    CorruptStore(CodecError),

    /// A zone is already locked by another session.
    #[error("zone '{zone}' is locked by session {holder}")]
    ZoneLocked {
        /// Case-preserved zone name.
        zone: String,
        /// Session holding the lock.
        holder: SessionId,
    },

    /// Invalid policy configuration file.
    #[error("invalid zone configuration: {0}")]
    InvalidConfig(String),

    /// File I/O failure on load or save. Propagated, never retried.
    #[error("zone store I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for zone operations.
pub type ZoneResult<T> = Result<T, ZoneError>;
