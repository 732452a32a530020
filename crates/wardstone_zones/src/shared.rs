//! # Shared Manager Handle
//!
//! Reader/writer discipline for multi-threaded hosts. Permission checks and
//! policy reads take a read lock and may run concurrently; lock release,
//! zone mutation, and load/save take the write lock.
//!
//! Single-threaded hosts can use [`crate::ZoneManager`] directly and skip
//! the locking entirely.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use wardstone_geom::Vec3;

use crate::error::ZoneResult;
use crate::manager::ZoneManager;
use crate::session::SessionId;

/// Clone-able, thread-safe handle over a [`ZoneManager`].
#[derive(Clone)]
pub struct SharedZoneManager {
    inner: Arc<RwLock<ZoneManager>>,
}

impl SharedZoneManager {
    /// Wraps a manager for shared access.
    #[must_use]
    pub fn new(manager: ZoneManager) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    /// Resolves edit permission. Read lock; safe to call concurrently.
    #[must_use]
    pub fn can_do_edit(
        &self,
        point: Vec3,
        level_name: &str,
        session: SessionId,
        ccz_value: bool,
    ) -> bool {
        self.inner
            .read()
            .can_do_edit(point, level_name, session, ccz_value)
    }

    /// Default editability of a level. Read lock.
    #[must_use]
    pub fn default_edit_value(&self, level_name: &str) -> bool {
        self.inner.read().default_edit_value(level_name)
    }

    /// Whether level-based edit checking is enabled. Read lock.
    #[must_use]
    pub fn checks(&self) -> bool {
        self.inner.read().checks()
    }

    /// Unlocks every zone held by `session`. Write lock.
    pub fn release_by_session(&self, session: SessionId) -> usize {
        self.inner.write().release_by_session(session)
    }

    /// Persists the zone collection. Read lock, but blocking file I/O; keep
    /// it off latency-sensitive paths.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::ZoneError::Io`] from the underlying save.
    pub fn save(&self) -> ZoneResult<()> {
        self.inner.read().save()
    }

    /// Direct read access for bulk queries.
    #[must_use]
    pub fn read(&self) -> RwLockReadGuard<'_, ZoneManager> {
        self.inner.read()
    }

    /// Direct write access for administrative mutation.
    #[must_use]
    pub fn write(&self) -> RwLockWriteGuard<'_, ZoneManager> {
        self.inner.write()
    }
}
