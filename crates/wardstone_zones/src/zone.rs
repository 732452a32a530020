//! # Construction Zone Entity
//!
//! A named zone is a shape plus an optional exclusive lock. The lock holder
//! is a [`SessionId`]; at most one session holds a zone at a time.

use std::fmt;

use wardstone_geom::Shape;

use crate::error::{ZoneError, ZoneResult};
use crate::session::SessionId;

/// Named 3D region bound to a shape, optionally locked by one session.
pub struct ConstructionZone {
    name: String,
    shape: Box<dyn Shape>,
    lock: Option<SessionId>,
}

impl ConstructionZone {
    /// Creates an unlocked zone.
    #[must_use]
    pub fn new(name: impl Into<String>, shape: Box<dyn Shape>) -> Self {
        Self {
            name: name.into(),
            shape,
            lock: None,
        }
    }

    /// Case-preserved zone name. The lookup key is the lowercased form.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased lookup key for this zone.
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// The zone's shape.
    #[must_use]
    pub fn shape(&self) -> &dyn Shape {
        self.shape.as_ref()
    }

    /// Whether any session holds this zone.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// The session holding this zone, if any.
    #[must_use]
    pub fn locking_session(&self) -> Option<SessionId> {
        self.lock
    }

    /// Claims the zone for a session.
    ///
    /// Re-locking by the current holder is a no-op.
    ///
    /// # Errors
    ///
    /// [`ZoneError::ZoneLocked`] if another session holds the zone.
    pub fn lock(&mut self, session: SessionId) -> ZoneResult<()> {
        match self.lock {
            Some(holder) if holder != session => Err(ZoneError::ZoneLocked {
                zone: self.name.clone(),
                holder,
            }),
            _ => {
                self.lock = Some(session);
                Ok(())
            }
        }
    }

    /// Releases the lock, if any.
    pub fn unlock(&mut self) {
        self.lock = None;
    }
}

impl fmt::Debug for ConstructionZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructionZone")
            .field("name", &self.name)
            .field("shape", &self.shape.type_id())
            .field("level", &self.shape.level_name())
            .field("lock", &self.lock)
            .finish()
    }
}
