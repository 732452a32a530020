//! # Construction Zone Manager
//!
//! Owns the zone collection, the binary store on disk, and the immutable
//! global policy. Loads zones at construction, persists them on demand, and
//! resolves edit permissions for every block-edit attempt the host forwards.
//!
//! No encoded form is cached between saves; every [`ZoneManager::save`]
//! re-encodes the live collection, so mutation can never leave a stale
//! serialization behind.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use wardstone_geom::{ShapeRegistry, Vec3};

use crate::error::{ZoneError, ZoneResult};
use crate::policy::ZonePolicy;
use crate::session::SessionId;
use crate::store;
use crate::zone::ConstructionZone;

/// Orchestrator for all active construction zones on the server.
#[derive(Debug)]
pub struct ZoneManager {
    store_path: PathBuf,
    policy: ZonePolicy,
    zones: HashMap<String, ConstructionZone>,
}

impl ZoneManager {
    /// Creates a manager and loads the store at `store_path`.
    ///
    /// # Errors
    ///
    /// Propagates hard load failures (unsupported version, unknown shape
    /// type, I/O). Structural corruption is self-healed, not propagated.
    pub fn new(
        policy: ZonePolicy,
        store_path: impl Into<PathBuf>,
        registry: &ShapeRegistry,
    ) -> ZoneResult<Self> {
        let mut manager = Self {
            store_path: store_path.into(),
            policy,
            zones: HashMap::new(),
        };
        manager.load(registry)?;
        Ok(manager)
    }

    /// Reloads the zone collection from disk.
    ///
    /// * Store absent: in-memory state becomes empty, disk untouched.
    /// * Structural corruption: logged, state reset to empty, and a minimal
    ///   valid empty store (version + zero count) rewritten so the next load
    ///   passes the version gate.
    /// * Unsupported version / unknown shape type: propagated, disk
    ///   untouched.
    ///
    /// # Errors
    ///
    /// [`ZoneError::UnsupportedVersion`], [`ZoneError::UnknownShapeType`],
    /// or [`ZoneError::Io`].
    pub fn load(&mut self, registry: &ShapeRegistry) -> ZoneResult<()> {
        let bytes = match fs::read(&self.store_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.zones = HashMap::new();
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        match store::decode(&bytes, registry) {
            Ok(zones) => {
                self.zones = zones;
                Ok(())
            }
            Err(ZoneError::CorruptStore(cause)) => {
                tracing::error!(
                    store = %self.store_path.display(),
                    %cause,
                    "corrupted zone store, resetting to empty"
                );
                self.zones = HashMap::new();
                fs::write(&self.store_path, store::empty_store_bytes())?;
                Ok(())
            }
            Err(hard) => Err(hard),
        }
    }

    /// Serializes the zone collection and overwrites the store.
    ///
    /// # Errors
    ///
    /// [`ZoneError::Io`] on write failure; no retry is attempted.
    pub fn save(&self) -> ZoneResult<()> {
        fs::write(&self.store_path, store::encode(&self.zones))?;
        Ok(())
    }

    /// All active zones, keyed by lowercased name.
    ///
    /// Callers must not assume key stability across mutation.
    #[must_use]
    pub fn zones(&self) -> &HashMap<String, ConstructionZone> {
        &self.zones
    }

    /// Looks up a zone by name (case-insensitive).
    #[must_use]
    pub fn zone(&self, name: &str) -> Option<&ConstructionZone> {
        self.zones.get(&name.to_lowercase())
    }

    /// Looks up a zone mutably by name (case-insensitive), for locking.
    pub fn zone_mut(&mut self, name: &str) -> Option<&mut ConstructionZone> {
        self.zones.get_mut(&name.to_lowercase())
    }

    /// Inserts a zone, returning the zone it displaced if the lowercased
    /// name collided (last write wins).
    pub fn add_zone(&mut self, zone: ConstructionZone) -> Option<ConstructionZone> {
        let displaced = self.zones.insert(zone.key(), zone);
        if let Some(old) = &displaced {
            tracing::warn!(zone = old.name(), "zone displaced by name collision");
        }
        displaced
    }

    /// Removes a zone by name (case-insensitive).
    pub fn remove_zone(&mut self, name: &str) -> Option<ConstructionZone> {
        self.zones.remove(&name.to_lowercase())
    }

    /// Whether level-based edit checking is enabled.
    #[must_use]
    pub fn checks(&self) -> bool {
        self.policy.check_enabled
    }

    /// Levels editable by default when checking is enabled.
    #[must_use]
    pub fn allowed_levels(&self) -> &[String] {
        &self.policy.allowed_levels
    }

    /// Default editability of a level before per-zone overrides.
    #[must_use]
    pub fn default_edit_value(&self, level_name: &str) -> bool {
        self.policy.default_edit_value(level_name)
    }

    /// Resolves whether `session` may edit `point` on `level_name`.
    ///
    /// `ccz_value` is the caller's current default-permission state,
    /// typically seeded by [`ZoneManager::default_edit_value`]. Folding over
    /// every zone on the level:
    ///
    /// 1. A zone locked by a *different* session denies the edit outright if
    ///    the point is outside the zone. A foreign lock excludes strangers
    ///    from its volume; this denial short-circuits all later zones.
    /// 2. If the default is still deny, a zone containing the point grants
    ///    permission: construction zones are editable regardless of global
    ///    policy, unless rule 1 already denied.
    ///
    /// Each zone's containment test runs at most once per call.
    #[must_use]
    pub fn can_do_edit(
        &self,
        point: Vec3,
        level_name: &str,
        session: SessionId,
        mut ccz_value: bool,
    ) -> bool {
        for zone in self.zones.values() {
            if zone.shape().level_name() != level_name {
                continue;
            }
            let mut inside: Option<bool> = None;
            if let Some(holder) = zone.locking_session() {
                if holder != session {
                    let contained = zone.shape().contains(point);
                    if !contained {
                        return false;
                    }
                    inside = Some(contained);
                }
            }
            if !ccz_value && *inside.get_or_insert_with(|| zone.shape().contains(point)) {
                ccz_value = true;
            }
        }
        ccz_value
    }

    /// Unlocks every zone held by `session`, returning how many were
    /// released. Called when a session terminates, so no dangling locks
    /// survive it.
    pub fn release_by_session(&mut self, session: SessionId) -> usize {
        let mut released = 0;
        for zone in self.zones.values_mut() {
            if zone.locking_session() == Some(session) {
                zone.unlock();
                released += 1;
            }
        }
        if released > 0 {
            tracing::debug!(%session, released, "released zone locks for ended session");
        }
        released
    }
}
