//! # Wardstone Zone Management
//!
//! Named, persistent 3D construction zones over a set of world levels.
//!
//! A construction zone is a shape plus an optional exclusive lock held by a
//! builder session. The [`ZoneManager`] owns the zone collection, the binary
//! store on disk, and the immutable global policy, and answers one question
//! for the host on every block-edit attempt: may this session edit this
//! point on this level?
//!
//! ## Persistence
//!
//! Zones live in a single binary file (format v1, little endian). Structural
//! corruption self-heals to an empty store with a logged error; an
//! unsupported format version or an unknown shape type fails hard and leaves
//! the file untouched, because the data may belong to a newer build.
//!
//! ## Thread safety
//!
//! The manager itself assumes single-threaded access (one logical control
//! flow per server tick). Multi-threaded hosts wrap it in
//! [`SharedZoneManager`], which enforces the reader/writer discipline:
//! permission checks run concurrently, mutation is exclusive.

pub mod error;
pub mod manager;
pub mod policy;
pub mod session;
pub mod shared;
pub mod store;
pub mod zone;

pub use error::{ZoneError, ZoneResult};
pub use manager::ZoneManager;
pub use policy::ZonePolicy;
pub use session::SessionId;
pub use shared::SharedZoneManager;
pub use zone::ConstructionZone;
