//! # Zone Store Codec
//!
//! Binary format for the on-disk zone store (version 1, little endian):
//!
//! ```text
//! [u16: format version, must equal 1]
//! [varint: zone count]
//! Zone entry, repeated:
//! [string: case-preserved zone name]
//! [string: shape type identifier]
//! [shape payload, owned by the shape's codec]
//! ```
//!
//! Decoding classifies failures: a bad version or an unregistered shape type
//! is a hard error (the file may belong to a newer build), while structural
//! underflow is [`ZoneError::CorruptStore`] and recoverable by the caller.
//! Name collisions under lowercasing resolve last-write-wins, with a warning
//! per displaced zone.

use std::collections::HashMap;

use wardstone_geom::{ByteReader, ByteWriter, CodecError, ShapeRegistry};

use crate::error::{ZoneError, ZoneResult};
use crate::zone::ConstructionZone;

/// Store format version this build reads and writes.
pub const STORE_VERSION: u16 = 1;

/// Encodes the zone collection into store bytes.
#[must_use]
pub fn encode(zones: &HashMap<String, ConstructionZone>) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_u16(STORE_VERSION);
    writer.write_var_u32(zones.len() as u32);
    for zone in zones.values() {
        writer.write_string(zone.name());
        writer.write_string(zone.shape().type_id());
        zone.shape().encode(&mut writer);
    }
    writer.into_bytes()
}

/// The minimal valid encoding of an empty store (version + zero count).
///
/// Written back to disk when recovering from corruption, so the next load
/// passes the version gate.
#[must_use]
pub fn empty_store_bytes() -> Vec<u8> {
    let mut writer = ByteWriter::new();
    writer.write_u16(STORE_VERSION);
    writer.write_var_u32(0);
    writer.into_bytes()
}

/// Decodes store bytes into a zone collection keyed by lowercased name.
///
/// # Errors
///
/// * [`ZoneError::UnsupportedVersion`] - header version is not 1.
/// * [`ZoneError::UnknownShapeType`] - a shape type has no decoder.
/// * [`ZoneError::CorruptStore`] - structural underflow or parse failure.
pub fn decode(
    bytes: &[u8],
    registry: &ShapeRegistry,
) -> ZoneResult<HashMap<String, ConstructionZone>> {
    let mut reader = ByteReader::new(bytes);

    let version = reader.read_u16().map_err(ZoneError::CorruptStore)?;
    if version != STORE_VERSION {
        return Err(ZoneError::UnsupportedVersion { found: version });
    }

    let count = reader.read_var_u32().map_err(ZoneError::CorruptStore)?;
    let mut zones = HashMap::with_capacity(count as usize);
    for _ in 0..count {
        let name = reader.read_string().map_err(ZoneError::CorruptStore)?;
        let type_id = reader.read_string().map_err(ZoneError::CorruptStore)?;
        let shape = registry.decode(&type_id, &mut reader).map_err(|e| match e {
            CodecError::UnknownShapeType(id) => ZoneError::UnknownShapeType(id),
            other => ZoneError::CorruptStore(other),
        })?;
        let zone = ConstructionZone::new(name, shape);
        if let Some(displaced) = zones.insert(zone.key(), zone) {
            tracing::warn!(
                zone = displaced.name(),
                "zone name collision under lowercasing, keeping the later entry"
            );
        }
    }
    Ok(zones)
}
