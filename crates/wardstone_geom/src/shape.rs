//! # Shape Trait and Decoder Registry
//!
//! A [`Shape`] is an opaque containment predicate bound to exactly one world
//! level, with a round-trippable binary encoding tagged by a stable type
//! identifier string.
//!
//! The registry replaces dynamic class resolution: type identifiers map to
//! decoder functions registered once at startup by the geometry owner. The
//! zone store embeds the identifier next to each shape payload; decoding a
//! store with an unregistered identifier fails hard.

use std::collections::HashMap;
use std::fmt;

use crate::math::Vec3;
use crate::wire::{ByteReader, ByteWriter, CodecError};

/// Opaque geometric predicate over 3D points.
///
/// `Debug` is a supertrait so zones holding boxed shapes stay debuggable in
/// host logs and test assertions.
pub trait Shape: Send + Sync + fmt::Debug {
    /// Stable identifier selecting this shape's codec.
    fn type_id(&self) -> &'static str;

    /// Name of the world level this shape is bound to.
    fn level_name(&self) -> &str;

    /// Whether the point lies inside the shape.
    fn contains(&self, point: Vec3) -> bool;

    /// Encodes the shape's payload (everything after the type identifier).
    fn encode(&self, out: &mut ByteWriter);
}

/// Decoder for one shape type's binary payload.
pub type ShapeDecoder = fn(&mut ByteReader<'_>) -> Result<Box<dyn Shape>, CodecError>;

/// Registry mapping shape type identifiers to decoders.
///
/// Populated at startup; the zone manager borrows it during load and never
/// mutates it.
#[derive(Default)]
pub struct ShapeRegistry {
    decoders: HashMap<&'static str, ShapeDecoder>,
}

impl ShapeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in sphere and cuboid codecs.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(crate::shapes::SphereShape::TYPE_ID, crate::shapes::SphereShape::decode);
        registry.register(crate::shapes::CuboidShape::TYPE_ID, crate::shapes::CuboidShape::decode);
        registry
    }

    /// Registers a decoder for a type identifier, replacing any previous one.
    pub fn register(&mut self, type_id: &'static str, decoder: ShapeDecoder) {
        self.decoders.insert(type_id, decoder);
    }

    /// Decodes a shape payload by type identifier.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownShapeType`] if no decoder is registered for
    /// `type_id`; otherwise whatever the decoder reports.
    pub fn decode(
        &self,
        type_id: &str,
        reader: &mut ByteReader<'_>,
    ) -> Result<Box<dyn Shape>, CodecError> {
        let decoder = self
            .decoders
            .get(type_id)
            .ok_or_else(|| CodecError::UnknownShapeType(type_id.to_owned()))?;
        decoder(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::SphereShape;

    #[test]
    fn test_unknown_type_id_is_hard_error() {
        let registry = ShapeRegistry::with_builtin();
        let mut reader = ByteReader::new(&[]);
        let err = registry.decode("wardstone:torus", &mut reader).unwrap_err();
        assert_eq!(err, CodecError::UnknownShapeType("wardstone:torus".to_owned()));
    }

    #[test]
    fn test_registered_decoder_is_dispatched() {
        let registry = ShapeRegistry::with_builtin();
        let sphere = SphereShape::new("overworld", Vec3::new(0.0, 64.0, 0.0), 5.0);

        let mut writer = ByteWriter::new();
        sphere.encode(&mut writer);
        let bytes = writer.into_bytes();

        let mut reader = ByteReader::new(&bytes);
        let decoded = registry.decode(SphereShape::TYPE_ID, &mut reader).unwrap();
        assert_eq!(decoded.type_id(), SphereShape::TYPE_ID);
        assert_eq!(decoded.level_name(), "overworld");
        assert!(decoded.contains(Vec3::new(0.0, 66.0, 0.0)));
    }
}
