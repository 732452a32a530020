//! # Built-in Shape Codecs
//!
//! Sphere and cuboid, the two shapes the server ships with. Both payloads
//! start with the level name; the rest is shape-specific geometry.
//!
//! ```text
//! sphere:  string level | f32 cx | f32 cy | f32 cz | f32 radius
//! cuboid:  string level | f32 min.xyz | f32 max.xyz
//! ```

use crate::math::Vec3;
use crate::shape::Shape;
use crate::wire::{ByteReader, ByteWriter, CodecError};

/// Solid sphere bound to one level.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereShape {
    level: String,
    center: Vec3,
    radius: f32,
}

impl SphereShape {
    /// Type identifier embedded in the zone store.
    pub const TYPE_ID: &'static str = "wardstone:sphere";

    /// Creates a sphere; negative radii are clamped to zero.
    #[must_use]
    pub fn new(level: impl Into<String>, center: Vec3, radius: f32) -> Self {
        Self {
            level: level.into(),
            center,
            radius: radius.max(0.0),
        }
    }

    /// Decodes a sphere payload.
    ///
    /// # Errors
    ///
    /// Propagates wire-level failures from the reader.
    pub fn decode(reader: &mut ByteReader<'_>) -> Result<Box<dyn Shape>, CodecError> {
        let level = reader.read_string()?;
        let center = Vec3::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
        let radius = reader.read_f32()?;
        Ok(Box::new(Self::new(level, center, radius)))
    }
}

impl Shape for SphereShape {
    fn type_id(&self) -> &'static str {
        Self::TYPE_ID
    }

    fn level_name(&self) -> &str {
        &self.level
    }

    fn contains(&self, point: Vec3) -> bool {
        point.distance_squared(self.center) <= self.radius * self.radius
    }

    fn encode(&self, out: &mut ByteWriter) {
        out.write_string(&self.level);
        out.write_f32(self.center.x);
        out.write_f32(self.center.y);
        out.write_f32(self.center.z);
        out.write_f32(self.radius);
    }
}

/// Axis-aligned box bound to one level, inclusive on all faces.
#[derive(Debug, Clone, PartialEq)]
pub struct CuboidShape {
    level: String,
    min: Vec3,
    max: Vec3,
}

impl CuboidShape {
    /// Type identifier embedded in the zone store.
    pub const TYPE_ID: &'static str = "wardstone:cuboid";

    /// Creates a cuboid from any two opposite corners.
    #[must_use]
    pub fn new(level: impl Into<String>, a: Vec3, b: Vec3) -> Self {
        Self {
            level: level.into(),
            min: Vec3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Vec3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Decodes a cuboid payload.
    ///
    /// # Errors
    ///
    /// Propagates wire-level failures from the reader.
    pub fn decode(reader: &mut ByteReader<'_>) -> Result<Box<dyn Shape>, CodecError> {
        let level = reader.read_string()?;
        let min = Vec3::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
        let max = Vec3::new(reader.read_f32()?, reader.read_f32()?, reader.read_f32()?);
        Ok(Box::new(Self::new(level, min, max)))
    }
}

impl Shape for CuboidShape {
    fn type_id(&self) -> &'static str {
        Self::TYPE_ID
    }

    fn level_name(&self) -> &str {
        &self.level
    }

    fn contains(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    fn encode(&self, out: &mut ByteWriter) {
        out.write_string(&self.level);
        out.write_f32(self.min.x);
        out.write_f32(self.min.y);
        out.write_f32(self.min.z);
        out.write_f32(self.max.x);
        out.write_f32(self.max.y);
        out.write_f32(self.max.z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_containment() {
        let sphere = SphereShape::new("overworld", Vec3::new(10.0, 64.0, 10.0), 3.0);
        assert!(sphere.contains(Vec3::new(10.0, 64.0, 10.0)));
        // Boundary is inclusive.
        assert!(sphere.contains(Vec3::new(13.0, 64.0, 10.0)));
        assert!(!sphere.contains(Vec3::new(13.1, 64.0, 10.0)));
    }

    #[test]
    fn test_sphere_roundtrip() {
        let sphere = SphereShape::new("nether", Vec3::new(-4.5, 30.0, 7.25), 12.5);
        let mut writer = ByteWriter::new();
        sphere.encode(&mut writer);
        let bytes = writer.into_bytes();

        let mut reader = ByteReader::new(&bytes);
        let decoded = SphereShape::decode(&mut reader).unwrap();
        assert_eq!(decoded.level_name(), "nether");
        assert!(decoded.contains(Vec3::new(-4.5, 30.0, 7.25)));
        assert!(!decoded.contains(Vec3::new(-4.5, 50.0, 7.25)));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_cuboid_corner_normalization() {
        let cuboid = CuboidShape::new(
            "overworld",
            Vec3::new(5.0, 70.0, -5.0),
            Vec3::new(-5.0, 60.0, 5.0),
        );
        assert!(cuboid.contains(Vec3::new(0.0, 65.0, 0.0)));
        // Faces are inclusive.
        assert!(cuboid.contains(Vec3::new(-5.0, 60.0, -5.0)));
        assert!(cuboid.contains(Vec3::new(5.0, 70.0, 5.0)));
        assert!(!cuboid.contains(Vec3::new(5.1, 65.0, 0.0)));
    }

    #[test]
    fn test_cuboid_roundtrip() {
        let cuboid = CuboidShape::new(
            "end",
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
        );
        let mut writer = ByteWriter::new();
        cuboid.encode(&mut writer);
        let bytes = writer.into_bytes();

        let mut reader = ByteReader::new(&bytes);
        let decoded = CuboidShape::decode(&mut reader).unwrap();
        assert_eq!(decoded.level_name(), "end");
        assert!(decoded.contains(Vec3::new(2.0, 3.0, 4.0)));
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_truncated_sphere_payload_fails() {
        let sphere = SphereShape::new("overworld", Vec3::ZERO, 1.0);
        let mut writer = ByteWriter::new();
        sphere.encode(&mut writer);
        let mut bytes = writer.into_bytes();
        bytes.truncate(bytes.len() - 2);

        let mut reader = ByteReader::new(&bytes);
        assert!(SphereShape::decode(&mut reader).is_err());
    }
}
