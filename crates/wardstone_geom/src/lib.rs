//! # Wardstone Geometry Surface
//!
//! The narrow interface between zone bookkeeping and concrete geometry.
//!
//! Zone management never inspects a shape's structure. It only needs:
//!
//! 1. **Containment**: is a point inside the shape?
//! 2. **Level binding**: which world level does the shape live on?
//! 3. **Codec identity**: a stable string identifying the shape's binary
//!    encoder/decoder pair.
//!
//! Decoders are registered in a [`ShapeRegistry`] at startup. An identifier
//! with no registered decoder is a hard decode failure; a partially decoded
//! zone collection must never be used.

pub mod math;
pub mod shape;
pub mod shapes;
pub mod wire;

pub use math::Vec3;
pub use shape::{Shape, ShapeDecoder, ShapeRegistry};
pub use shapes::{CuboidShape, SphereShape};
pub use wire::{ByteReader, ByteWriter, CodecError};
