//! # Wardstone Block Utilities
//!
//! Block-placement support decoupled from zone management. The centerpiece
//! is [`RandomWeightedPicker`]: inverse-CDF sampling over a discrete
//! distribution of block producers, preserving exact proportional
//! probability under floating accumulation.
//!
//! Precondition violations (empty entry set, non-positive weight, broken sum
//! accounting) are programming errors and abort; they are never reported as
//! recoverable results.

pub mod block;
pub mod picker;

pub use block::BlockType;
pub use picker::{ConstantProducer, Producer, RandomWeightedPicker, WeightedEntry};
