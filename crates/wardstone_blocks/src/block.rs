//! Block identity used by placement logic.

use std::fmt;

/// World block identity: numeric id plus variant metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockType {
    /// Block id.
    pub id: u16,
    /// Variant metadata (wool color, log orientation, ...).
    pub meta: u8,
}

impl BlockType {
    /// Creates a block type.
    #[must_use]
    pub const fn new(id: u16, meta: u8) -> Self {
        Self { id, meta }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(BlockType::new(35, 14).to_string(), "35:14");
    }
}
