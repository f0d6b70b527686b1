//! Opaque color symbols.
//!
//! The engine only ever compares colors for equality; what a color *looks*
//! like belongs to the rendering layer. The packed-RGB representation exists
//! so racks dealt from an RGB palette and colors shown in diagnostics stay
//! readable.

use serde::{Deserialize, Serialize};

/// An opaque, comparable color symbol.
///
/// Stored as a packed `0x00RRGGBB` value. Two colors match iff their packed
/// values are equal; the engine attaches no other meaning to the bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    /// Create a color from a raw packed value.
    #[must_use]
    pub const fn new(packed: u32) -> Self {
        Self(packed)
    }

    /// Create a color from RGB components.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Get the raw packed value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_packing() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.raw(), 0x123456);
    }

    #[test]
    fn test_equality_is_the_only_semantics() {
        assert_eq!(Color::new(7), Color::new(7));
        assert_ne!(Color::new(7), Color::new(8));
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(format!("{}", Color::from_rgb(0xab, 0x00, 0xff)), "#ab00ff");
    }

    #[test]
    fn test_serialization() {
        let c = Color::from_rgb(1, 2, 3);
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
