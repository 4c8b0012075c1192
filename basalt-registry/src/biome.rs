//! Biome definitions.

use std::fmt;

use basalt_utils::Identifier;

/// A registered biome.
///
/// Biomes are only ever handed out as [`BiomeRef`]s to the statics in
/// [`vanilla_biomes`](crate::vanilla_biomes), so equality is identity of the key.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Biome {
    /// Numeric network id, in registry order.
    pub id: u16,
    /// The biome's key, e.g. `minecraft:plains`.
    pub key: Identifier,
}

/// Reference to a registered biome.
pub type BiomeRef = &'static Biome;

impl Biome {
    /// Create a vanilla biome entry.
    #[must_use]
    pub const fn vanilla(id: u16, path: &'static str) -> Self {
        Self {
            id,
            key: Identifier::vanilla_static(path),
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.key, f)
    }
}
