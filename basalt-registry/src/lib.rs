//! Static game data for Basalt: biomes and multi-noise biome presets.

pub mod biome;
pub mod multi_noise;
pub mod vanilla_biomes;

use thiserror::Error;

use basalt_utils::climate::ClimateError;

/// An error that can occur while loading registry data.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No preset with this name exists.
    #[error("Unknown multi-noise preset {0}")]
    UnknownPreset(String),
    /// A catalog entry referenced a biome that is not registered.
    #[error("Unknown biome {0}")]
    UnknownBiome(String),
    /// The catalog JSON could not be parsed.
    #[error("Failed to parse biome parameters: {0}")]
    Parse(#[from] serde_json::Error),
    /// A catalog entry had invalid climate parameters.
    #[error("Invalid climate parameters for {biome}: {source}")]
    InvalidEntry {
        /// The biome of the offending entry.
        biome: String,
        /// What was wrong with it.
        #[source]
        source: ClimateError,
    },
    /// The parameter list could not be built.
    #[error(transparent)]
    Climate(#[from] ClimateError),
}
