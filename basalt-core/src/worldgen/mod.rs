//! World generation module.
//!
//! Connects climate samplers (which turn world positions into climate targets)
//! to biome sources (which turn climate targets into biomes).

mod biome_source;
mod climate_sampler;

pub use biome_source::{
    BiomeSourceKind, ChunkBiomeSampler, MultiNoiseBiomeSource, MultiNoiseChunkBiomeSampler,
};
pub use climate_sampler::{ClimateSampler, WaveClimateSampler};
