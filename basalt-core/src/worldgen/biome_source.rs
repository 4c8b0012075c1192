//! Biome source abstraction for dimension-agnostic biome generation.
//!
//! - `MultiNoiseBiomeSource`: climate parameter matching via the R-tree in
//!   [`ParameterList`]
//! - `Fixed`: a single biome everywhere
//!
//! The chunk generator calls `chunk_sampler()` per chunk (or per worker) to get a
//! `ChunkBiomeSampler` that owns the lookup caches. Samplers are never shared
//! between threads, so the caches need no synchronization.

use std::sync::Arc;

use basalt_registry::biome::BiomeRef;
use basalt_registry::{RegistryError, multi_noise};
use basalt_utils::climate::{LocalityCache, ParameterList};

use super::ClimateSampler;

/// Dimension-specific biome source.
#[non_exhaustive]
pub enum BiomeSourceKind {
    /// Multi-noise biome source (climate matching).
    MultiNoise(MultiNoiseBiomeSource),
    /// The same biome everywhere.
    Fixed(BiomeRef),
}

impl BiomeSourceKind {
    /// Create a multi-noise biome source from a parameter list and a climate sampler.
    #[must_use]
    pub fn multi_noise(
        parameters: Arc<ParameterList<BiomeRef>>,
        sampler: impl ClimateSampler + 'static,
    ) -> Self {
        Self::MultiNoise(MultiNoiseBiomeSource::new(parameters, sampler))
    }

    /// Create a multi-noise biome source from a bundled preset such as `nether`.
    pub fn preset(
        name: &str,
        sampler: impl ClimateSampler + 'static,
    ) -> Result<Self, RegistryError> {
        Ok(Self::MultiNoise(MultiNoiseBiomeSource::from_preset(
            name, sampler,
        )?))
    }

    /// Create a fixed biome source.
    #[must_use]
    pub const fn fixed(biome: BiomeRef) -> Self {
        Self::Fixed(biome)
    }

    /// Create a per-chunk biome sampler.
    ///
    /// The returned sampler holds lookup caches and should stay on one thread.
    #[must_use]
    pub fn chunk_sampler(&self) -> ChunkBiomeSampler<'_> {
        match self {
            Self::MultiNoise(source) => ChunkBiomeSampler::MultiNoise(source.chunk_sampler()),
            Self::Fixed(biome) => ChunkBiomeSampler::Fixed(*biome),
        }
    }

    /// Every biome this source can produce, without duplicates, in authoring order.
    #[must_use]
    pub fn possible_biomes(&self) -> Vec<BiomeRef> {
        match self {
            Self::MultiNoise(source) => {
                let mut biomes: Vec<BiomeRef> = Vec::new();
                for (_, biome) in source.parameters.values() {
                    if !biomes.contains(biome) {
                        biomes.push(*biome);
                    }
                }
                biomes
            }
            Self::Fixed(biome) => vec![*biome],
        }
    }
}

/// Per-chunk biome sampler with internal caches.
///
/// Uses enum dispatch instead of `dyn` on the hot per-quart sampling path.
pub enum ChunkBiomeSampler<'a> {
    /// Multi-noise sampler (climate → R-tree lookup).
    MultiNoise(MultiNoiseChunkBiomeSampler<'a>),
    /// Fixed biome.
    Fixed(BiomeRef),
}

impl ChunkBiomeSampler<'_> {
    /// Get the biome at the given quart position.
    #[inline]
    pub fn sample(&mut self, quart_x: i32, quart_y: i32, quart_z: i32) -> BiomeRef {
        match self {
            Self::MultiNoise(s) => s.sample(quart_x, quart_y, quart_z),
            Self::Fixed(biome) => *biome,
        }
    }
}

/// Multi-noise biome source.
///
/// Samples climate with its [`ClimateSampler`], then looks the biome up in the
/// parameter list. The parameter list is shared (the same preset can back many
/// dimensions); each chunk sampler carries its own [`LocalityCache`].
pub struct MultiNoiseBiomeSource {
    parameters: Arc<ParameterList<BiomeRef>>,
    climate_sampler: Box<dyn ClimateSampler>,
}

impl MultiNoiseBiomeSource {
    /// Create a new multi-noise biome source.
    #[must_use]
    pub fn new(
        parameters: Arc<ParameterList<BiomeRef>>,
        climate_sampler: impl ClimateSampler + 'static,
    ) -> Self {
        Self {
            parameters,
            climate_sampler: Box::new(climate_sampler),
        }
    }

    /// Create a multi-noise biome source from a bundled preset.
    pub fn from_preset(
        name: &str,
        climate_sampler: impl ClimateSampler + 'static,
    ) -> Result<Self, RegistryError> {
        let parameters = multi_noise::preset(name)?;
        tracing::debug!(
            preset = name,
            depth = parameters.depth(),
            "created multi-noise biome source"
        );
        Ok(Self::new(Arc::new(parameters), climate_sampler))
    }

    /// The parameter list biomes are chosen from.
    #[must_use]
    pub fn parameters(&self) -> &ParameterList<BiomeRef> {
        &self.parameters
    }

    /// Access the underlying climate sampler.
    #[must_use]
    pub fn climate_sampler(&self) -> &dyn ClimateSampler {
        &*self.climate_sampler
    }

    /// Get the biome at a quart position without any caching.
    #[must_use]
    pub fn biome_at(&self, quart_x: i32, quart_y: i32, quart_z: i32) -> BiomeRef {
        let target = self.climate_sampler.sample(quart_x, quart_y, quart_z);
        *self.parameters.find_value(&target)
    }

    fn chunk_sampler(&self) -> MultiNoiseChunkBiomeSampler<'_> {
        MultiNoiseChunkBiomeSampler {
            source: self,
            biome_cache: LocalityCache::new(),
        }
    }
}

/// Per-chunk multi-noise sampler.
pub struct MultiNoiseChunkBiomeSampler<'a> {
    source: &'a MultiNoiseBiomeSource,
    biome_cache: LocalityCache,
}

impl MultiNoiseChunkBiomeSampler<'_> {
    fn sample(&mut self, quart_x: i32, quart_y: i32, quart_z: i32) -> BiomeRef {
        let target = self
            .source
            .climate_sampler
            .sample(quart_x, quart_y, quart_z);
        *self
            .source
            .parameters
            .find_value_cached(&target, &mut self.biome_cache)
    }
}
