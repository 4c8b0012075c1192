//! Per-chunk biome storage and generation.
//!
//! Biomes are stored at quart resolution: 4×4×4 cells per 16-block section.

use std::fmt;
use std::time::Instant;

use basalt_registry::biome::BiomeRef;
use basalt_registry::vanilla_biomes;
use rayon::prelude::*;

use crate::worldgen::BiomeSourceKind;

/// Biome cells per section.
pub const BIOMES_PER_SECTION: usize = 64;

/// A chunk position in chunk coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChunkPos {
    /// Chunk x.
    pub x: i32,
    /// Chunk z.
    pub z: i32,
}

impl ChunkPos {
    /// Create a new chunk position.
    #[must_use]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for ChunkPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.z)
    }
}

/// The biomes of one chunk column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkBiomes {
    pos: ChunkPos,
    min_section_y: i32,
    biomes: Vec<BiomeRef>,
}

impl ChunkBiomes {
    fn new(pos: ChunkPos, min_section_y: i32, section_count: usize) -> Self {
        Self {
            pos,
            min_section_y,
            biomes: vec![&vanilla_biomes::THE_VOID; section_count * BIOMES_PER_SECTION],
        }
    }

    #[inline]
    const fn index(section_index: usize, x: usize, y: usize, z: usize) -> usize {
        section_index * BIOMES_PER_SECTION + ((((y << 2) | z) << 2) | x)
    }

    /// Position of this chunk.
    #[must_use]
    pub const fn pos(&self) -> ChunkPos {
        self.pos
    }

    /// Lowest section y.
    #[must_use]
    pub const fn min_section_y(&self) -> i32 {
        self.min_section_y
    }

    /// Number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.biomes.len() / BIOMES_PER_SECTION
    }

    /// Biome at a local quart position, `x`/`z` in `0..4` and `quart_y` relative
    /// to the bottom of the chunk. Returns `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: usize, quart_y: usize, z: usize) -> Option<BiomeRef> {
        if x >= 4 || z >= 4 {
            return None;
        }
        self.biomes
            .get(Self::index(quart_y / 4, x, quart_y % 4, z))
            .copied()
    }

    /// All biome cells, section by section in `y, z, x` order.
    #[must_use]
    pub fn biomes(&self) -> &[BiomeRef] {
        &self.biomes
    }
}

/// Sample the biomes of one chunk.
///
/// Sampling is column-major: every y of an `(x, z)` column is sampled before the
/// next column, so consecutive lookups tend to land in the same climate region.
#[must_use]
pub fn fill_biomes(
    source: &BiomeSourceKind,
    pos: ChunkPos,
    min_section_y: i32,
    section_count: usize,
) -> ChunkBiomes {
    let mut chunk = ChunkBiomes::new(pos, min_section_y, section_count);
    let mut sampler = source.chunk_sampler();

    for local_quart_x in 0..4i32 {
        for local_quart_z in 0..4i32 {
            let quart_x = pos.x * 4 + local_quart_x;
            let quart_z = pos.z * 4 + local_quart_z;

            for (section_index, section_y) in (min_section_y..).take(section_count).enumerate() {
                for local_quart_y in 0..4i32 {
                    let quart_y = section_y * 4 + local_quart_y;
                    let biome = sampler.sample(quart_x, quart_y, quart_z);

                    chunk.biomes[ChunkBiomes::index(
                        section_index,
                        local_quart_x as usize,
                        local_quart_y as usize,
                        local_quart_z as usize,
                    )] = biome;
                }
            }
        }
    }

    chunk
}

/// Generate the biomes of every chunk within `radius` chunks of `center`.
///
/// Chunks are sampled in parallel, each with its own chunk sampler. The result
/// is in row-major order (`z`, then `x`) and does not depend on scheduling.
#[must_use]
pub fn generate_region(
    source: &BiomeSourceKind,
    center: ChunkPos,
    radius: u32,
    min_section_y: i32,
    section_count: usize,
) -> Vec<ChunkBiomes> {
    let start = Instant::now();
    let radius = radius.cast_signed();
    let positions: Vec<ChunkPos> = (-radius..=radius)
        .flat_map(|dz| (-radius..=radius).map(move |dx| (dx, dz)))
        .map(|(dx, dz)| ChunkPos::new(center.x + dx, center.z + dz))
        .collect();

    let chunks: Vec<ChunkBiomes> = positions
        .par_iter()
        .map(|&pos| fill_biomes(source, pos, min_section_y, section_count))
        .collect();

    log::debug!(
        "Generated biomes for {} chunks around {center} in {:?}",
        chunks.len(),
        start.elapsed()
    );
    chunks
}

#[cfg(test)]
mod tests {
    use basalt_registry::multi_noise;
    use basalt_registry::vanilla_biomes::{BASALT_DELTAS, CRIMSON_FOREST, PLAINS};
    use basalt_utils::climate::TargetPoint;

    use super::*;

    #[test]
    fn fixed_source_fills_every_cell() {
        let source = BiomeSourceKind::fixed(&PLAINS);
        let chunk = fill_biomes(&source, ChunkPos::new(3, -2), -4, 24);
        assert_eq!(chunk.section_count(), 24);
        assert_eq!(chunk.biomes().len(), 24 * BIOMES_PER_SECTION);
        assert!(chunk.biomes().iter().all(|&b| b == &PLAINS));
        assert_eq!(chunk.get(4, 0, 0), None);
        assert_eq!(chunk.get(0, 24 * 4, 0), None);
    }

    #[test]
    fn cells_follow_quart_positions() {
        let parameters = multi_noise::preset("nether").expect("nether preset");
        // Hot for even quart x, cold for odd.
        let source = BiomeSourceKind::multi_noise(
            parameters.into(),
            |x: i32, _y: i32, _z: i32| {
                let temperature = if x % 2 == 0 { 5000 } else { -5000 };
                TargetPoint::new(temperature, 0, 0, 0, 0, 0)
            },
        );
        let chunk = fill_biomes(&source, ChunkPos::new(-1, 0), 0, 2);
        for quart_y in 0..8 {
            for z in 0..4 {
                assert_eq!(chunk.get(0, quart_y, z), Some(&CRIMSON_FOREST));
                assert_eq!(chunk.get(1, quart_y, z), Some(&BASALT_DELTAS));
            }
        }
    }

    #[test]
    fn region_is_square_and_ordered() {
        let source = BiomeSourceKind::fixed(&PLAINS);
        let chunks = generate_region(&source, ChunkPos::new(10, 10), 2, 0, 1);
        assert_eq!(chunks.len(), 25);
        assert_eq!(chunks[0].pos(), ChunkPos::new(8, 8));
        assert_eq!(chunks[1].pos(), ChunkPos::new(9, 8));
        assert_eq!(chunks[24].pos(), ChunkPos::new(12, 12));
    }
}
