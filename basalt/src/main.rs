//! Basalt biome generator.
//!
//! Loads `config.json5`, builds the configured multi-noise biome source and
//! generates the biomes of a square region of chunks around the origin.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use basalt_core::chunk::{self, ChunkPos};
use basalt_core::config::ServerConfig;
use basalt_core::worldgen::{BiomeSourceKind, WaveClimateSampler};
use basalt_registry::biome::BiomeRef;
use basalt_registry::multi_noise;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Block height where the synthetic climate's depth axis is zero.
const SURFACE_Y: i32 = 64;

fn init_logging(config: &ServerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log filter")?;
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_thread_names(true));

    tracing::subscriber::set_global_default(subscriber)?;
    LogTracer::init()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load_or_create(Path::new("config.json5"))
        .context("failed to load config.json5")?;
    init_logging(&config)?;

    let seed = config.world_seed();
    let world_gen = &config.world_gen;
    log::info!("Starting Basalt with seed {seed} and preset {}", world_gen.preset);

    let source = BiomeSourceKind::preset(
        &world_gen.preset,
        WaveClimateSampler::new(seed, SURFACE_Y),
    )
    .with_context(|| {
        let available = multi_noise::preset_names().unwrap_or_default().join(", ");
        format!("failed to load preset {} (available: {available})", world_gen.preset)
    })?;

    let start = Instant::now();
    let chunks = chunk::generate_region(
        &source,
        ChunkPos::default(),
        world_gen.radius,
        world_gen.min_section_y,
        world_gen.section_count,
    );
    log::info!(
        "Generated biomes for {} chunks in {:?}",
        chunks.len(),
        start.elapsed()
    );

    let mut histogram: BTreeMap<u16, (BiomeRef, usize)> = BTreeMap::new();
    for biome in chunks.iter().flat_map(|c| c.biomes().iter().copied()) {
        histogram.entry(biome.id).or_insert((biome, 0)).1 += 1;
    }
    let total: usize = histogram.values().map(|(_, count)| count).sum();
    for (biome, count) in histogram.values() {
        log::info!(
            "{:<32} {count:>9} ({:.1}%)",
            biome.to_string(),
            *count as f64 * 100.0 / total as f64
        );
    }
    for biome in source.possible_biomes() {
        if !histogram.contains_key(&biome.id) {
            tracing::debug!(%biome, "biome not present in the generated region");
        }
    }

    Ok(())
}
