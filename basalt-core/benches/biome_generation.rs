#![allow(missing_docs)]

use basalt_core::chunk::{self, ChunkPos};
use basalt_core::worldgen::{BiomeSourceKind, WaveClimateSampler};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn source(preset: &str) -> BiomeSourceKind {
    BiomeSourceKind::preset(preset, WaveClimateSampler::new(0, 64)).expect("bundled preset")
}

// ── Surface debug ───────────────────────────────────────────────────────────

fn bench_surface_single_chunk(c: &mut Criterion) {
    let source = source("basalt:surface_debug");

    c.bench_function("surface_biome_single_chunk", |b| {
        b.iter(|| chunk::fill_biomes(&source, black_box(ChunkPos::new(0, 0)), -4, 24));
    });
}

fn bench_surface_region(c: &mut Criterion) {
    let source = source("basalt:surface_debug");

    let mut group = c.benchmark_group("surface_biome_region");
    for radius in [3, 5] {
        let side = radius * 2 + 1;
        group.throughput(criterion::Throughput::Elements(u64::from(side * side)));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &radius,
            |b, &r| {
                b.iter(|| chunk::generate_region(&source, ChunkPos::default(), r, -4, 24));
            },
        );
    }
    group.finish();
}

// ── Nether ──────────────────────────────────────────────────────────────────

fn bench_nether_single_chunk(c: &mut Criterion) {
    let source = source("nether");

    c.bench_function("nether_biome_single_chunk", |b| {
        b.iter(|| chunk::fill_biomes(&source, black_box(ChunkPos::new(0, 0)), 0, 16));
    });
}

// ── Source creation ─────────────────────────────────────────────────────────

fn bench_surface_source_creation(c: &mut Criterion) {
    c.bench_function("surface_source_creation", |b| {
        b.iter(|| black_box(source(black_box("basalt:surface_debug"))));
    });
}

criterion_group!(
    benches,
    bench_surface_single_chunk,
    bench_surface_region,
    bench_nether_single_chunk,
    bench_surface_source_creation,
);
criterion_main!(benches);
