#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use basalt_utils::climate::{LocalityCache, Parameter, ParameterList, ParameterPoint, TargetPoint};

/// A grid-shaped catalog roughly the size of the overworld's (several thousand regions).
fn grid_catalog() -> Vec<(ParameterPoint, usize)> {
    let bands = |count: i64| -> Vec<Parameter> {
        let width = 20_000 / count;
        (0..count)
            .map(|i| Parameter::new(-10_000 + i * width, -10_000 + (i + 1) * width))
            .collect()
    };

    let mut catalog = Vec::new();
    for temperature in bands(5) {
        for humidity in bands(5) {
            for continentalness in bands(7) {
                for erosion in bands(7) {
                    for weirdness in bands(4) {
                        for depth in [Parameter::new(0, 0), Parameter::new(10_000, 10_000)] {
                            let index = catalog.len();
                            catalog.push((
                                ParameterPoint::new(
                                    temperature,
                                    humidity,
                                    continentalness,
                                    erosion,
                                    depth,
                                    weirdness,
                                    0,
                                ),
                                index,
                            ));
                        }
                    }
                }
            }
        }
    }
    catalog
}

/// Targets along a slow diagonal, like neighbouring columns of a chunk.
fn coherent_targets(count: i64) -> Vec<TargetPoint> {
    (0..count)
        .map(|i| {
            let t = i * 37 - 9_000;
            TargetPoint::new(t, -t / 2, t / 3, (t * 7) % 10_000, 0, -t)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let catalog = grid_catalog();
    c.bench_function("parameter_list_build", |b| {
        b.iter(|| black_box(ParameterList::new(black_box(catalog.clone()))));
    });
}

fn bench_lookup(c: &mut Criterion) {
    let Ok(list) = ParameterList::new(grid_catalog()) else {
        return;
    };
    let targets = coherent_targets(512);

    let mut group = c.benchmark_group("parameter_list_lookup");
    group.bench_with_input(BenchmarkId::new("cold", targets.len()), &targets, |b, t| {
        b.iter(|| {
            for target in t {
                black_box(list.find_value(target));
            }
        });
    });
    group.bench_with_input(BenchmarkId::new("cached", targets.len()), &targets, |b, t| {
        b.iter(|| {
            let mut cache = LocalityCache::new();
            for target in t {
                black_box(list.find_value_cached(target, &mut cache));
            }
        });
    });
    group.bench_with_input(
        BenchmarkId::new("brute_force", targets.len()),
        &targets,
        |b, t| {
            b.iter(|| {
                for target in t {
                    black_box(list.find_value_brute_force(target));
                }
            });
        },
    );
    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup);
criterion_main!(benches);
