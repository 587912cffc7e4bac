// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_tile_grid::{GridConfig, GridGeometry, Tile, TileSpan, Viewport, pack_columns};

fn dashboard_tiles(len: usize) -> Vec<Tile<u32>> {
    // Repeating mix of small, wide, and tall tiles.
    const SPANS: [(u32, u32); 5] = [(1, 1), (2, 2), (1, 2), (3, 1), (1, 4)];
    (0..len)
        .map(|i| {
            let (columns, rows) = SPANS[i % SPANS.len()];
            Tile::new(TileSpan::new(columns, rows), i as u32)
        })
        .collect()
}

fn bench_geometry(c: &mut Criterion) {
    let config = GridConfig::default();
    let mut group = c.benchmark_group("tile_grid/geometry");

    for (width, height) in [(800.0, 480.0), (1920.0, 1080.0), (3840.0, 2160.0)] {
        group.bench_with_input(
            BenchmarkId::new("compute", format!("{width}x{height}")),
            &Viewport::new(width, height),
            |b, viewport| {
                b.iter(|| black_box(GridGeometry::compute(*viewport, &config)));
            },
        );
    }

    group.finish();
}

fn bench_pack_columns(c: &mut Criterion) {
    let geometry = GridGeometry::compute(Viewport::new(1920.0, 1080.0), &GridConfig::default());
    let mut group = c.benchmark_group("tile_grid/pack_columns");

    // Packing is a single linear pass; throughput should stay flat as lists grow.
    for len in [16usize, 256, 4_096, 65_536] {
        let tiles = dashboard_tiles(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("owned", len), &tiles, |b, tiles| {
            b.iter_batched(
                || tiles.clone(),
                |tiles| {
                    black_box(pack_columns(
                        tiles,
                        geometry.cell_size(),
                        geometry.gap(),
                        geometry.max_column_height(),
                    ));
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("borrowed", len), &tiles, |b, tiles| {
            b.iter(|| black_box(geometry.pack(tiles.iter())));
        });

        group.bench_with_input(BenchmarkId::new("placements", len), &tiles, |b, tiles| {
            let layout = geometry.pack(tiles.iter());
            b.iter(|| black_box(layout.placements().count()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_pack_columns);
criterion_main!(benches);
