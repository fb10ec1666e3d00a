/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::no_logging;
use graph_algo::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const NUM_SAMPLES: usize = 20;
const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const AVG_DEGREE: usize = 8;

fn random_graph(num_nodes: usize) -> VecGraph<usize> {
    let mut rng = SmallRng::seed_from_u64(0);
    let arcs = (0..num_nodes * AVG_DEGREE)
        .map(|_| {
            (
                rng.random_range(0..num_nodes),
                rng.random_range(0..num_nodes),
            )
        })
        .collect::<Vec<_>>();
    VecGraph::directed(0..num_nodes, arcs)
}

pub fn bench_visits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Visits");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    for num_nodes in SIZES {
        let graph = random_graph(num_nodes);
        let parameter = format!("{} nodes, {} arcs", graph.num_nodes(), graph.num_arcs());
        group.throughput(Throughput::Elements(graph.num_nodes() as u64));

        group.bench_with_input(BenchmarkId::new("Depth first", &parameter), &graph, |b, g| {
            b.iter_with_large_drop(|| dfs_order(g))
        });

        group.bench_with_input(
            BenchmarkId::new("Breadth first", &parameter),
            &graph,
            |b, g| b.iter_with_large_drop(|| bfs_order(g)),
        );

        group.bench_with_input(BenchmarkId::new("Kosaraju", &parameter), &graph, |b, g| {
            b.iter_with_large_drop(|| sccs::kosaraju(g, no_logging![]))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visits);
criterion_main!(benches);
