/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use graph_algo::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const VERTICES: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

const DIRECTED: [(char, char); 9] = [
    ('A', 'B'),
    ('B', 'C'),
    ('B', 'E'),
    ('B', 'F'),
    ('C', 'E'),
    ('D', 'C'),
    ('E', 'B'),
    ('E', 'D'),
    ('F', 'G'),
];

/// Renumbers components in order of first appearance, so that labelings
/// describing the same partition compare equal.
fn canonical(components: &[usize]) -> Vec<usize> {
    let mut map = vec![usize::MAX; components.len()];
    let mut next = 0;
    components
        .iter()
        .map(|&c| {
            if map[c] == usize::MAX {
                map[c] = next;
                next += 1;
            }
            map[c]
        })
        .collect()
}

fn reachability(graph: impl RandomAccessGraph) -> Vec<Vec<bool>> {
    let num_nodes = graph.num_nodes();
    (0..num_nodes)
        .map(|node| {
            let mut reached = vec![false; num_nodes];
            for other in dfs_order_from(&graph, node).unwrap().iter() {
                reached[*other] = true;
            }
            reached
        })
        .collect()
}

#[test]
fn test_kosaraju_example() -> Result<()> {
    let graph = VecGraph::directed(VERTICES, DIRECTED);
    let mut sccs = sccs::kosaraju(&graph, no_logging![]);

    assert_eq!(sccs.num_components(), 4);
    assert!(!sccs.is_single_component());
    assert_eq!(sccs.members_of(1)?, vec![1, 2, 3, 4]);
    assert_eq!(sccs.members_of(0)?, vec![0]);
    assert_eq!(sccs.members_of(5)?, vec![5]);
    assert_eq!(sccs.members_of(6)?, vec![6]);
    assert!(sccs.connected(1, 3)?);
    assert!(!sccs.connected(0, 1)?);
    assert!(!sccs.connected(5, 6)?);
    assert!(sccs.component_of(7).is_err());

    // Components are numbered in discovery order: G, F, {B, C, D, E}, A
    assert_eq!(sccs.components(), &[3, 2, 2, 2, 2, 1, 0]);

    assert_eq!(sccs.sort_by_size(), vec![4, 1, 1, 1].into_boxed_slice());
    assert_eq!(sccs.component_of(1)?, 0);
    assert_eq!(sccs.members_of(2)?, vec![1, 2, 3, 4]);
    Ok(())
}

#[test]
fn test_kosaraju_matrix() {
    let list = VecGraph::directed(VERTICES, DIRECTED);
    let matrix = MatrixGraph::directed(VERTICES, DIRECTED);
    let list_sccs = sccs::kosaraju(&list, no_logging![]);
    let matrix_sccs = sccs::kosaraju(&matrix, no_logging![]);
    assert_eq!(
        canonical(list_sccs.components()),
        canonical(matrix_sccs.components())
    );
}

#[test]
fn test_acyclic_and_cycle() {
    let dag = VecGraph::directed(0..5, [(0, 1), (1, 2), (0, 3), (3, 2), (2, 4)]);
    let sccs = sccs::kosaraju(&dag, no_logging![]);
    assert_eq!(sccs.num_components(), 5);

    let cycle = VecGraph::directed(0..5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
    let sccs = sccs::kosaraju(&cycle, no_logging![]);
    assert_eq!(sccs.num_components(), 1);
    assert!(sccs.is_single_component());

    let empty = VecGraph::<usize>::directed([], Vec::<(usize, usize)>::new());
    let sccs = sccs::kosaraju(&empty, no_logging![]);
    assert_eq!(sccs.num_components(), 0);
    assert!(!sccs.is_single_component());
}

#[test]
fn test_kosaraju_with_transpose() {
    let graph = VecGraph::directed(VERTICES, DIRECTED);
    let transpose = graph.transpose();
    assert_eq!(
        sccs::kosaraju_with_t(&graph, &transpose, no_logging![]),
        sccs::kosaraju(&graph, no_logging![])
    );
}

#[test]
fn test_kosaraju_random() {
    for seed in 0..10 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let num_nodes = 40;
        let arcs = (0..60)
            .map(|_| {
                (
                    rng.random_range(0..num_nodes),
                    rng.random_range(0..num_nodes),
                )
            })
            .collect::<Vec<_>>();
        let graph = VecGraph::directed(0..num_nodes, arcs);
        let sccs = sccs::kosaraju(&graph, no_logging![]);
        let reach = reachability(&graph);

        for u in 0..num_nodes {
            for v in 0..num_nodes {
                assert_eq!(
                    sccs.connected(u, v).unwrap(),
                    reach[u][v] && reach[v][u],
                    "nodes {u} and {v} (seed {seed})"
                );
            }
        }
    }
}

#[test]
fn test_connected_components() -> Result<()> {
    // No edges: every vertex is a component
    let graph = VecGraph::undirected(VERTICES, Vec::<(char, char)>::new());
    let cc = sccs::symm_seq(&graph, no_logging![]);
    assert_eq!(cc.num_components(), 7);
    assert!(!cc.connected(0, 1)?);

    let graph = VecGraph::undirected(
        VERTICES,
        [
            ('A', 'C'),
            ('A', 'D'),
            ('A', 'F'),
            ('B', 'C'),
            ('C', 'D'),
            ('E', 'G'),
            ('F', 'G'),
        ],
    );
    let cc = sccs::symm_seq(&graph, no_logging![]);
    assert_eq!(cc.num_components(), 1);
    assert!(cc.is_single_component());
    assert!(cc.connected(1, 4)?);

    // Two pieces: {A, B, C} and {D, E}, plus the isolated F and G
    let graph = MatrixGraph::undirected(
        VERTICES,
        [('A', 'B'), ('B', 'C'), ('D', 'E'), ('E', 'D')],
    );
    let cc = sccs::symm_seq(&graph, no_logging![]);
    assert_eq!(cc.num_components(), 4);
    assert_eq!(cc.components(), &[0, 0, 0, 1, 1, 2, 3]);
    assert_eq!(cc.members_of(4)?, vec![3, 4]);
    assert_eq!(cc.compute_sizes(), vec![3, 2, 1, 1].into_boxed_slice());
    Ok(())
}
