/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::RandomAccessGraph;

/// Returns whether a graph is symmetric, that is, whether for every arc from
/// `u` to `v` there is an arc from `v` to `u`.
///
/// Arcs are counted with multiplicity: the graph is symmetric if and only if
/// it has as many arcs from `u` to `v` as from `v` to `u` for all `u` and `v`.
/// Graphs built with an undirected construction policy are always symmetric.
pub fn is_symmetric(graph: impl RandomAccessGraph) -> bool {
    let mut arcs = Vec::with_capacity(graph.num_arcs());
    for src in 0..graph.num_nodes() {
        arcs.extend(graph.successors(src).into_iter().map(|dst| (src, dst)));
    }
    let mut reversed = arcs.iter().map(|&(src, dst)| (dst, src)).collect::<Vec<_>>();
    arcs.sort_unstable();
    reversed.sort_unstable();
    arcs == reversed
}
