/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{label_trees, Sccs};
use crate::algo::reverse_post_order;
use crate::graphs::{RandomAccessGraph, Transpose};
use dsi_progress_logger::ProgressLog;

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm, building the transpose on the fly.
///
/// See [`kosaraju_with_t`] for the details.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use graph_algo::prelude::*;
///
/// let graph = VecGraph::directed(
///     ['A', 'B', 'C', 'D', 'E', 'F', 'G'],
///     [('A', 'B'), ('B', 'C'), ('B', 'E'), ('B', 'F'), ('C', 'E'),
///      ('D', 'C'), ('E', 'B'), ('E', 'D'), ('F', 'G')],
/// );
/// let sccs = sccs::kosaraju(&graph, no_logging![]);
///
/// assert_eq!(sccs.num_components(), 4);
/// assert_eq!(sccs.members_of(1)?, vec![1, 2, 3, 4]);
/// # Ok::<(), OutOfRange>(())
/// ```
pub fn kosaraju<G: RandomAccessGraph + Transpose>(
    graph: &G,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let transpose = graph.transpose();
    kosaraju_with_t(graph, &transpose, pl)
}

/// Computes the strongly connected components of a graph using Kosaraju's
/// algorithm.
///
/// We first compute the [reverse post-order](reverse_post_order()) of the
/// transpose; then, we visit `graph` starting from nodes in that order, using
/// the same visit for all roots, so that each visit discovers exactly the
/// nodes of a new component.
///
/// The order guarantees that if there is an arc from component _C_ to a
/// different component _D_, some node of _D_ precedes all nodes of _C_, so
/// _D_ is completely visited before the visit starting in _C_, which thus
/// cannot leak into _D_.
///
/// # Arguments
///
/// * `graph`: the graph.
///
/// * `transpose`: the transpose of `graph`.
///
/// * `pl`: a progress logger.
pub fn kosaraju_with_t(
    graph: impl RandomAccessGraph,
    transpose: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let num_nodes = graph.num_nodes();
    debug_assert_eq!(num_nodes, transpose.num_nodes());
    debug_assert_eq!(graph.num_arcs(), transpose.num_arcs());

    let order = reverse_post_order(&transpose, pl);

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing strongly connected components...");
    let sccs = label_trees(&graph, order.iter().copied(), pl);
    pl.done();

    log::debug!(
        "Found {} strongly connected components",
        sccs.num_components()
    );
    sccs
}
