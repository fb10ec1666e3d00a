/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{label_trees, Sccs};
use crate::graphs::RandomAccessGraph;
use crate::utils::is_symmetric;
use dsi_progress_logger::ProgressLog;

/// Computes the connected components of a symmetric graph.
///
/// In a symmetric graph the nodes reachable from a node are exactly those of
/// its component, so a depth-first tree started from each node not yet
/// discovered, in increasing order, spans a whole component. Components are
/// thus numbered by their smallest node.
///
/// Symmetry is checked only in debug builds; on a directed graph the result
/// is a partition into visit trees, which has no particular meaning.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use graph_algo::prelude::*;
///
/// let graph = VecGraph::undirected(['a', 'b', 'c', 'd'], [('a', 'c'), ('b', 'd')]);
/// let cc = sccs::symm_seq(&graph, no_logging![]);
///
/// assert_eq!(cc.num_components(), 2);
/// assert!(cc.connected(0, 2)?);
/// assert!(!cc.connected(0, 1)?);
/// # Ok::<(), OutOfRange>(())
/// ```
pub fn symm_seq(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Sccs {
    debug_assert!(is_symmetric(&graph));

    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing connected components...");
    let cc = label_trees(&graph, 0..num_nodes, pl);
    pl.done();

    log::debug!("Found {} connected components", cc.num_components());
    cc
}
