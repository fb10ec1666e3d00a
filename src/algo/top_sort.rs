/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first, Sequential};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Returns the nodes of the graph in reverse post-order.
///
/// Depth-first visits are started from every node not yet visited, in
/// increasing order; a node is placed in the result before all nodes that
/// completed their visit earlier, so reading the result from the start is
/// equivalent to popping a stack onto which nodes are pushed at the end of
/// their visit. In particular, every node precedes all nodes reachable from it
/// that do not reach it back.
///
/// If the graph is acyclic, the result is a topological sort.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::directed([0, 1, 2, 3], [(0, 1), (0, 2), (2, 3), (1, 3)]);
/// assert_eq!(
///     reverse_post_order(&graph, no_logging![]),
///     vec![0, 2, 1, 3].into_boxed_slice()
/// );
/// ```
pub fn reverse_post_order(
    graph: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing reverse post-order");

    let mut visit = depth_first::Seq::new(&graph);
    let mut order = vec![0; num_nodes].into_boxed_slice();
    // Finished nodes fill the result from the end
    let mut free = num_nodes;

    visit
        .visit(0..num_nodes, |event| {
            match event {
                depth_first::Event::Previsit { .. } => pl.light_update(),
                depth_first::Event::Postvisit { node } => {
                    free -= 1;
                    order[free] = node;
                }
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    pl.done();
    order
}
