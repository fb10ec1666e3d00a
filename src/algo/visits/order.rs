/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{breadth_first, depth_first, Sequential};
use crate::graphs::{OutOfRange, RandomAccessGraph};
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

fn dfs_preorder(
    graph: impl RandomAccessGraph,
    roots: impl IntoIterator<Item = usize>,
) -> Box<[usize]> {
    let mut visit = depth_first::Seq::new(&graph);
    let mut order = Vec::with_capacity(graph.num_nodes());
    visit
        .visit(roots, |event| {
            if let depth_first::Event::Previsit { node, .. } = event {
                order.push(node);
            }
            Continue(())
        })
        .continue_value_no_break();
    order.into_boxed_slice()
}

fn bfs_discovery(
    graph: impl RandomAccessGraph,
    roots: impl IntoIterator<Item = usize>,
) -> Box<[usize]> {
    let mut visit = breadth_first::Seq::new(&graph);
    let mut order = Vec::with_capacity(graph.num_nodes());
    for root in roots {
        visit
            .visit([root], |event| {
                if let breadth_first::Event::Visit { node, .. } = event {
                    order.push(node);
                }
                Continue(())
            })
            .continue_value_no_break();
    }
    order.into_boxed_slice()
}

/// Returns the nodes of the graph in depth-first preorder.
///
/// Visits are started from every node not yet visited, in increasing order, so
/// every node appears exactly once and the result is the concatenation of the
/// preorders of the trees of the depth-first forest.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
///
/// let graph = VecGraph::directed(
///     ['A', 'B', 'C', 'D', 'E', 'F', 'G'],
///     [('A', 'B'), ('B', 'C'), ('B', 'E'), ('B', 'F'), ('C', 'E'),
///      ('D', 'C'), ('E', 'B'), ('E', 'D'), ('F', 'G')],
/// );
/// let order = dfs_order(&graph);
/// assert_eq!(
///     graph.vertices_of(order.iter().copied())?,
///     [&'A', &'B', &'C', &'E', &'D', &'F', &'G'],
/// );
/// # Ok::<(), OutOfRange>(())
/// ```
pub fn dfs_order(graph: impl RandomAccessGraph) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    dfs_preorder(graph, 0..num_nodes)
}

/// Returns the nodes reachable from `root` in depth-first preorder.
pub fn dfs_order_from(
    graph: impl RandomAccessGraph,
    root: usize,
) -> Result<Box<[usize]>, OutOfRange> {
    let root = OutOfRange::check(root, graph.num_nodes())?;
    Ok(dfs_preorder(graph, [root]))
}

/// Returns the nodes of the graph in breadth-first order.
///
/// Visits are started from every node not yet visited, in increasing order,
/// and each visit is completed before starting the next one. Nodes are
/// reported (and marked) when they are enqueued.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
///
/// let graph = VecGraph::undirected(
///     ['A', 'B', 'C', 'D', 'E', 'F', 'G'],
///     [('A', 'C'), ('A', 'D'), ('A', 'F'), ('B', 'C'), ('C', 'D'), ('E', 'G'), ('F', 'G')],
/// );
/// let order = bfs_order(&graph);
/// assert_eq!(
///     graph.vertices_of(order.iter().copied())?,
///     [&'A', &'C', &'D', &'F', &'B', &'G', &'E'],
/// );
/// # Ok::<(), OutOfRange>(())
/// ```
pub fn bfs_order(graph: impl RandomAccessGraph) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    bfs_discovery(graph, 0..num_nodes)
}

/// Returns the nodes reachable from `root` in breadth-first order.
pub fn bfs_order_from(
    graph: impl RandomAccessGraph,
    root: usize,
) -> Result<Box<[usize]>, OutOfRange> {
    let root = OutOfRange::check(root, graph.num_nodes())?;
    Ok(bfs_discovery(graph, [root]))
}
