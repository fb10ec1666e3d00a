/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first, Sequential, StoppedWhenDone};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{Break, Continue};

/// Returns whether a symmetric (i.e., undirected) graph contains a cycle.
///
/// In a symmetric graph every edge of a depth-first tree is seen twice: once
/// when the child is discovered, and once from the child back to its parent.
/// Any other arc reaching an already discovered node closes a cycle, so the
/// visit stops at the first one.
///
/// Two consequences are worth knowing. Two parallel edges between the same
/// pair of vertices count as a cycle, because the second copy reaches the
/// child from its parent. A loop on the root of a tree goes unnoticed,
/// because a root is its own parent.
///
/// The result is meaningful only for graphs built with an undirected
/// construction policy; for directed graphs, use
/// [`is_acyclic`](crate::algo::is_acyclic()).
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let path = VecGraph::undirected(['a', 'b', 'c'], [('a', 'b'), ('b', 'c')]);
/// assert!(!has_cycle(&path, no_logging![]));
///
/// let triangle = VecGraph::undirected(['a', 'b', 'c'], [('a', 'b'), ('b', 'c'), ('c', 'a')]);
/// assert!(has_cycle(&triangle, no_logging![]));
/// ```
pub fn has_cycle(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Looking for cycles");

    let mut visit = depth_first::Seq::new(&graph);
    let mut tree_parent = vec![0; num_nodes].into_boxed_slice();

    let found = visit.visit(0..num_nodes, |event| match event {
        depth_first::Event::Previsit { node, parent } => {
            tree_parent[node] = parent;
            pl.light_update();
            Continue(())
        }
        depth_first::Event::Revisit { node, pred, .. } if tree_parent[pred] != node => {
            Break(StoppedWhenDone)
        }
        _ => Continue(()),
    });

    pl.done();
    found.is_break()
}
