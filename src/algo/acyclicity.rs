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

/// Returns whether a directed graph is acyclic.
///
/// A directed graph has a cycle if and only if a depth-first visit finds an
/// arc leading to a node on the current visit path (loops included), so the
/// visit tracks the path and stops at the first such arc. Arcs to nodes
/// whose visit is complete are harmless.
///
/// On a graph built with an undirected construction policy every edge is a
/// cycle of length two, so the result is true only if there are no edges.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::directed([0, 1, 2], [(0, 1), (1, 2)]);
/// assert!(is_acyclic(&graph, no_logging![]));
///
/// let graph = VecGraph::directed([0, 1, 2], [(0, 1), (1, 2), (2, 0)]);
/// assert!(!is_acyclic(&graph, no_logging![]));
/// ```
pub fn is_acyclic(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking acyclicity");

    let mut visit = depth_first::SeqPath::new(&graph);
    let back_arc = visit.visit(0..num_nodes, |event| match event {
        depth_first::Event::Previsit { .. } => {
            pl.light_update();
            Continue(())
        }
        depth_first::Event::Revisit { on_path: true, .. } => Break(StoppedWhenDone),
        _ => Continue(()),
    });

    pl.done();
    back_arc.is_continue()
}
