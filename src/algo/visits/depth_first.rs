/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! The visit is iterative: instead of recursing, it keeps a frame for each
//! node on the current visit path, holding the iterator on the successors of
//! the node that have not been examined yet. Successors are examined in the
//! order in which the graph enumerates them, so nodes are discovered in
//! exactly the same order as in the recursive formulation.
//!
//! [`Seq`] is the plain visit; [`SeqPath`] additionally remembers which nodes
//! are on the visit path, at the cost of one more bit per node, and reports
//! it in [`Revisit`](Event::Revisit) events.

use super::Sequential;
use crate::graphs::RandomAccessGraph;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// Events of a depth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// `node` has just been discovered through an arc from `parent`. Roots
    /// are their own parent.
    Previsit { node: usize, parent: usize },
    /// An arc from `pred` leads to `node`, which was already known.
    ///
    /// `on_path` is true if `node` is an ancestor of `pred` (or `pred`
    /// itself), that is, if the arc closes a directed cycle. It is always
    /// false for visits that do not track the path.
    Revisit {
        node: usize,
        pred: usize,
        on_path: bool,
    },
    /// All successors of `node` have been examined.
    Postvisit { node: usize },
    /// The tree of the current root is complete.
    Done,
}

/// A node about to be discovered, as shown to the filter.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Candidate {
    pub node: usize,
    /// The node whose successor is `node`; for roots, `node` itself.
    pub parent: usize,
}

/// A depth-first visit.
pub type Seq<'a, G> = SeqVisit<'a, G, false>;

/// A depth-first visit that knows which nodes are on the visit path.
pub type SeqPath<'a, G> = SeqVisit<'a, G, true>;

/// Iterative depth-first visit; use it through [`Seq`] or [`SeqPath`].
///
/// # Examples
///
/// The preorder of a graph:
///
/// ```
/// use graph_algo::prelude::*;
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = VecGraph::directed([0, 1, 2, 3], [(0, 2), (2, 1), (0, 3)]);
/// let mut visit = depth_first::Seq::new(&graph);
/// let mut preorder = vec![];
///
/// visit
///     .visit(0..graph.num_nodes(), |event| {
///         if let depth_first::Event::Previsit { node, .. } = event {
///             preorder.push(node);
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
///
/// assert_eq!(preorder, vec![0, 2, 1, 3]);
/// ```
///
/// A directed cycle exists if and only if some arc leads back to the path:
///
/// ```
/// use graph_algo::prelude::*;
/// use graph_algo::algo::visits::StoppedWhenDone;
/// use std::ops::ControlFlow::{Break, Continue};
///
/// let graph = VecGraph::directed([0, 1, 2, 3], [(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = depth_first::SeqPath::new(&graph);
///
/// let found = visit.visit(0..graph.num_nodes(), |event| match event {
///     depth_first::Event::Revisit { on_path: true, .. } => Break(StoppedWhenDone),
///     _ => Continue(()),
/// });
/// assert!(found.is_break());
/// ```
pub struct SeqVisit<'a, G: RandomAccessGraph, const PATH: bool> {
    graph: &'a G,
    known: BitVec,
    /// Empty unless `PATH`.
    on_path: BitVec,
    /// A node of the visit path and its successors still to be examined.
    frames: Vec<(usize, G::Successors<'a>)>,
}

impl<'a, G: RandomAccessGraph, const PATH: bool> SeqVisit<'a, G, PATH> {
    /// Creates a visit of `graph` in which no node is known.
    pub fn new(graph: &'a G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            known: BitVec::new(num_nodes),
            on_path: BitVec::new(if PATH { num_nodes } else { 0 }),
            frames: Vec::new(),
        }
    }

    fn enter(&mut self, node: usize) {
        let graph = self.graph;
        self.known.set(node, true);
        if PATH {
            self.on_path.set(node, true);
        }
        self.frames.push((node, graph.successors(node)));
    }
}

impl<G: RandomAccessGraph, const PATH: bool> Sequential for SeqVisit<'_, G, PATH> {
    type Event = Event;
    type Candidate = Candidate;

    fn visit_filtered<E>(
        &mut self,
        roots: impl IntoIterator<Item = usize>,
        mut callback: impl FnMut(Event) -> ControlFlow<E>,
        mut filter: impl FnMut(Candidate) -> bool,
    ) -> ControlFlow<E> {
        for root in roots {
            if self.known[root]
                || !filter(Candidate {
                    node: root,
                    parent: root,
                })
            {
                continue;
            }

            self.enter(root);
            callback(Event::Previsit {
                node: root,
                parent: root,
            })?;

            while let Some((node, successors)) = self.frames.last_mut() {
                let node = *node;
                match successors.next() {
                    Some(succ) if self.known[succ] => {
                        callback(Event::Revisit {
                            node: succ,
                            pred: node,
                            on_path: PATH && self.on_path[succ],
                        })?;
                    }
                    Some(succ) => {
                        if filter(Candidate {
                            node: succ,
                            parent: node,
                        }) {
                            self.enter(succ);
                            callback(Event::Previsit { node: succ, parent: node })?;
                        }
                    }
                    None => {
                        self.frames.pop();
                        if PATH {
                            self.on_path.set(node, false);
                        }
                        callback(Event::Postvisit { node })?;
                    }
                }
            }

            callback(Event::Done)?;
        }

        Continue(())
    }

    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.known[node]
    }

    fn reset(&mut self) {
        self.frames.clear();
        self.known.fill(false);
        self.on_path.fill(false);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::visits::StoppedWhenDone;
    use crate::graphs::VecGraph;
    use no_break::NoBreak;
    use std::ops::ControlFlow::Break;

    #[test]
    fn test_events() {
        // 0 <-> 1 -> 2
        let graph = VecGraph::directed([0, 1, 2], [(0, 1), (1, 0), (1, 2)]);
        let mut visit = SeqPath::new(&graph);
        let mut events = vec![];
        visit
            .visit([0], |event| {
                events.push(event);
                Continue(())
            })
            .continue_value_no_break();

        assert_eq!(
            events,
            vec![
                Event::Previsit { node: 0, parent: 0 },
                Event::Previsit { node: 1, parent: 0 },
                Event::Revisit {
                    node: 0,
                    pred: 1,
                    on_path: true
                },
                Event::Previsit { node: 2, parent: 1 },
                Event::Postvisit { node: 2 },
                Event::Postvisit { node: 1 },
                Event::Postvisit { node: 0 },
                Event::Done,
            ]
        );
    }

    #[test]
    fn test_path_is_unwound() {
        // 1 is finished when 2 reaches it, so the arc is not on the path
        let graph = VecGraph::directed([0, 1, 2], [(0, 1), (0, 2), (2, 1)]);
        let mut visit = SeqPath::new(&graph);
        let mut revisits = vec![];
        visit
            .visit([0], |event| {
                if let Event::Revisit { node, on_path, .. } = event {
                    revisits.push((node, on_path));
                }
                Continue(())
            })
            .continue_value_no_break();
        assert_eq!(revisits, vec![(1, false)]);

        // Without path tracking the flag is never set
        let graph = VecGraph::directed([0, 1], [(0, 1), (1, 0)]);
        let mut visit = Seq::new(&graph);
        let result = visit.visit([0], |event| match event {
            Event::Revisit { on_path: true, .. } => Break(StoppedWhenDone),
            _ => Continue(()),
        });
        assert!(result.is_continue());
    }

    #[test]
    fn test_filter_and_reset() {
        let graph = VecGraph::directed([0, 1, 2], [(0, 1), (1, 2)]);
        let mut visit = Seq::new(&graph);
        let mut nodes = vec![];
        visit
            .visit_filtered(
                [0],
                |event| {
                    if let Event::Previsit { node, .. } = event {
                        nodes.push(node);
                    }
                    Continue(())
                },
                |candidate| candidate.node != 1,
            )
            .continue_value_no_break();

        assert_eq!(nodes, vec![0]);
        assert!(visit.known(0));
        assert!(!visit.known(1));

        // Known roots start no tree
        let mut trees = 0;
        visit
            .visit([0, 1], |event| {
                if event == Event::Done {
                    trees += 1;
                }
                Continue(())
            })
            .continue_value_no_break();
        assert_eq!(trees, 1);
        assert!(visit.known(2));

        visit.reset();
        assert!(!visit.known(0));
    }
}
