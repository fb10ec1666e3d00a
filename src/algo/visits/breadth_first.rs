/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Nodes are marked as known when they enter the queue, so each node is
//! queued at most once. The queue holds the nodes of at most two consecutive
//! levels, separated by a marker, which is how the visit knows the distance
//! of each node from the roots without storing it.

use super::Sequential;
use crate::graphs::RandomAccessGraph;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// Events of a breadth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Event {
    /// `node` has just been discovered at `distance` from the closest root.
    Visit { node: usize, distance: usize },
    /// All nodes reachable from the roots of the current call have been
    /// discovered.
    Done,
}

/// A node about to be discovered, as shown to the filter.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Candidate {
    pub node: usize,
    pub distance: usize,
}

/// A breadth-first visit.
///
/// All roots passed to a single call start at distance zero, so passing
/// several roots at once computes distances from a set of nodes. Pass roots
/// one call at a time to obtain a tree per root.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = VecGraph::directed(0..4, [(0, 1), (1, 2), (2, 0), (1, 3), (3, 3)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut distances = vec![None; graph.num_nodes()];
///
/// visit
///     .visit([0], |event| {
///         if let breadth_first::Event::Visit { node, distance } = event {
///             distances[node] = Some(distance);
///         }
///         Continue(())
///     })
///     .continue_value_no_break();
///
/// assert_eq!(distances, vec![Some(0), Some(1), Some(2), Some(2)]);
/// ```
pub struct Seq<'a, G: RandomAccessGraph> {
    graph: &'a G,
    known: BitVec,
    /// `None` separates consecutive levels.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<'a, G: RandomAccessGraph> Seq<'a, G> {
    /// Creates a visit of `graph` in which no node is known.
    pub fn new(graph: &'a G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            known: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }

    fn enqueue(&mut self, node: usize) {
        self.known.set(node, true);
        self.queue.push_back(Some(
            NonMaxUsize::new(node).expect("node index should never be usize::MAX"),
        ));
    }
}

impl<G: RandomAccessGraph> Sequential for Seq<'_, G> {
    type Event = Event;
    type Candidate = Candidate;

    fn visit_filtered<E>(
        &mut self,
        roots: impl IntoIterator<Item = usize>,
        mut callback: impl FnMut(Event) -> ControlFlow<E>,
        mut filter: impl FnMut(Candidate) -> bool,
    ) -> ControlFlow<E> {
        self.queue.clear();

        for root in roots {
            if self.known[root]
                || !filter(Candidate {
                    node: root,
                    distance: 0,
                })
            {
                continue;
            }
            self.enqueue(root);
            callback(Event::Visit {
                node: root,
                distance: 0,
            })?;
        }

        if self.queue.is_empty() {
            return Continue(());
        }

        // Distance of the nodes being dequeued
        let mut distance = 0;
        self.queue.push_back(None);

        while let Some(entry) = self.queue.pop_front() {
            let Some(node) = entry else {
                if self.queue.is_empty() {
                    break;
                }
                distance += 1;
                self.queue.push_back(None);
                continue;
            };

            let graph = self.graph;
            for succ in graph.successors(node.get()) {
                if self.known[succ]
                    || !filter(Candidate {
                        node: succ,
                        distance: distance + 1,
                    })
                {
                    continue;
                }
                self.enqueue(succ);
                callback(Event::Visit {
                    node: succ,
                    distance: distance + 1,
                })?;
            }
        }

        callback(Event::Done)
    }

    #[inline(always)]
    fn known(&self, node: usize) -> bool {
        self.known[node]
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.known.fill(false);
    }
}
