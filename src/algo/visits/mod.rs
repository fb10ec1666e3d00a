/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first and breadth-first visits.
//!
//! A visit is an object borrowing a graph and owning the set of nodes it has
//! already discovered. Every call to [`visit`](Sequential::visit) receives a
//! sequence of roots and a callback; roots that are already known are
//! skipped, so calling a visit repeatedly, or passing it many roots, explores
//! each node at most once. This is how the analyses in this crate share the
//! visit state between trees (see, e.g., [Kosaraju's
//! algorithm](crate::algo::sccs::kosaraju)). [`reset`](Sequential::reset)
//! forgets every discovered node.
//!
//! The callback receives the events of the visit (see
//! [`depth_first::Event`] and [`breadth_first::Event`]) and returns a
//! [`ControlFlow`]. Returning [`Break`](ControlFlow::Break) stops the visit
//! at once, and the break value becomes the result of the visit method. A
//! stopped visit must be reset before it is used again. Visits that are never
//! stopped can discard their result with
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break).
//!
//! [`visit_filtered`](Sequential::visit_filtered) also takes a filter, which
//! is shown every node that is about to be discovered and may reject it. A
//! rejected node is not marked, so a later visit may still reach it.
//!
//! [`dfs_order`] and [`bfs_order`] (and their single-root variants) collect
//! the visit order of nodes.

pub mod breadth_first;
pub mod depth_first;

mod order;
pub use order::*;

use std::ops::ControlFlow;
use thiserror::Error;

/// Break value for visits that stop as soon as they know their answer, such
/// as a search for a cycle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("The visit was stopped because its result is known")]
pub struct StoppedWhenDone;

/// A visit that runs on the calling thread.
pub trait Sequential {
    /// The type of events passed to the callback.
    type Event;
    /// What the filter is told about a node before it is discovered.
    type Candidate;

    /// Visits the graph from `roots`, discovering only the nodes accepted by
    /// `filter`.
    ///
    /// Roots already known, or rejected by the filter, are skipped.
    fn visit_filtered<E>(
        &mut self,
        roots: impl IntoIterator<Item = usize>,
        callback: impl FnMut(Self::Event) -> ControlFlow<E>,
        filter: impl FnMut(Self::Candidate) -> bool,
    ) -> ControlFlow<E>;

    /// Visits the graph from `roots`.
    fn visit<E>(
        &mut self,
        roots: impl IntoIterator<Item = usize>,
        callback: impl FnMut(Self::Event) -> ControlFlow<E>,
    ) -> ControlFlow<E> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Returns whether `node` has been discovered since the last reset.
    fn known(&self, node: usize) -> bool;

    /// Forgets all discovered nodes.
    fn reset(&mut self);
}
