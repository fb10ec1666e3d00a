/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graphs with labeled vertices.
//!
//! Vertices are values of an arbitrary type `T` stored in a fixed sequence;
//! internally, a vertex is identified only by its position in the sequence (a
//! *node*, that is, an index in `0..num_nodes()`). All visits and analyses in
//! this crate work on nodes through the [`RandomAccessGraph`] trait, and never
//! depend on how the adjacency relation is stored.
//!
//! There are two representations: [`VecGraph`] stores, for each node, the list
//! of its successors in arc-insertion order (repeated arcs are preserved),
//! whereas [`MatrixGraph`] stores an adjacency matrix (repeated arcs collapse,
//! and successors are enumerated in increasing order).
//!
//! Both are built from a sequence of vertex values and a sequence of pairs of
//! values, using either a directed or an undirected (symmetric) construction
//! policy. An endpoint value is resolved to the *last* position holding an
//! equal value; pairs with an unresolvable endpoint are silently dropped.
//!
//! # Examples
//!
//! ```
//! use graph_algo::prelude::*;
//!
//! let graph = VecGraph::directed(['A', 'B', 'C'], [('A', 'B'), ('B', 'C'), ('C', 'Z')]);
//!
//! assert_eq!(graph.num_nodes(), 3);
//! assert_eq!(graph.num_arcs(), 2);
//! assert_eq!(graph.adjacent(1)?, &[2]);
//! assert_eq!(graph.vertex(2)?, &'C');
//! # Ok::<(), OutOfRange>(())
//! ```

mod vec_graph;
pub use vec_graph::*;

mod matrix_graph;
pub use matrix_graph::*;

use std::borrow::Borrow;
use thiserror::Error;

/// A node index was not smaller than the number of nodes.
#[derive(Error, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[error("Node index {index} out of range (the graph has {num_nodes} nodes)")]
pub struct OutOfRange {
    /// The offending index.
    pub index: usize,
    /// The number of nodes of the graph.
    pub num_nodes: usize,
}

impl OutOfRange {
    /// Returns `index` if it is a valid node index for a graph with
    /// `num_nodes` nodes.
    #[inline(always)]
    pub fn check(index: usize, num_nodes: usize) -> Result<usize, Self> {
        if index < num_nodes {
            Ok(index)
        } else {
            Err(OutOfRange { index, num_nodes })
        }
    }
}

/// A graph providing random access to the successors of its nodes.
///
/// This is the only view of a graph used by visits and analyses. Nodes are
/// numbered from 0 to [`num_nodes`](RandomAccessGraph::num_nodes) (excluded).
pub trait RandomAccessGraph {
    /// The type returned by [`successors`](RandomAccessGraph::successors).
    type Successors<'succ>: Iterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs.
    ///
    /// For graphs built with an undirected construction policy each edge
    /// accounts for two arcs.
    fn num_arcs(&self) -> usize;

    /// Returns the successors of a node.
    ///
    /// # Panics
    ///
    /// Implementations panic if `node` is not smaller than
    /// [`num_nodes`](RandomAccessGraph::num_nodes).
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).count()
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    type Successors<'succ>
        = G::Successors<'succ>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }
}

/// A graph whose nodes carry a vertex value.
pub trait LabeledGraph: RandomAccessGraph {
    /// The type of vertex values.
    type Label;

    /// Returns the vertex values, in node order.
    fn vertices(&self) -> &[Self::Label];

    /// Returns the vertex value of a node.
    fn vertex(&self, node: usize) -> Result<&Self::Label, OutOfRange> {
        let vertices = self.vertices();
        OutOfRange::check(node, vertices.len()).map(|node| &vertices[node])
    }

    /// Returns the node associated with a vertex value, that is, the last
    /// position holding a value equal to `value`.
    ///
    /// This is the rule used to resolve the endpoints of edges at
    /// construction time.
    fn position(&self, value: &Self::Label) -> Option<usize>
    where
        Self::Label: PartialEq,
    {
        resolve(self.vertices(), value)
    }

    /// Maps a sequence of nodes (e.g., a visit order) to vertex values.
    fn vertices_of(
        &self,
        nodes: impl IntoIterator<Item = usize>,
    ) -> Result<Vec<&Self::Label>, OutOfRange> {
        nodes.into_iter().map(|node| self.vertex(node)).collect()
    }
}

/// A graph that can build its transpose, that is, the graph with the same
/// vertices in which every arc is reversed.
pub trait Transpose: Sized {
    /// Returns the transpose of this graph.
    fn transpose(&self) -> Self;
}

/// Returns the last position of `vertices` holding a value equal to `value`.
fn resolve<T: PartialEq>(vertices: &[T], value: &T) -> Option<usize> {
    vertices.iter().rposition(|v| v == value)
}

/// Resolves pairs of vertex values to pairs of nodes, dropping pairs with an
/// unresolvable endpoint.
pub(crate) fn resolve_arcs<T: PartialEq, U: Borrow<T>>(
    vertices: &[T],
    edges: impl IntoIterator<Item = (U, U)>,
) -> Vec<(usize, usize)> {
    let mut arcs = Vec::new();
    let mut dropped = 0_usize;
    for (src, dst) in edges {
        match (
            resolve(vertices, src.borrow()),
            resolve(vertices, dst.borrow()),
        ) {
            (Some(src), Some(dst)) => arcs.push((src, dst)),
            _ => dropped += 1,
        }
    }
    if dropped != 0 {
        log::debug!("Dropped {dropped} edges with endpoints not among the vertices");
    }
    arcs
}
