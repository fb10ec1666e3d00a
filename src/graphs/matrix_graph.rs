/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{resolve_arcs, LabeledGraph, OutOfRange, RandomAccessGraph, Transpose};
use std::borrow::Borrow;
use sux::bits::BitVec;

/// A graph stored as an adjacency matrix.
///
/// The matrix uses one bit per pair of nodes, so repeated arcs collapse into
/// a single arc, and the successors of a node are enumerated in increasing
/// order. Construction follows the same resolution policy as
/// [`VecGraph`](super::VecGraph).
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
///
/// let graph = MatrixGraph::directed(['A', 'B', 'C'], [('A', 'C'), ('A', 'B'), ('A', 'B')]);
///
/// assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(graph.num_arcs(), 2);
/// assert!(graph.has_arc(0, 2)?);
/// # Ok::<(), OutOfRange>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatrixGraph<T> {
    vertices: Box<[T]>,
    /// Row-major; the bit of index `src * n + dst` is set iff there is an
    /// arc from `src` to `dst`.
    matrix: BitVec,
    num_arcs: usize,
}

impl<T: PartialEq> MatrixGraph<T> {
    /// Creates a directed graph.
    ///
    /// See [`VecGraph::directed`](super::VecGraph::directed).
    pub fn directed<U: Borrow<T>>(
        vertices: impl IntoIterator<Item = T>,
        edges: impl IntoIterator<Item = (U, U)>,
    ) -> Self {
        Self::build(vertices, edges, false)
    }

    /// Creates an undirected graph.
    ///
    /// See [`VecGraph::undirected`](super::VecGraph::undirected).
    pub fn undirected<U: Borrow<T>>(
        vertices: impl IntoIterator<Item = T>,
        edges: impl IntoIterator<Item = (U, U)>,
    ) -> Self {
        Self::build(vertices, edges, true)
    }

    fn build<U: Borrow<T>>(
        vertices: impl IntoIterator<Item = T>,
        edges: impl IntoIterator<Item = (U, U)>,
        symmetric: bool,
    ) -> Self {
        let vertices: Box<[T]> = vertices.into_iter().collect();
        let n = vertices.len();
        let mut graph = Self {
            matrix: BitVec::new(n * n),
            num_arcs: 0,
            vertices,
        };
        for (src, dst) in resolve_arcs(&graph.vertices, edges) {
            graph.add_arc(src, dst);
            if symmetric {
                graph.add_arc(dst, src);
            }
        }
        graph
    }
}

impl<T> MatrixGraph<T> {
    fn add_arc(&mut self, src: usize, dst: usize) {
        let bit = src * self.vertices.len() + dst;
        if !self.matrix[bit] {
            self.matrix.set(bit, true);
            self.num_arcs += 1;
        }
    }

    /// Returns whether there is an arc from `src` to `dst`.
    pub fn has_arc(&self, src: usize, dst: usize) -> Result<bool, OutOfRange> {
        let n = self.vertices.len();
        let src = OutOfRange::check(src, n)?;
        let dst = OutOfRange::check(dst, n)?;
        Ok(self.matrix[src * n + dst])
    }
}

/// The successors of a node of a [`MatrixGraph`], that is, the set bits of
/// its row of the adjacency matrix.
pub struct MatrixSuccessors<'a> {
    matrix: &'a BitVec,
    row: usize,
    next: usize,
    num_nodes: usize,
}

impl Iterator for MatrixSuccessors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.next < self.num_nodes {
            let dst = self.next;
            self.next += 1;
            if self.matrix[self.row + dst] {
                return Some(dst);
            }
        }
        None
    }
}

impl<T> RandomAccessGraph for MatrixGraph<T> {
    type Successors<'succ>
        = MatrixSuccessors<'succ>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    fn successors(&self, node: usize) -> MatrixSuccessors<'_> {
        let num_nodes = self.vertices.len();
        assert!(
            node < num_nodes,
            "Node {node} out of range (the graph has {num_nodes} nodes)"
        );
        MatrixSuccessors {
            matrix: &self.matrix,
            row: node * num_nodes,
            next: 0,
            num_nodes,
        }
    }
}

impl<T> LabeledGraph for MatrixGraph<T> {
    type Label = T;

    #[inline(always)]
    fn vertices(&self) -> &[T] {
        &self.vertices
    }
}

impl<T: Clone> Transpose for MatrixGraph<T> {
    fn transpose(&self) -> Self {
        let n = self.vertices.len();
        let mut matrix = BitVec::new(n * n);
        for src in 0..n {
            for dst in self.successors(src) {
                matrix.set(dst * n + src, true);
            }
        }
        Self {
            vertices: self.vertices.clone(),
            matrix,
            num_arcs: self.num_arcs,
        }
    }
}
