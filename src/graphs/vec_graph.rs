/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{resolve_arcs, LabeledGraph, OutOfRange, RandomAccessGraph, Transpose};
use std::borrow::Borrow;

/// A graph stored as a list of successors for each node.
///
/// Successors are kept in arc-insertion order, and repeated arcs are
/// preserved. The graph cannot be modified after construction.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
///
/// let vertices = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];
/// let graph = VecGraph::undirected(
///     vertices,
///     [('A', 'C'), ('A', 'D'), ('A', 'F'), ('B', 'C'), ('C', 'D'), ('E', 'G'), ('F', 'G')],
/// );
///
/// assert_eq!(graph.adjacent(0)?, &[2, 3, 5]);
/// assert_eq!(graph.adjacent(2)?, &[0, 1, 3]);
/// assert_eq!(graph.num_arcs(), 14);
/// # Ok::<(), OutOfRange>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecGraph<T> {
    vertices: Box<[T]>,
    succ: Box<[Vec<usize>]>,
    num_arcs: usize,
}

impl<T: PartialEq> VecGraph<T> {
    /// Creates a directed graph.
    ///
    /// Each pair `(u, v)` of `edges` becomes an arc from the last position
    /// holding `u` to the last position holding `v`. Pairs with an endpoint
    /// not among `vertices` are dropped.
    pub fn directed<U: Borrow<T>>(
        vertices: impl IntoIterator<Item = T>,
        edges: impl IntoIterator<Item = (U, U)>,
    ) -> Self {
        Self::build(vertices, edges, false)
    }

    /// Creates an undirected graph.
    ///
    /// Each pair `(u, v)` of `edges` becomes two arcs, from `u` to `v` and
    /// from `v` to `u`, so the resulting graph is symmetric. Endpoints are
    /// resolved as in [`directed`](VecGraph::directed).
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
        let mut succ = vec![Vec::new(); vertices.len()].into_boxed_slice();
        let mut num_arcs = 0;
        for (src, dst) in resolve_arcs(&vertices, edges) {
            succ[src].push(dst);
            num_arcs += 1;
            if symmetric {
                succ[dst].push(src);
                num_arcs += 1;
            }
        }
        Self {
            vertices,
            succ,
            num_arcs,
        }
    }
}

impl<T> VecGraph<T> {
    /// Returns the successors of a node, in arc-insertion order.
    pub fn adjacent(&self, node: usize) -> Result<&[usize], OutOfRange> {
        OutOfRange::check(node, self.succ.len()).map(|node| self.succ[node].as_slice())
    }
}

impl<T> RandomAccessGraph for VecGraph<T> {
    type Successors<'succ>
        = std::iter::Copied<std::slice::Iter<'succ, usize>>
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

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.succ[node].iter().copied()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.succ[node].len()
    }
}

impl<T> LabeledGraph for VecGraph<T> {
    type Label = T;

    #[inline(always)]
    fn vertices(&self) -> &[T] {
        &self.vertices
    }
}

impl<T: Clone> Transpose for VecGraph<T> {
    /// Returns the transpose of this graph.
    ///
    /// The successors of each node in the transpose are its predecessors in
    /// this graph, in increasing order of source node (and, for each source,
    /// in arc-insertion order).
    fn transpose(&self) -> Self {
        let mut succ = vec![Vec::new(); self.succ.len()].into_boxed_slice();
        for (src, dsts) in self.succ.iter().enumerate() {
            for &dst in dsts {
                succ[dst].push(src);
            }
        }
        Self {
            vertices: self.vertices.clone(),
            succ,
            num_arcs: self.num_arcs,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_last_occurrence_wins() {
        let graph = VecGraph::directed([1, 2, 1], [(1, 2), (2, 1)]);
        assert_eq!(graph.adjacent(0), Ok(&[][..]));
        assert_eq!(graph.adjacent(1), Ok(&[2][..]));
        assert_eq!(graph.adjacent(2), Ok(&[1][..]));
        assert_eq!(graph.position(&1), Some(2));
        assert_eq!(graph.position(&3), None);
    }

    #[test]
    fn test_dropped_edges() {
        let graph = VecGraph::directed(["a", "b"], [("a", "b"), ("a", "x"), ("y", "b")]);
        assert_eq!(graph.num_nodes(), 2);
        assert_eq!(graph.num_arcs(), 1);
    }

    #[test]
    fn test_duplicates_preserved() {
        let graph = VecGraph::undirected(['a', 'b'], [('a', 'b'), ('a', 'b')]);
        assert_eq!(graph.adjacent(0), Ok(&[1, 1][..]));
        assert_eq!(graph.adjacent(1), Ok(&[0, 0][..]));
        assert_eq!(graph.outdegree(0), 2);
    }

    #[test]
    fn test_out_of_range() {
        let graph = VecGraph::directed(['a'], Vec::<(char, char)>::new());
        assert_eq!(
            graph.adjacent(1),
            Err(OutOfRange {
                index: 1,
                num_nodes: 1
            })
        );
        assert!(graph.vertex(1).is_err());

        let empty = VecGraph::<char>::directed([], Vec::<(char, char)>::new());
        assert_eq!(empty.num_nodes(), 0);
        assert!(empty.vertex(0).is_err());
    }

    #[test]
    fn test_transpose() {
        let graph = VecGraph::directed(['a', 'b', 'c'], [('a', 'b'), ('c', 'b'), ('b', 'a')]);
        let transpose = graph.transpose();
        assert_eq!(transpose.vertices(), graph.vertices());
        assert_eq!(transpose.adjacent(0), Ok(&[1][..]));
        assert_eq!(transpose.adjacent(1), Ok(&[0, 2][..]));
        assert_eq!(transpose.adjacent(2), Ok(&[][..]));
        assert_eq!(transpose.num_arcs(), 3);
    }
}
