/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms used to compute and work with strongly connected components.
//!
//! For directed graphs there is an implementation of [Kosaraju's
//! algorithm](kosaraju), which needs the transpose of the graph: it can be
//! built on the fly (if the graph implements
//! [`Transpose`](crate::graphs::Transpose)) or [passed by the
//! caller](kosaraju_with_t).
//!
//! For symmetric (i.e., undirected) graphs there is a [sequential](symm_seq)
//! implementation that computes connected components.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use graph_algo::prelude::*;
//!
//! // A three-node cycle with a tail
//! let graph = VecGraph::directed(
//!     ['x', 'y', 'z', 't'],
//!     [('x', 'y'), ('y', 'z'), ('z', 'x'), ('t', 'x')],
//! );
//! let mut components = sccs::kosaraju(&graph, no_logging![]);
//!
//! // The largest component gets index 0
//! assert_eq!(components.sort_by_size(), vec![3, 1].into_boxed_slice());
//! assert_eq!(components.components(), &[0, 0, 0, 1]);
//! ```

mod kosaraju;
pub use kosaraju::*;

mod symm_seq;
pub use symm_seq::*;

use crate::algo::visits::{depth_first, Sequential};
use crate::graphs::{OutOfRange, RandomAccessGraph};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::cmp::Reverse;
use std::ops::ControlFlow::Continue;

/// Strongly connected components.
///
/// An instance of this structure stores the [index of the
/// component](Sccs::components) of each node. Components are numbered from 0 to
/// [`num_components`](Sccs::num_components) (excluded), in discovery order:
/// the index itself carries no meaning, but two nodes have the same index if
/// and only if they are in the same component.
///
/// The same structure is used to store the connected components of symmetric
/// graphs.
///
/// Moreover, this structure makes it possible to [sort the components by
/// size](Sccs::sort_by_size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sccs {
    num_components: usize,
    components: Box<[usize]>,
}

impl Sccs {
    /// Wraps a labeling of nodes with component indices.
    ///
    /// Every index in `components` must be smaller than `num_components`;
    /// this is checked only in debug builds.
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        debug_assert!(components.iter().all(|&c| c < num_components));
        Sccs {
            num_components,
            components,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns whether there is exactly one component, that is, whether the
    /// graph is (strongly) connected.
    pub fn is_single_component(&self) -> bool {
        self.num_components == 1
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the index of the component of a node.
    pub fn component_of(&self, node: usize) -> Result<usize, OutOfRange> {
        OutOfRange::check(node, self.components.len()).map(|node| self.components[node])
    }

    /// Returns whether two nodes are in the same component.
    pub fn connected(&self, u: usize, v: usize) -> Result<bool, OutOfRange> {
        Ok(self.component_of(u)? == self.component_of(v)?)
    }

    /// Returns the nodes in the same component of `node`, in increasing order.
    pub fn members_of(&self, node: usize) -> Result<Vec<usize>, OutOfRange> {
        let component = self.component_of(node)?;
        Ok(self
            .components
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == component)
            .map(|(node, _)| node)
            .collect())
    }

    /// Returns the number of nodes of each component.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components].into_boxed_slice();
        self.components.iter().for_each(|&c| sizes[c] += 1);
        sizes
    }

    /// Renumbers the components by decreasing size and returns their sizes
    /// in the new order.
    ///
    /// Components of equal size keep their relative order.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        let sizes = self.compute_sizes();
        let mut by_size = (0..self.num_components).collect::<Vec<_>>();
        by_size.sort_by_key(|&c| Reverse(sizes[c]));

        let mut new_index = vec![0; self.num_components];
        for (index, &c) in by_size.iter().enumerate() {
            new_index[c] = index;
        }
        for c in self.components.iter_mut() {
            *c = new_index[*c];
        }

        by_size.iter().map(|&c| sizes[c]).collect()
    }
}

/// Starts a depth-first visit from each root not yet discovered and labels
/// every node with the index of the tree that discovers it.
///
/// Trees are numbered from zero in the order in which they are started. Each
/// discovered node is a light update of `pl`.
pub(crate) fn label_trees(
    graph: impl RandomAccessGraph,
    roots: impl IntoIterator<Item = usize>,
    pl: &mut impl ProgressLog,
) -> Sccs {
    let mut visit = depth_first::Seq::new(&graph);
    let mut labels = vec![0; graph.num_nodes()].into_boxed_slice();
    let mut trees = 0;

    visit
        .visit(roots, |event| {
            match event {
                depth_first::Event::Previsit { node, .. } => {
                    labels[node] = trees;
                    pl.light_update();
                }
                depth_first::Event::Done => trees += 1,
                _ => (),
            }
            Continue(())
        })
        .continue_value_no_break();

    Sccs::new(trees, labels)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_label_trees() {
        use crate::graphs::VecGraph;
        use dsi_progress_logger::no_logging;

        let graph = VecGraph::directed(0..4, [(0, 1), (2, 1), (3, 2)]);
        // 1 is taken by the first tree, so the tree of 2 is just 2
        let labels = label_trees(&graph, [0, 2, 3, 1], no_logging![]);
        assert_eq!(labels.num_components(), 3);
        assert_eq!(labels.components(), &[0, 0, 1, 2]);
    }

    #[test]
    fn test_sizes() {
        let mut sccs = Sccs::new(4, vec![2, 3, 1, 1, 3, 1, 0].into_boxed_slice());
        assert_eq!(sccs.compute_sizes(), vec![1, 3, 1, 2].into_boxed_slice());

        // 0 and 2 both have one node and keep their order
        assert_eq!(sccs.sort_by_size(), vec![3, 2, 1, 1].into_boxed_slice());
        assert_eq!(sccs.components(), &[3, 1, 0, 0, 1, 0, 2]);
    }

    #[test]
    fn test_queries() {
        let sccs = Sccs::new(2, vec![1, 0, 1, 1].into_boxed_slice());
        assert_eq!(sccs.component_of(2), Ok(1));
        assert_eq!(sccs.members_of(3), Ok(vec![0, 2, 3]));
        assert_eq!(sccs.members_of(1), Ok(vec![1]));
        assert_eq!(sccs.connected(0, 3), Ok(true));
        assert_eq!(sccs.connected(0, 1), Ok(false));
        assert!(!sccs.is_single_component());
        assert_eq!(
            sccs.connected(0, 4),
            Err(OutOfRange {
                index: 4,
                num_nodes: 4
            })
        );
        assert!(sccs.members_of(4).is_err());
    }
}
