/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod graphs;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graphs::{LabeledGraph, RandomAccessGraph, Transpose};
}

/// Use `use graph_algo::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::visits::breadth_first;
    pub use algo::visits::depth_first;
    pub use algo::visits::{bfs_order, bfs_order_from, dfs_order, dfs_order_from};
    pub use algo::{has_cycle, is_acyclic, reverse_post_order, sccs};
    pub use graphs::{MatrixGraph, OutOfRange, VecGraph};
    pub use traits::*;
}
