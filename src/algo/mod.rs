/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Module containing all algorithms implementations.

pub mod visits;

pub mod sccs;

mod top_sort;
pub use top_sort::reverse_post_order;

mod acyclicity;
pub use acyclicity::is_acyclic;

mod cycles;
pub use cycles::has_cycle;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    pub use super::visits::Sequential;
}
