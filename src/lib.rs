//! # `multigraph` - Undirected Weighted Multigraphs
//!
//! A small, generic graph toolkit: an undirected multigraph keyed by vertex
//! identifier, an addressable priority queue with decrease-key, Dijkstra's
//! shortest path and a source-anchored cycle detector.
//!
//! ## Guarantees
//!
//! ### Symmetry
//! - Every edge `(a, b, w)` with `a != b` is recorded on both endpoints, and
//!   every mutator leaves the two records identical. `remove_edge` removes both
//!   sides or neither.
//! - Removing a vertex removes every edge that touched it; no neighbour is ever
//!   left naming a vertex that no longer exists.
//!
//! ### Ownership
//! - The [`Graph`] exclusively owns one [`Node`] per vertex. Nodes name their
//!   neighbours by identifier only, so there are no reference cycles and no
//!   interior mutability.
//!
//! ### Errors
//! - Every fallible operation returns [`Result`] with a [`GraphError`];
//!   predicates such as [`Graph::contains_vertex`] answer `false` instead.
//!
//! ## Type Requirements
//!
//! | Parameter | Bound | Used for |
//! |-----------|-------|----------|
//! | `V` (vertex) | `Ord + Clone` | Map key, predecessor tracking |
//! | `E` (weight) | `PartialEq + Clone` | Storage, removal by value |
//! | `E` for Dijkstra | `Ord + Clone + num_traits::{Zero, CheckedAdd}` | Ordering and summing path costs without overflow |
//!
//! ## Concurrency
//!
//! Everything is single-threaded and synchronous. Mutators take `&mut self`, so
//! the borrow checker already rules out concurrent modification; share a graph
//! across threads behind a single `RwLock` if needed.
//!
//! ## Diagnostics
//!
//! With the `tracing` feature enabled, the algorithms emit `trace`/`debug`
//! events describing frontier sizes and outcomes. Without it they are silent.
//!
//! ## Example
//!
//! ```rust
//! use multigraph::Graph;
//!
//! let mut g: Graph<&str, u32> = ["Sydney", "Melbourne", "Adelaide"].into_iter().collect();
//! g.add_edge(&"Sydney", &"Melbourne", 100)?;
//! g.add_edge(&"Melbourne", &"Adelaide", 100)?;
//! g.add_edge(&"Sydney", &"Adelaide", 300)?;
//!
//! let path = g.shortest_path(&"Sydney", &"Adelaide")?;
//! assert_eq!(path, Some(vec!["Sydney", "Melbourne", "Adelaide"]));
//!
//! // Sydney -> Melbourne -> Adelaide -> Sydney
//! assert!(g.has_cycle_from(&"Sydney")?);
//! # Ok::<(), multigraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

mod trace;

pub use collections::PriorityQueue;
pub use error::{GraphError, Result};
pub use graph::{has_cycle_from, shortest_path, shortest_path_with_cost, Graph, Node};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Errors are fieldless and travel in a single byte.
    assert!(mem::size_of::<GraphError>() == 1);
    assert!(mem::size_of::<Result<()>>() == 1);

    // A graph is exactly its vertex map.
    assert!(
        mem::size_of::<Graph<u64, u64>>()
            == mem::size_of::<std::collections::BTreeMap<u64, Node<u64, u64>>>()
    );
};
