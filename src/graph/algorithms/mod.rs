//! Algorithms over [`Graph`].
//!
//! Both algorithms read the graph only through its public query surface and
//! keep all working state local to the call.
//!
//! - `shortest_path`: Dijkstra over the cheapest of each pair's parallel edges
//! - `cycle`: depth-first detection of cycles passing through a source vertex

pub mod cycle;
pub mod shortest_path;

pub use cycle::has_cycle_from;
pub use shortest_path::{shortest_path, shortest_path_with_cost};

use num_traits::{CheckedAdd, Zero};

use crate::error::Result;
use crate::graph::Graph;

impl<V: Ord + Clone, E: PartialEq + Clone> Graph<V, E> {
    /// See [`has_cycle_from`].
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if `src` is missing.
    pub fn has_cycle_from(&self, src: &V) -> Result<bool> {
        cycle::has_cycle_from(self, src)
    }
}

impl<V: Ord + Clone, E: Ord + Clone + Zero + CheckedAdd> Graph<V, E> {
    /// See [`shortest_path`].
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if `src` or `dst` is missing.
    pub fn shortest_path(&self, src: &V, dst: &V) -> Result<Option<Vec<V>>> {
        shortest_path::shortest_path(self, src, dst)
    }

    /// See [`shortest_path_with_cost`].
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if `src` or `dst` is missing.
    pub fn shortest_path_with_cost(&self, src: &V, dst: &V) -> Result<Option<(Vec<V>, E)>> {
        shortest_path::shortest_path_with_cost(self, src, dst)
    }
}
