//! The undirected multigraph and the algorithms that run over it.
//!
//! - `node`: per-vertex adjacency records
//! - `multigraph`: the owning [`Graph`] and its symmetry-preserving mutators
//! - `algorithms`: shortest path and cycle detection

pub mod algorithms;
pub mod multigraph;
pub mod node;

pub use algorithms::{has_cycle_from, shortest_path, shortest_path_with_cost};
pub use multigraph::Graph;
pub use node::Node;
