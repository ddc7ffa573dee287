//! Error type shared by the graph, its nodes, the priority queue and the algorithms.
//!
//! Errors carry no vertex or key payload so that none of the containers need
//! `Debug` or `Display` bounds on their type parameters.

use thiserror::Error;

/// Failure outcome of a graph or queue operation.
///
/// Pure predicates (`contains_vertex`, `is_neighbour_of`, `connected_to`,
/// `contains`) never produce one of these; they answer `false` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GraphError {
    /// A referenced vertex is not part of the graph.
    #[error("vertex does not exist in graph")]
    VertexNotFound,

    /// A node has no edge record for the requested neighbour.
    #[error("no edge between the requested vertices")]
    EdgeNotFound,

    /// A key is not currently held by the priority queue.
    #[error("key does not exist in priority queue")]
    KeyNotFound,

    /// `dequeue`/`peek` was called on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,
}

impl GraphError {
    /// Returns `true` for every "referenced thing does not exist" variant.
    pub fn is_not_found(self) -> bool {
        matches!(
            self,
            Self::VertexNotFound | Self::EdgeNotFound | Self::KeyNotFound
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_grouping() {
        assert!(GraphError::VertexNotFound.is_not_found());
        assert!(GraphError::EdgeNotFound.is_not_found());
        assert!(GraphError::KeyNotFound.is_not_found());
        assert!(!GraphError::EmptyQueue.is_not_found());
    }

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            GraphError::EmptyQueue.to_string(),
            "priority queue is empty"
        );
        assert_eq!(
            GraphError::VertexNotFound.to_string(),
            "vertex does not exist in graph"
        );
    }
}
