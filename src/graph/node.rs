//! Per-vertex adjacency record.
//!
//! A [`Node`] stores, for every neighbour it touches, the ordered list of
//! edge weights leading there. Parallel edges are kept as repeated weights in
//! insertion order. Nodes never reference each other; neighbours are named by
//! vertex identifier only and resolved through the owning graph.

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};

/// Adjacency record of a single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<V, E> {
    vertex: V,
    edges: BTreeMap<V, Vec<E>>,
}

impl<V: Ord, E: PartialEq> Node<V, E> {
    /// Creates a node for `vertex` with no edges.
    pub fn new(vertex: V) -> Self {
        Self {
            vertex,
            edges: BTreeMap::new(),
        }
    }

    /// The vertex this node belongs to.
    pub fn vertex(&self) -> &V {
        &self.vertex
    }

    /// Appends `weight` to the edges leading to `neighbour`.
    pub fn add_edge(&mut self, neighbour: V, weight: E) {
        self.edges.entry(neighbour).or_default().push(weight);
    }

    /// Removes the first edge to `neighbour` whose weight equals `weight`.
    ///
    /// The neighbour entry disappears once its last edge is gone. Returns
    /// `false` when there was no such edge.
    pub fn remove_edge(&mut self, neighbour: &V, weight: &E) -> bool {
        let Some(weights) = self.edges.get_mut(neighbour) else {
            return false;
        };
        let Some(index) = weights.iter().position(|w| w == weight) else {
            return false;
        };

        weights.remove(index);
        if weights.is_empty() {
            self.edges.remove(neighbour);
        }
        true
    }

    /// Drops every edge to `neighbour`. Returns whether any existed.
    pub fn remove_all_edges(&mut self, neighbour: &V) -> bool {
        self.edges.remove(neighbour).is_some()
    }

    /// All weights recorded towards `neighbour`, in insertion order.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if there is no edge to `neighbour`.
    pub fn weights_between(&self, neighbour: &V) -> Result<&[E]> {
        self.edges
            .get(neighbour)
            .map(Vec::as_slice)
            .ok_or(GraphError::EdgeNotFound)
    }

    /// Returns `true` if an edge of `weight` leads to `neighbour`.
    pub(crate) fn has_edge(&self, neighbour: &V, weight: &E) -> bool {
        self.edges
            .get(neighbour)
            .is_some_and(|weights| weights.contains(weight))
    }

    /// Vertices reachable over at least one edge. Order is unspecified.
    pub fn connections(&self) -> impl Iterator<Item = &V> + '_ {
        self.edges.keys()
    }

    /// Returns `true` if at least one edge leads to `neighbour`.
    pub fn connected_to(&self, neighbour: &V) -> bool {
        self.edges.contains_key(neighbour)
    }

    /// Number of edge records held by this node, parallel edges included.
    pub fn degree(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Returns `true` if the node has no edges at all.
    pub fn is_isolated(&self) -> bool {
        self.edges.is_empty()
    }
}
