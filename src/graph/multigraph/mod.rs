//! An undirected, weighted multigraph keyed by vertex identifier.
//!
//! The graph exclusively owns one [`Node`] per vertex. Every edge `(a, b, w)`
//! with `a != b` is written to both `Node(a)` and `Node(b)`, and every
//! mutation keeps the two sides identical. A self-loop `(a, a, w)` is stored
//! once, in `Node(a)`'s entry for itself.
//!
//! Memory layout:
//! - `nodes`: `BTreeMap<V, Node<V, E>>`, one adjacency record per vertex
//! - each `Node` maps neighbour → `Vec<E>` (parallel edges in insertion order)

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::node::Node;

/// An undirected multigraph with vertices `V` and edge weights `E`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` / `contains_vertex` | \(O(\log n)\) | Map lookup |
/// | `add_edge` | \(O(\log n)\) | Two appends |
/// | `remove_edge` | \(O(\log n + k)\) | `k` = parallel edges between the pair |
/// | `remove_vertex` | \(O(d \log n)\) | `d` = distinct neighbours |
/// | `neighbours_of` | \(O(\log n)\) | Returns a borrowing iterator |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V, E> {
    nodes: BTreeMap<V, Node<V, E>>,
}

impl<V: Ord + Clone, E: PartialEq + Clone> Graph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    /// Adds `vertex` with no edges.
    ///
    /// Returns `false` (and leaves the graph untouched) if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.nodes.contains_key(&vertex) {
            return false;
        }
        self.nodes.insert(vertex.clone(), Node::new(vertex));
        true
    }

    /// Removes `vertex` and every edge touching it.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is not in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let node = self.nodes.remove(vertex).ok_or(GraphError::VertexNotFound)?;
        for neighbour in node.connections() {
            if let Some(other) = self.nodes.get_mut(neighbour) {
                other.remove_all_edges(vertex);
            }
        }
        Ok(())
    }

    /// Adds an edge of weight `weight` between `a` and `b`.
    ///
    /// Parallel edges are allowed. A self-loop is recorded once.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is missing.
    pub fn add_edge(&mut self, a: &V, b: &V, weight: E) -> Result<()> {
        self.ensure_vertices(a, b)?;

        if a != b {
            self.node_mut(b)?.add_edge(a.clone(), weight.clone());
        }
        self.node_mut(a)?.add_edge(b.clone(), weight);
        Ok(())
    }

    /// Removes one edge of weight `weight` between `a` and `b`.
    ///
    /// Both sides are removed together or not at all. Returns `false` if no
    /// such edge exists.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is missing.
    pub fn remove_edge(&mut self, a: &V, b: &V, weight: &E) -> Result<bool> {
        self.ensure_vertices(a, b)?;

        if a == b {
            return Ok(self.node_mut(a)?.remove_edge(a, weight));
        }

        let present = self.node(a)?.has_edge(b, weight) && self.node(b)?.has_edge(a, weight);
        if !present {
            return Ok(false);
        }

        self.node_mut(a)?.remove_edge(b, weight);
        self.node_mut(b)?.remove_edge(a, weight);
        Ok(true)
    }

    /// Returns `true` if `vertex` is part of the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.nodes.contains_key(vertex)
    }

    /// Returns `true` if at least one edge joins `a` and `b`.
    ///
    /// Missing vertices simply yield `false`.
    pub fn is_neighbour_of(&self, a: &V, b: &V) -> bool {
        self.nodes.get(a).is_some_and(|node| node.connected_to(b))
    }

    /// Weights of all edges between `a` and `b`, in insertion order.
    ///
    /// Existing but non-adjacent vertices yield an empty slice.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either vertex is missing.
    pub fn weights_between(&self, a: &V, b: &V) -> Result<&[E]> {
        self.ensure_vertices(a, b)?;
        Ok(self.node(a)?.weights_between(b).unwrap_or(&[]))
    }

    /// Distinct vertices sharing at least one edge with `vertex`.
    ///
    /// A vertex with a self-loop lists itself. Order is unspecified.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is missing.
    pub fn neighbours_of(&self, vertex: &V) -> Result<impl Iterator<Item = &V> + '_> {
        Ok(self.node(vertex)?.connections())
    }

    /// All vertices of the graph. Order is unspecified.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.nodes.keys()
    }

    /// Adjacency record of `vertex`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is missing.
    pub fn node(&self, vertex: &V) -> Result<&Node<V, E>> {
        self.nodes.get(vertex).ok_or(GraphError::VertexNotFound)
    }

    /// Number of edge records held by `vertex` (parallel edges counted, a self-loop once).
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` is missing.
    pub fn degree(&self, vertex: &V) -> Result<usize> {
        Ok(self.node(vertex)?.degree())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges, parallel edges and self-loops each counted once.
    pub fn edge_count(&self) -> usize {
        let mut doubled = 0;
        let mut loops = 0;
        for (vertex, node) in &self.nodes {
            let own = node.weights_between(vertex).map_or(0, <[E]>::len);
            loops += own;
            doubled += node.degree() - own;
        }
        doubled / 2 + loops
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Checks the undirected symmetry invariant.
    ///
    /// For every pair `a != b`, the weights recorded in `Node(a)` towards `b`
    /// must equal those recorded in `Node(b)` towards `a`, and every
    /// neighbour named by a node must itself be a vertex of the graph.
    pub fn validate_invariants(&self) -> bool {
        self.nodes.iter().all(|(vertex, node)| {
            node.vertex() == vertex
                && node.connections().all(|neighbour| {
                    if neighbour == vertex {
                        return true;
                    }
                    let Ok(forward) = node.weights_between(neighbour) else {
                        return false;
                    };
                    self.nodes
                        .get(neighbour)
                        .and_then(|other| other.weights_between(vertex).ok())
                        .is_some_and(|backward| backward == forward)
                })
        })
    }

    fn ensure_vertices(&self, a: &V, b: &V) -> Result<()> {
        if self.nodes.contains_key(a) && self.nodes.contains_key(b) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound)
        }
    }

    fn node_mut(&mut self, vertex: &V) -> Result<&mut Node<V, E>> {
        self.nodes.get_mut(vertex).ok_or(GraphError::VertexNotFound)
    }
}

impl<V: Ord + Clone, E: PartialEq + Clone> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + Clone, E: PartialEq + Clone> Extend<V> for Graph<V, E> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for vertex in iter {
            self.add_vertex(vertex);
        }
    }
}

impl<V: Ord + Clone, E: PartialEq + Clone> FromIterator<V> for Graph<V, E> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}
