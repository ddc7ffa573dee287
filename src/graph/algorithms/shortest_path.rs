//! Single-source shortest path (Dijkstra) over the undirected multigraph.
//!
//! Parallel edges collapse to their cheapest weight during relaxation and
//! self-loops are never relaxed. Weights are expected to be non-negative.
//! A relaxation whose distance would overflow `E` is skipped, since such a
//! route is dearer than any cost `E` can hold.

use std::collections::{BTreeMap, BTreeSet};

use num_traits::{CheckedAdd, Zero};

use crate::collections::PriorityQueue;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::trace::{debug_event, trace_event};

/// Cheapest path from `src` to `dst`, as the vertices visited in order.
///
/// - `Ok(Some(vec![]))` when `src == dst`.
/// - `Ok(Some([src, .., dst]))` for a reachable `dst`.
/// - `Ok(None)` when `dst` is unreachable from `src`.
///
/// When two routes cost the same, the one relaxed first wins.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if `src` or `dst` is not in the graph.
pub fn shortest_path<V, E>(graph: &Graph<V, E>, src: &V, dst: &V) -> Result<Option<Vec<V>>>
where
    V: Ord + Clone,
    E: Ord + Clone + Zero + CheckedAdd,
{
    Ok(shortest_path_with_cost(graph, src, dst)?.map(|(path, _)| path))
}

/// Like [`shortest_path`], also returning the total weight of the path.
///
/// The cost of the empty `src == dst` path is `E::zero()`.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if `src` or `dst` is not in the graph.
pub fn shortest_path_with_cost<V, E>(
    graph: &Graph<V, E>,
    src: &V,
    dst: &V,
) -> Result<Option<(Vec<V>, E)>>
where
    V: Ord + Clone,
    E: Ord + Clone + Zero + CheckedAdd,
{
    if !graph.contains_vertex(src) || !graph.contains_vertex(dst) {
        return Err(GraphError::VertexNotFound);
    }
    if src == dst {
        return Ok(Some((Vec::new(), E::zero())));
    }

    let mut frontier = PriorityQueue::new();
    let mut finalized: BTreeSet<V> = BTreeSet::new();
    let mut previous: BTreeMap<V, V> = BTreeMap::new();
    frontier.enqueue(src.clone(), E::zero());

    while !frontier.is_empty() {
        let (current, distance) = frontier.dequeue_with_priority()?;
        trace_event!(
            frontier = frontier.len(),
            finalized = finalized.len(),
            "dijkstra: extracted vertex"
        );

        if current == *dst {
            let path = reconstruct(&previous, src, dst);
            debug_event!(vertices = path.len(), "dijkstra: path found");
            return Ok(Some((path, distance)));
        }

        for neighbour in graph.neighbours_of(&current)? {
            if *neighbour == current || finalized.contains(neighbour) {
                continue;
            }
            let Some(step) = graph.weights_between(&current, neighbour)?.iter().min() else {
                continue;
            };

            let Some(candidate) = distance.checked_add(step) else {
                trace_event!("dijkstra: relaxation overflows the weight type");
                continue;
            };
            let improves = match frontier.weight_of(neighbour) {
                Ok(best) => candidate < *best,
                Err(_) => true,
            };
            if improves {
                frontier.enqueue(neighbour.clone(), candidate);
                previous.insert(neighbour.clone(), current.clone());
            }
        }

        finalized.insert(current);
    }

    debug_event!(finalized = finalized.len(), "dijkstra: destination unreachable");
    Ok(None)
}

// Walks predecessors from `dst` back to `src`; every hop was recorded on relaxation.
fn reconstruct<V: Ord + Clone>(previous: &BTreeMap<V, V>, src: &V, dst: &V) -> Vec<V> {
    let mut path = vec![dst.clone()];
    let mut cursor = dst;
    while cursor != src {
        let Some(prev) = previous.get(cursor) else {
            break;
        };
        path.push(prev.clone());
        cursor = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests;
