//! Cycle detection through a source vertex.
//!
//! The search is an iterative depth-first walk that remembers how each vertex
//! was reached. Stepping from a direct neighbour straight back to the source
//! just retraces the edge it came from, so a return to the source only counts
//! when the current vertex was reached some other way. Self-loops are skipped.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::graph::Graph;
use crate::trace::debug_event;

/// Returns `true` if a cycle leads out of `src` and back into it.
///
/// Only the component containing `src` is examined. Parallel edges between
/// the same pair and self-loops are not reported as cycles.
///
/// # Errors
/// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if `src` is missing.
pub fn has_cycle_from<V, E>(graph: &Graph<V, E>, src: &V) -> Result<bool>
where
    V: Ord + Clone,
    E: PartialEq + Clone,
{
    let mut stack: Vec<V> = Vec::new();
    let mut seen: BTreeSet<V> = BTreeSet::new();
    let mut previous: BTreeMap<V, V> = BTreeMap::new();

    for neighbour in graph.neighbours_of(src)? {
        if neighbour == src {
            continue;
        }
        stack.push(neighbour.clone());
        previous.insert(neighbour.clone(), src.clone());
    }
    seen.insert(src.clone());

    while let Some(current) = stack.pop() {
        let via_source = previous.get(&current) == Some(src);

        for neighbour in graph.neighbours_of(&current)? {
            if *neighbour == current {
                continue;
            }
            if neighbour == src {
                if !via_source {
                    debug_event!(seen = seen.len(), "cycle: returned to source");
                    return Ok(true);
                }
            } else if !seen.contains(neighbour) {
                stack.push(neighbour.clone());
                previous.insert(neighbour.clone(), current.clone());
            }
        }

        seen.insert(current);
    }

    debug_event!(seen = seen.len(), "cycle: none through source");
    Ok(false)
}
