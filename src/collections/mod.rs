//! Collections backing the graph algorithms.
//!
//! - `priority_queue`: addressable min-heap with decrease-key, used as the
//!   Dijkstra frontier

pub mod priority_queue;

pub use priority_queue::PriorityQueue;
