//! `PriorityQueue`: an addressable min-priority queue with decrease-key.
//!
//! The queue is a binary min-heap paired with a key → heap-slot index, so
//! membership tests, priority lookups and `update` never scan the heap.
//! Each entry also carries an insertion sequence number; entries with equal
//! priority therefore leave the queue in the order they were (re)inserted.

use core::fmt;
use std::collections::BTreeMap;

use crate::error::{GraphError, Result};

struct Entry<K, P> {
    key: K,
    priority: P,
    seq: u64,
}

/// A min-priority queue holding at most one entry per key.
///
/// `K` must be totally ordered so it can index the heap slots; `P` is the
/// priority and only needs a total order.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `enqueue` | \(O(\log n)\) | Sift-up plus index insert |
/// | `dequeue` | \(O(\log n)\) | Sift-down plus index removal |
/// | `peek` | \(O(1)\) | Heap root |
/// | `contains` / `weight_of` | \(O(\log n)\) | Index lookup |
/// | `update` | \(O(\log n)\) | Re-sift from the entry's current slot |
pub struct PriorityQueue<K, P> {
    heap: Vec<Entry<K, P>>,
    positions: BTreeMap<K, usize>,
    next_seq: u64,
}

impl<K: Ord + Clone, P: Ord> PriorityQueue<K, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            positions: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` entries before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Returns the number of queued keys.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no keys are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts `key` with `priority`.
    ///
    /// If `key` is already queued its priority is replaced, exactly as
    /// [`update`](Self::update) would do, so the one-entry-per-key invariant
    /// always holds.
    pub fn enqueue(&mut self, key: K, priority: P) {
        if let Some(&slot) = self.positions.get(&key) {
            self.reprioritize(slot, priority);
            return;
        }

        let seq = self.bump_seq();
        let slot = self.heap.len();
        self.positions.insert(key.clone(), slot);
        self.heap.push(Entry { key, priority, seq });
        self.sift_up(slot);
    }

    /// Removes and returns the key with the smallest priority.
    ///
    /// # Errors
    /// [`GraphError::EmptyQueue`] if the queue holds no entries.
    pub fn dequeue(&mut self) -> Result<K> {
        self.dequeue_with_priority().map(|(key, _)| key)
    }

    /// Removes the minimum entry and returns it together with its priority.
    ///
    /// # Errors
    /// [`GraphError::EmptyQueue`] if the queue holds no entries.
    pub fn dequeue_with_priority(&mut self) -> Result<(K, P)> {
        if self.heap.is_empty() {
            return Err(GraphError::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop().ok_or(GraphError::EmptyQueue)?;
        self.positions.remove(&entry.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((entry.key, entry.priority))
    }

    /// Returns the key with the smallest priority without removing it.
    ///
    /// # Errors
    /// [`GraphError::EmptyQueue`] if the queue holds no entries.
    pub fn peek(&self) -> Result<&K> {
        self.heap
            .first()
            .map(|entry| &entry.key)
            .ok_or(GraphError::EmptyQueue)
    }

    /// Returns `true` if `key` is currently queued.
    pub fn contains(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    /// Returns the current priority of `key`.
    ///
    /// # Errors
    /// [`GraphError::KeyNotFound`] if `key` is not queued.
    pub fn weight_of(&self, key: &K) -> Result<&P> {
        let slot = *self.positions.get(key).ok_or(GraphError::KeyNotFound)?;
        Ok(&self.heap[slot].priority)
    }

    /// Replaces the priority of `key`, moving it up or down as needed.
    ///
    /// The entry is treated as freshly inserted, so it sorts after any other
    /// entry that already holds the same priority.
    ///
    /// # Errors
    /// [`GraphError::KeyNotFound`] if `key` is not queued.
    pub fn update(&mut self, key: &K, priority: P) -> Result<()> {
        let slot = *self.positions.get(key).ok_or(GraphError::KeyNotFound)?;
        self.reprioritize(slot, priority);
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
    }

    /// Iterates over `(key, priority)` pairs in dequeue order.
    ///
    /// This sorts a snapshot of the heap and is meant for inspection, not for
    /// hot loops.
    pub fn iter(&self) -> std::vec::IntoIter<(&K, &P)> {
        let mut entries: Vec<&Entry<K, P>> = self.heap.iter().collect();
        entries.sort_by(|a, b| (&a.priority, a.seq).cmp(&(&b.priority, b.seq)));
        entries
            .into_iter()
            .map(|entry| (&entry.key, &entry.priority))
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        seq
    }

    fn reprioritize(&mut self, slot: usize, priority: P) {
        let seq = self.bump_seq();
        let entry = &mut self.heap[slot];
        entry.priority = priority;
        entry.seq = seq;
        let slot = self.sift_up(slot);
        self.sift_down(slot);
    }

    fn sift_up(&mut self, mut node: usize) -> usize {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.less(node, parent) {
                self.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
        node
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * node + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < len && self.less(right, left) {
                smaller = right;
            }

            if self.less(smaller, node) {
                self.swap(node, smaller);
                node = smaller;
            } else {
                break;
            }
        }
    }

    // Priority first, then insertion order.
    fn less(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.heap[a], &self.heap[b]);
        (&a.priority, a.seq) < (&b.priority, b.seq)
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        for slot in [a, b] {
            if let Some(position) = self.positions.get_mut(&self.heap[slot].key) {
                *position = slot;
            }
        }
    }
}

impl<K: Ord + Clone, P: Ord> Default for PriorityQueue<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone, P: Ord> Extend<(K, P)> for PriorityQueue<K, P> {
    fn extend<I: IntoIterator<Item = (K, P)>>(&mut self, iter: I) {
        for (key, priority) in iter {
            self.enqueue(key, priority);
        }
    }
}

impl<K: Ord + Clone, P: Ord> FromIterator<(K, P)> for PriorityQueue<K, P> {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, K: Ord + Clone, P: Ord> IntoIterator for &'a PriorityQueue<K, P> {
    type Item = (&'a K, &'a P);
    type IntoIter = std::vec::IntoIter<(&'a K, &'a P)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, P> fmt::Debug for PriorityQueue<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .finish()
    }
}
