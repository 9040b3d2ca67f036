//! Best-first frontier.
//!
//! No visited-state deduplication: repeated actions are controlled by the
//! strategy's path-based pruning instead, so two structurally equal states
//! reached by different paths are both kept.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, SearchNode};

/// A frontier entry wrapping a node with its ordering key.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest `f_cost` first).
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: SearchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority queue of search nodes keyed by [`FrontierKey`].
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<FrontierEntry>,
    high_water: u64,
}

impl BestFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) {
        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey::from(&node)),
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Pop the best (lowest key) node.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|e| e.node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Prune frontier to at most `max_size` entries, keeping the best by
    /// key. Returns the number of nodes dropped.
    pub fn prune_to(&mut self, max_size: usize) -> usize {
        if self.heap.len() <= max_size {
            return 0;
        }

        let mut entries: Vec<FrontierEntry> = self.heap.drain().collect();
        // Ascending by the raw key puts the best entries first.
        entries.sort_by(|a, b| a.key.0.cmp(&b.key.0));

        let pruned = entries.len() - max_size;
        entries.truncate(max_size);
        self.heap = entries.into_iter().collect();

        pruned
    }
}
