//! Two-stage deduplication.
//!
//! Consecutive snapshots of the same feed overlap heavily, so the same post
//! keeps reappearing a few documents apart. [`RecencyWindow`] suppresses
//! those re-appearances during ingestion with bounded memory: a presence-only
//! LRU set over body texts. [`dedup_exact`] then runs once over the full
//! accumulated run and removes any surviving exact duplicates regardless of
//! distance.

use std::collections::{HashSet, VecDeque};

use crate::record::PostRecord;

/// Default recency-window capacity from the reference run.
pub const DEFAULT_WINDOW_CAPACITY: usize = 20;

/// Bounded LRU set of recently accepted post texts.
///
/// Invariants: size never exceeds capacity, no duplicate entries, and
/// eviction is strict least-recently-used order. Re-touching a present entry
/// moves it to the front without changing the size.
#[derive(Debug, Clone)]
pub struct RecencyWindow {
    // Back of the deque is most recently used.
    order: VecDeque<String>,
    present: HashSet<String>,
    capacity: usize,
}

impl RecencyWindow {
    /// Creates an empty window with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
            present: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Checks whether a text is inside the recency horizon.
    pub fn contains(&self, text: &str) -> bool {
        self.present.contains(text)
    }

    /// Inserts a text, or moves it to the front when already present.
    ///
    /// Inserting a new entry at capacity evicts least recently used entries
    /// until the size invariant holds again. A zero-capacity window remembers
    /// nothing: `touch` is a no-op and the filter degrades to the global
    /// exact-duplicate pass alone.
    pub fn touch(&mut self, text: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.present.contains(text) {
            if let Some(pos) = self.order.iter().position(|entry| entry == text) {
                if let Some(entry) = self.order.remove(pos) {
                    self.order.push_back(entry);
                }
            }
            return;
        }
        while self.order.len() >= self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.present.remove(&evicted);
            }
        }
        self.order.push_back(text.to_string());
        self.present.insert(text.to_string());
    }

    /// Number of entries currently tracked.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Checks whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Removes exact-duplicate records, keeping the first occurrence of each.
///
/// Identity is full field equality; relative order of first occurrences is
/// preserved. Running the pass twice is the same as running it once.
pub fn dedup_exact(posts: Vec<PostRecord>) -> Vec<PostRecord> {
    let mut seen: HashSet<PostRecord> = HashSet::with_capacity(posts.len());
    posts.into_iter().filter(|post| seen.insert(post.clone())).collect()
}
