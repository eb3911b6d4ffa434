//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::HashMap;
use std::mem;

// == List Node ==
/// Slab slot in the recency list. Freed slots keep an empty key.
#[derive(Debug, Default)]
struct Node {
    key: String,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys live in a doubly linked list threaded through a slab of nodes:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// `touch`, `remove` and `evict_oldest` are O(1).
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Node storage, indexed by slot
    nodes: Vec<Node>,
    /// Slots available for reuse
    free: Vec<usize>,
    /// Key to slot lookup
    slots: HashMap<String, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as recently used (moves to front).
    ///
    /// If key is new, it is added at the front.
    pub fn touch(&mut self, key: &str) {
        if let Some(&idx) = self.slots.get(key) {
            if self.head != Some(idx) {
                self.unlink(idx);
                self.push_front(idx);
            }
            return;
        }

        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx].key = key.to_string();
                idx
            }
            None => {
                self.nodes.push(Node {
                    key: key.to_string(),
                    ..Node::default()
                });
                self.nodes.len() - 1
            }
        };
        self.slots.insert(key.to_string(), idx);
        self.push_front(idx);
    }

    // == Remove ==
    /// Removes a key from the tracker. Returns false if it was not tracked.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.slots.remove(key) {
            Some(idx) => {
                self.unlink(idx);
                self.release(idx);
                true
            }
            None => false,
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let idx = self.tail?;
        self.unlink(idx);
        let key = self.release(idx);
        self.slots.remove(&key);
        Some(key)
    }

    // == Keys ==
    /// Returns tracked keys ordered from most to least recently used.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::with_capacity(self.slots.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = &self.nodes[idx];
            keys.push(node.key.clone());
            cursor = node.next;
        }
        keys
    }

    // == Clear ==
    /// Forgets every tracked key and releases node storage.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.slots.clear();
        self.head = None;
        self.tail = None;
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // == List Plumbing ==
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = &mut self.nodes[idx];
            (node.prev.take(), node.next.take())
        };

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;
        match self.head {
            Some(h) => self.nodes[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    /// Returns the slot to the free list and hands back its key.
    fn release(&mut self, idx: usize) -> String {
        self.free.push(idx);
        mem::take(&mut self.nodes[idx].key)
    }
}
