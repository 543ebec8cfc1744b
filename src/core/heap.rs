//! Indexed binary max-heap with re-prioritisable entries.
//!
//! Every pushed item receives a stable [`Handle`]. The heap keeps a
//! handle -> position table current on every internal swap, so an entry's
//! priority can be raised or lowered in place in O(log n) without
//! rebuilding. MCTS uses this to re-rank a node's children after each visit.
//!
//! ```
//! use euchre_search::core::IndexedHeap;
//!
//! let mut heap = IndexedHeap::new();
//! let a = heap.push("a", 1.0);
//! let _b = heap.push("b", 2.0);
//!
//! assert_eq!(heap.peek(), Some((&"b", 2.0)));
//!
//! heap.update(a, 3.0);
//! assert_eq!(heap.peek(), Some((&"a", 3.0)));
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Stable reference to a heap entry, valid until the entry is popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(u32);

impl Handle {
    /// Sentinel for an entry that was never pushed.
    pub const NONE: Handle = Handle(u32::MAX);

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    fn slot(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    item: T,
    priority: f64,
    handle: Handle,
}

/// Max-heap keyed by `f64` priority.
///
/// Ties are resolved by the fixed comparison sequence of the sift
/// operations, so a given push/update order always yields the same layout.
#[derive(Clone, Debug)]
pub struct IndexedHeap<T> {
    /// Entries in heap order.
    entries: Vec<Entry<T>>,

    /// Handle slot -> position in `entries` (`None` once popped).
    positions: Vec<Option<usize>>,
}

impl<T> Default for IndexedHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IndexedHeap<T> {
    /// Create an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an item and return its handle.
    pub fn push(&mut self, item: T, priority: f64) -> Handle {
        let handle = Handle(self.positions.len() as u32);
        let pos = self.entries.len();

        self.entries.push(Entry {
            item,
            priority,
            handle,
        });
        self.positions.push(Some(pos));
        self.sift_up(pos);

        handle
    }

    /// The maximum item and its priority.
    #[must_use]
    pub fn peek(&self) -> Option<(&T, f64)> {
        self.entries.first().map(|e| (&e.item, e.priority))
    }

    /// Handle of the maximum item.
    #[must_use]
    pub fn peek_handle(&self) -> Option<Handle> {
        self.entries.first().map(|e| e.handle)
    }

    /// Remove and return the maximum item.
    pub fn pop(&mut self) -> Option<(T, f64)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);

        let entry = self.entries.pop()?;
        self.positions[entry.handle.slot()] = None;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((entry.item, entry.priority))
    }

    /// Change an entry's priority and restore heap order.
    ///
    /// Returns `false` if the handle no longer refers to a live entry.
    pub fn update(&mut self, handle: Handle, priority: f64) -> bool {
        let Some(pos) = self.position(handle) else {
            return false;
        };

        self.entries[pos].priority = priority;
        let pos = self.sift_up(pos);
        self.sift_down(pos);
        true
    }

    /// Current priority of an entry.
    #[must_use]
    pub fn priority(&self, handle: Handle) -> Option<f64> {
        self.position(handle).map(|pos| self.entries[pos].priority)
    }

    /// Borrow an entry's item.
    #[must_use]
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.position(handle).map(|pos| &self.entries[pos].item)
    }

    /// Whether the handle refers to a live entry.
    #[must_use]
    pub fn contains(&self, handle: Handle) -> bool {
        self.position(handle).is_some()
    }

    /// Iterate over `(handle, item, priority)` in heap-array order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T, f64)> {
        self.entries.iter().map(|e| (e.handle, &e.item, e.priority))
    }

    fn position(&self, handle: Handle) -> Option<usize> {
        self.positions.get(handle.slot()).copied().flatten()
    }

    fn higher(&self, a: usize, b: usize) -> bool {
        self.entries[a].priority.total_cmp(&self.entries[b].priority) == Ordering::Greater
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.positions[self.entries[a].handle.slot()] = Some(a);
        self.positions[self.entries[b].handle.slot()] = Some(b);
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.higher(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut largest = pos;

            if left < len && self.higher(left, largest) {
                largest = left;
            }
            if right < len && self.higher(right, largest) {
                largest = right;
            }
            if largest == pos {
                break;
            }
            self.swap(pos, largest);
            pos = largest;
        }
    }
}
