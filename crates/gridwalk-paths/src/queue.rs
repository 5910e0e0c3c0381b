use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by `(priority, label)`, reversed so that
/// `BinaryHeap` (a max-heap) pops the smallest first.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Entry<L> {
    priority: i32,
    label: L,
}

impl<L: Ord> Ord for Entry<L> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl<L: Ord> PartialOrd for Entry<L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue of labelled entries.
///
/// Entries with equal priority come out in ascending label order. There is
/// no decrease-key: pushing the same label twice keeps both entries, and the
/// caller is expected to tolerate stale ones.
#[derive(Clone, Debug)]
pub struct PriorityQueue<L> {
    heap: BinaryHeap<Entry<L>>,
}

impl<L: Ord> Default for PriorityQueue<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Ord> PriorityQueue<L> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Insert `label` with the given priority.
    pub fn push(&mut self, priority: i32, label: L) {
        self.heap.push(Entry { priority, label });
    }

    /// Remove and return the entry with the smallest priority, or `None`
    /// when the queue is empty.
    pub fn pop(&mut self) -> Option<(i32, L)> {
        self.heap.pop().map(|e| (e.priority, e.label))
    }

    /// Smallest priority currently queued.
    pub fn peek_priority(&self) -> Option<i32> {
        self.heap.peek().map(|e| e.priority)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
