use std::collections::HashMap;

use pathgrid_core::PosId;

use crate::registry::NodeId;

/// Heap entry. Keys copy the node's `f` so the heap never needs the registry.
#[derive(Copy, Clone, Debug)]
struct Entry {
    node: NodeId,
    pos: PosId,
    f: i32,
    seq: u64,
}

impl Entry {
    /// Lowest `f` first; among equals, the earliest push.
    #[inline]
    fn key(&self) -> (i32, u64) {
        (self.f, self.seq)
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Open set of an A* search: a binary min-heap over `f` with a
/// position → slot index for lookups and decrease-key.
///
/// Each position is held at most once.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: Vec<Entry>,
    slots: HashMap<PosId, usize>,
    next_seq: u64,
    peak: usize,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the frontier reached.
    #[inline]
    pub(crate) fn peak(&self) -> usize {
        self.peak
    }

    /// Insert `node`, which sits at `pos` and scores `f`.
    pub(crate) fn push(&mut self, node: NodeId, pos: PosId, f: i32) {
        debug_assert!(!self.slots.contains_key(&pos), "{pos} already in frontier");
        let seq = self.next_seq;
        self.next_seq += 1;
        let slot = self.heap.len();
        self.heap.push(Entry { node, pos, f, seq });
        self.slots.insert(pos, slot);
        self.peak = self.peak.max(self.heap.len());
        self.sift_up(slot);
    }

    /// Remove and return the node with the lowest `f`.
    pub(crate) fn pop_min(&mut self) -> Option<NodeId> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.slots.remove(&entry.pos);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.node)
    }

    /// The node currently held for `pos`.
    #[inline]
    pub(crate) fn find(&self, pos: PosId) -> Option<NodeId> {
        self.slots.get(&pos).map(|&slot| self.heap[slot].node)
    }

    /// Lower the score of the node held for `pos` to `f` and restore heap
    /// order. Returns `false` if `pos` is not held or `f` is not lower.
    pub(crate) fn decrease_key(&mut self, pos: PosId, f: i32) -> bool {
        let Some(&slot) = self.slots.get(&pos) else {
            return false;
        };
        if f >= self.heap[slot].f {
            return false;
        }
        self.heap[slot].f = f;
        self.sift_up(slot);
        true
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].pos, a);
        self.slots.insert(self.heap[b].pos, b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].key() >= self.heap[parent].key() {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.heap[left].key() < self.heap[smallest].key() {
                smallest = left;
            }
            if right < len && self.heap[right].key() < self.heap[smallest].key() {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
