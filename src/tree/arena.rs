// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Index-addressed node storage.
//!
//! Nodes live in a single `Vec` and refer to each other by `NodeIdx`, so
//! parent back-links are plain indices: no raw pointers, no reference
//! counting, no cycles to leak. Removed slots go on a free list and are
//! reused by the next allocation.

use std::ops::Index;
use std::ops::IndexMut;

/// Index of a node slot in an `Arena`. Level-order queues hold these.
pub type NodeIdx = u32;

#[derive(Clone, Debug)]
pub(crate) struct Arena<N> {
    /// Node slots. `None` marks a vacated slot waiting on the free list.
    slots: Vec<Option<N>>,
    /// Indices of vacated slots.
    free: Vec<NodeIdx>,
    /// Number of occupied slots.
    len: usize,
}

impl<N> Arena<N> {
    pub fn with_capacity(capacity: usize) -> Arena<N> {
        return Arena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        };
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.len;
    }

    /// Store a node, reusing a vacated slot if one is available.
    pub fn alloc(&mut self, node: N) -> NodeIdx {
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(node);
            return idx;
        }
        let idx = NodeIdx::try_from(self.slots.len()).expect("arena exceeded u32::MAX nodes");
        self.slots.push(Some(node));
        return idx;
    }

    /// Vacate a slot, handing back the node that lived there.
    pub fn release(&mut self, idx: NodeIdx) -> N {
        let node = match self.slots[idx as usize].take() {
            Some(node) => node,
            None => panic!("released vacant node slot {idx}"),
        };
        self.free.push(idx);
        self.len -= 1;
        return node;
    }

    /// Mutable access to two distinct slots at once.
    pub fn pair_mut(&mut self, a: NodeIdx, b: NodeIdx) -> (&mut N, &mut N) {
        assert_ne!(a, b, "pair_mut needs two distinct slots");
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi as usize);
        let lo_node = Self::occupied(&mut head[lo as usize], lo);
        let hi_node = Self::occupied(&mut tail[0], hi);
        return if a < b { (lo_node, hi_node) } else { (hi_node, lo_node) };
    }

    /// Drop every node but keep the allocation.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }

    fn occupied(slot: &mut Option<N>, idx: NodeIdx) -> &mut N {
        return match slot {
            Some(node) => node,
            None => panic!("dangling node index {idx}"),
        };
    }
}

impl<N> Index<NodeIdx> for Arena<N> {
    type Output = N;

    #[inline]
    fn index(&self, idx: NodeIdx) -> &N {
        return match &self.slots[idx as usize] {
            Some(node) => node,
            None => panic!("dangling node index {idx}"),
        };
    }
}

impl<N> IndexMut<NodeIdx> for Arena<N> {
    #[inline]
    fn index_mut(&mut self, idx: NodeIdx) -> &mut N {
        return Self::occupied(&mut self.slots[idx as usize], idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_and_index() {
        let mut arena = Arena::with_capacity(4);
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena[a], "a");
        assert_eq!(arena[b], "b");
    }

    #[test]
    fn released_slots_are_reused() {
        let mut arena = Arena::with_capacity(0);
        let a = arena.alloc(1);
        let _b = arena.alloc(2);
        assert_eq!(arena.release(a), 1);
        assert_eq!(arena.len(), 1);
        let c = arena.alloc(3);
        assert_eq!(c, a);
        assert_eq!(arena[c], 3);
    }

    #[test]
    fn pair_mut_preserves_argument_order() {
        let mut arena = Arena::with_capacity(0);
        let a = arena.alloc(10);
        let b = arena.alloc(20);
        let (x, y) = arena.pair_mut(b, a);
        assert_eq!((*x, *y), (20, 10));
        std::mem::swap(x, y);
        assert_eq!(arena[a], 20);
        assert_eq!(arena[b], 10);
    }

    #[test]
    #[should_panic(expected = "dangling node index")]
    fn indexing_a_released_slot_panics() {
        let mut arena = Arena::with_capacity(0);
        let a = arena.alloc(1);
        arena.release(a);
        let _ = arena[a];
    }
}
