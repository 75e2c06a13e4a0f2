// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Plain binary-search-tree machinery shared by both trees.
//!
//! `RawTree` owns the node arena, the root index and the comparator. It
//! knows how to descend, attach, splice out and rotate, but never looks at
//! node tags. The red-black tree layers its fixup passes on top of these
//! primitives; the plain BST uses them as they are.

use std::cmp::Ordering;
use std::collections::VecDeque;

use super::arena::Arena;
use super::arena::NodeIdx;
use super::node::Node;
use super::traversal::InOrder;
use super::traversal::LevelOrder;
use super::traversal::PostOrder;
use super::traversal::PreOrder;
use super::validate::InvariantViolation;
use crate::compare::Side;
use crate::config::TreeConfig;
use crate::queue::Queue;

/// A node that was unlinked from the tree.
pub(crate) struct Spliced<T, M> {
    pub value: T,
    pub tag: M,
    /// The child promoted into the vacated position, if any.
    pub child: Option<NodeIdx>,
    /// Parent of the vacated position. `None` if the root was removed.
    pub parent: Option<NodeIdx>,
}

#[derive(Clone)]
pub(crate) struct RawTree<T, M, C> {
    pub nodes: Arena<Node<T, M>>,
    pub root: Option<NodeIdx>,
    pub compare: C,
    pub config: TreeConfig,
}

impl<T, M, C> RawTree<T, M, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C, config: TreeConfig) -> RawTree<T, M, C> {
        return RawTree {
            nodes: Arena::with_capacity(config.capacity),
            root: None,
            compare,
            config,
        };
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.nodes.len();
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.root.is_none();
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Descend from the root and hang a new leaf in the first empty slot.
    /// Equal values go right. Returns the new node's index.
    pub fn attach(&mut self, value: T, tag: M) -> NodeIdx {
        let Some(mut curr) = self.root else {
            let idx = self.nodes.alloc(Node::new(value, tag, None));
            self.root = Some(idx);
            return idx;
        };

        loop {
            let side = Side::route(&self.compare, &value, &self.nodes[curr].value);
            match self.nodes[curr].child(side) {
                Some(next) => curr = next,
                None => {
                    let idx = self.nodes.alloc(Node::new(value, tag, Some(curr)));
                    self.nodes[curr].set_child(side, Some(idx));
                    return idx;
                }
            }
        }
    }

    /// First node on the descent path that compares equal to `item`.
    pub fn find(&self, item: &T) -> Option<NodeIdx> {
        let mut curr = self.root;
        while let Some(idx) = curr {
            let node = &self.nodes[idx];
            curr = match (self.compare)(item, &node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(idx),
            };
        }
        return None;
    }

    pub fn search(&self, item: &T) -> Option<&T> {
        return self.find(item).map(|idx| &self.nodes[idx].value);
    }

    /// Leftmost node of the subtree rooted at `idx`.
    pub fn minimum(&self, mut idx: NodeIdx) -> NodeIdx {
        while let Some(left) = self.nodes[idx].left {
            idx = left;
        }
        return idx;
    }

    /// Rightmost node of the subtree rooted at `idx`.
    pub fn maximum(&self, mut idx: NodeIdx) -> NodeIdx {
        while let Some(right) = self.nodes[idx].right {
            idx = right;
        }
        return idx;
    }

    pub fn min(&self) -> Option<&T> {
        return self.root.map(|root| &self.nodes[self.minimum(root)].value);
    }

    pub fn max(&self) -> Option<&T> {
        return self.root.map(|root| &self.nodes[self.maximum(root)].value);
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: VecDeque<NodeIdx> = self.root.into_iter().collect();
        while !level.is_empty() {
            height += 1;
            for _ in 0..level.len() {
                let Some(idx) = level.pop_front() else { break };
                level.extend(self.nodes[idx].left);
                level.extend(self.nodes[idx].right);
            }
        }
        return height;
    }

    /// Which child of its parent `idx` is, or `None` for the root.
    #[inline]
    pub fn side_of(&self, idx: NodeIdx) -> Option<Side> {
        let parent = self.nodes[idx].parent?;
        if self.nodes[parent].left == Some(idx) {
            return Some(Side::Left);
        }
        return Some(Side::Right);
    }

    /// Put `v` where `u` hangs: in `u`'s parent slot, or at the root.
    /// `u`'s own links are left untouched.
    pub fn transplant(&mut self, u: NodeIdx, v: Option<NodeIdx>) {
        let parent = self.nodes[u].parent;
        match parent {
            None => self.root = v,
            Some(p) => {
                if self.nodes[p].left == Some(u) {
                    self.nodes[p].left = v;
                } else {
                    self.nodes[p].right = v;
                }
            }
        }
        if let Some(v) = v {
            self.nodes[v].parent = parent;
        }
    }

    /// Rotate `x` down toward `dir`; its child on the other side takes its
    /// place. In-order sequence is preserved, tags are untouched.
    ///
    /// ```text
    ///     x                 y
    ///    / \     left      / \
    ///   a   y    ---->    x   c
    ///      / \           / \
    ///     b   c         a   b
    /// ```
    pub fn rotate(&mut self, x: NodeIdx, dir: Side) {
        let rising = dir.opposite();
        let y = self.nodes[x]
            .child(rising)
            .expect("rotation pivot has a child on the rising side");
        let inner = self.nodes[y].child(dir);

        self.nodes[x].set_child(rising, inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }
        self.transplant(x, Some(y));
        self.nodes[y].set_child(dir, Some(x));
        self.nodes[x].parent = Some(y);
        log::trace!("rotate {dir:?} at node {x}, node {y} rises");
    }

    /// Pick the node that will physically leave the tree when deleting
    /// `target`. With two children, the in-order successor's value is moved
    /// into `target` (and `target`'s value into the successor) so that the
    /// node to splice has at most one child.
    pub fn promote_successor(&mut self, target: NodeIdx) -> NodeIdx {
        let node = &self.nodes[target];
        let (Some(_), Some(right)) = (node.left, node.right) else {
            return target;
        };
        let successor = self.minimum(right);
        let (t, s) = self.nodes.pair_mut(target, successor);
        std::mem::swap(&mut t.value, &mut s.value);
        return successor;
    }

    /// Unlink a node with at most one child, promoting that child.
    pub fn splice_out(&mut self, idx: NodeIdx) -> Spliced<T, M> {
        debug_assert!(!self.nodes[idx].has_two_children());
        let child = self.nodes[idx].left.or(self.nodes[idx].right);
        let parent = self.nodes[idx].parent;
        self.transplant(idx, child);
        let node = self.nodes.release(idx);
        return Spliced {
            value: node.value,
            tag: node.tag,
            child,
            parent,
        };
    }

    /// Parent back-links agree with child links, the root has no parent,
    /// the in-order walk is non-decreasing and reaches every node.
    pub fn check_structure(&self) -> Result<(), InvariantViolation> {
        if let Some(root) = self.root {
            if self.nodes[root].parent.is_some() {
                return Err(InvariantViolation::ParentLink { depth: 0 });
            }
        }

        let mut stack: Vec<(NodeIdx, usize)> = self.root.map(|r| (r, 0)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            let node = &self.nodes[idx];
            for child in [node.left, node.right].into_iter().flatten() {
                if self.nodes[child].parent != Some(idx) {
                    return Err(InvariantViolation::ParentLink { depth: depth + 1 });
                }
                stack.push((child, depth + 1));
            }
        }

        let mut counted = 0;
        let mut prev: Option<&T> = None;
        for value in self.in_order() {
            if let Some(prev) = prev {
                if (self.compare)(prev, value) == Ordering::Greater {
                    return Err(InvariantViolation::OutOfOrder { position: counted });
                }
            }
            prev = Some(value);
            counted += 1;
        }
        if counted != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                counted,
                len: self.len(),
            });
        }
        return Ok(());
    }

    pub fn in_order(&self) -> InOrder<'_, T, M> {
        return InOrder::new(&self.nodes, self.root);
    }

    pub fn pre_order(&self) -> PreOrder<'_, T, M> {
        return PreOrder::new(&self.nodes, self.root);
    }

    pub fn post_order(&self) -> PostOrder<'_, T, M> {
        return PostOrder::new(&self.nodes, self.root);
    }

    pub fn level_order(&self) -> LevelOrder<'_, T, M> {
        return self.level_order_with(VecDeque::with_capacity(self.len() / 2 + 1));
    }

    pub fn level_order_with<Q: Queue<NodeIdx>>(&self, queue: Q) -> LevelOrder<'_, T, M, Q> {
        return LevelOrder::with_queue(&self.nodes, self.root, queue);
    }
}
