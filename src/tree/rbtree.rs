// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Red-black tree.
//!
//! A binary search tree whose nodes carry a color, kept balanced by five
//! rules that hold after every public operation:
//!
//! - The root is black.
//! - A red node has no red child.
//! - Every path from a node down to a missing child crosses the same number
//!   of black nodes.
//! - The in-order sequence is non-decreasing under the comparator.
//! - Missing children count as black.
//!
//! Together these bound the height by `2 * log2(n + 1)`.
//!
//! Insert and delete start as plain BST operations (see `raw`) and then run
//! a fixup pass that recolors and rotates on the way back up.
//!
//! # Example
//!
//! ```
//! use ordtree::tree::RedBlackTree;
//!
//! let mut tree: RedBlackTree<i32> = (1..=7).collect();
//! assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![2, 1, 4, 3, 6, 5, 7]);
//!
//! tree.delete(&4).unwrap();
//! assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3, 5, 6, 7]);
//! assert!(tree.validate().is_ok());
//! ```

use std::cmp::Ordering;
use std::fmt;

use super::OrderedTree;
use super::Traversal;
use super::arena::NodeIdx;
use super::node::Color;
use super::pretty;
use super::raw::RawTree;
use super::traversal::InOrder;
use super::traversal::LevelOrder;
use super::traversal::PostOrder;
use super::traversal::PreOrder;
use super::validate;
use super::validate::InvariantViolation;
use crate::compare::Natural;
use crate::compare::Side;
use crate::compare::natural;
use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::queue::Queue;

/// A red-black tree ordered by `C`.
#[derive(Clone)]
pub struct RedBlackTree<T, C = Natural<T>> {
    raw: RawTree<T, Color, C>,
}

impl<T, C> RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> RedBlackTree<T, C> {
        return Self::with_config(compare, TreeConfig::default());
    }

    pub fn with_config(compare: C, config: TreeConfig) -> RedBlackTree<T, C> {
        return RedBlackTree {
            raw: RawTree::new(compare, config),
        };
    }

    /// Add a value. Equal values go to the right of existing ones.
    pub fn insert(&mut self, value: T) {
        let idx = self.raw.attach(value, Color::Red);
        self.insert_fixup(idx);
        self.check("insert");
    }

    pub fn delete(&mut self, value: &T) -> Result<(), TreeError> {
        return self.take(value).map(|_| ());
    }

    /// Delete and hand back the stored value that matched.
    ///
    /// A node with two children stays in place and takes its in-order
    /// successor's value; the successor's node, which has at most one
    /// child, is the one unlinked.
    pub fn take(&mut self, value: &T) -> Result<T, TreeError> {
        let Some(target) = self.raw.find(value) else {
            log::debug!("rbtree delete missed: no equal value among {} nodes", self.raw.len());
            return Err(TreeError::NotFound);
        };
        let doomed = self.raw.promote_successor(target);
        let spliced = self.raw.splice_out(doomed);
        // Losing a red node changes no black-height.
        if spliced.tag == Color::Black {
            self.delete_fixup(spliced.child, spliced.parent);
        }
        self.check("delete");
        return Ok(spliced.value);
    }

    pub fn search(&self, value: &T) -> Option<&T> {
        return self.raw.search(value);
    }

    pub fn contains(&self, value: &T) -> bool {
        return self.raw.find(value).is_some();
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.raw.len();
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.raw.is_empty();
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    pub fn min(&self) -> Option<&T> {
        return self.raw.min();
    }

    pub fn max(&self) -> Option<&T> {
        return self.raw.max();
    }

    pub fn height(&self) -> usize {
        return self.raw.height();
    }

    /// Color of the root, `None` when empty. Always `Black` otherwise.
    pub fn root_color(&self) -> Option<Color> {
        return self.raw.root.map(|root| self.raw.nodes[root].tag);
    }

    pub fn in_order(&self) -> InOrder<'_, T, Color> {
        return self.raw.in_order();
    }

    pub fn pre_order(&self) -> PreOrder<'_, T, Color> {
        return self.raw.pre_order();
    }

    pub fn post_order(&self) -> PostOrder<'_, T, Color> {
        return self.raw.post_order();
    }

    pub fn level_order(&self) -> LevelOrder<'_, T, Color> {
        return self.raw.level_order();
    }

    /// Level order through a caller-supplied FIFO. The queue should start
    /// empty; it is drained by the time the iterator finishes.
    pub fn level_order_with<Q: Queue<NodeIdx>>(&self, queue: Q) -> LevelOrder<'_, T, Color, Q> {
        return self.raw.level_order_with(queue);
    }

    /// Same as `in_order`.
    pub fn iter(&self) -> InOrder<'_, T, Color> {
        return self.raw.in_order();
    }

    /// Check every red-black invariant. Returns the black-height of the root,
    /// counting the root itself: a lone black root gives 1, an empty tree 0.
    /// Subtract one for the count that excludes the starting node.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        return validate::check_red_black(&self.raw);
    }

    fn check(&self, op: &str) {
        if !self.raw.config.check_invariants {
            return;
        }
        if let Err(violation) = self.validate() {
            panic!("red-black tree broken after {op}: {violation}");
        }
    }

    /// Missing nodes are black.
    #[inline(always)]
    fn color(&self, idx: Option<NodeIdx>) -> Color {
        return match idx {
            Some(idx) => self.raw.nodes[idx].tag,
            None => Color::Black,
        };
    }

    #[inline(always)]
    fn paint(&mut self, idx: NodeIdx, color: Color) {
        self.raw.nodes[idx].tag = color;
    }

    /// Restore the rules after hanging the red leaf `curr`.
    ///
    /// The only rule a red leaf can break is red-under-red. A red uncle lets
    /// us push the problem two levels up by recoloring; a black uncle is
    /// settled for good with one or two rotations.
    fn insert_fixup(&mut self, mut curr: NodeIdx) {
        while Some(curr) != self.raw.root {
            let Some(parent) = self.raw.nodes[curr].parent else {
                break;
            };
            if self.raw.nodes[parent].tag == Color::Black {
                break;
            }
            let grand = self.raw.nodes[parent]
                .parent
                .expect("a red parent is never the root");
            let side = self.raw.side_of(parent).unwrap_or(Side::Left);
            let uncle = self.raw.nodes[grand].child(side.opposite());

            if self.color(uncle) == Color::Red {
                log::trace!("insert fixup: red uncle, recolor at node {grand}");
                self.paint(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.paint(uncle, Color::Black);
                }
                self.paint(grand, Color::Red);
                curr = grand;
                continue;
            }

            // Zig-zag: straighten into a line first.
            if self.raw.nodes[parent].child(side.opposite()) == Some(curr) {
                log::trace!("insert fixup: inner child, rotate {side:?} at node {parent}");
                curr = parent;
                self.raw.rotate(curr, side);
            }
            let parent = self.raw.nodes[curr]
                .parent
                .expect("rotated node keeps a parent");
            log::trace!("insert fixup: black uncle, rotate {:?} at node {grand}", side.opposite());
            self.paint(parent, Color::Black);
            self.paint(grand, Color::Red);
            self.raw.rotate(grand, side.opposite());
        }

        if let Some(root) = self.raw.root {
            self.paint(root, Color::Black);
        }
    }

    /// Restore uniform black-height after a black node left the tree.
    ///
    /// `x` is the node that took the removed node's place and is "doubly
    /// black"; it may be missing, in which case `parent` says where it is.
    /// Each round inspects the sibling `w`:
    ///
    /// 1. red `w`: rotate it above the parent so the new sibling is black.
    /// 2. `w` with two black children: paint `w` red, move up a level.
    /// 3. `w` with red near child, black far child: rotate `w` so the red
    ///    child becomes the far one.
    /// 4. `w` with red far child: rotate the parent toward `x` and stop.
    fn delete_fixup(&mut self, mut x: Option<NodeIdx>, mut parent: Option<NodeIdx>) {
        while x != self.raw.root && self.color(x) == Color::Black {
            let p = match x {
                Some(x) => self.raw.nodes[x].parent,
                None => parent,
            };
            let p = p.expect("a non-root double-black position has a parent");
            // When `x` is missing, its slot is the empty one.
            let side = if self.raw.nodes[p].left == x {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();
            let mut w = self.sibling(p, far);

            if self.color(Some(w)) == Color::Red {
                log::trace!("delete fixup: red sibling, rotate {side:?} at node {p}");
                self.paint(w, Color::Black);
                self.paint(p, Color::Red);
                self.raw.rotate(p, side);
                w = self.sibling(p, far);
            }

            let near_child = self.raw.nodes[w].child(side);
            let far_child = self.raw.nodes[w].child(far);
            if self.color(near_child) == Color::Black && self.color(far_child) == Color::Black {
                log::trace!("delete fixup: black nephews, move up to node {p}");
                self.paint(w, Color::Red);
                x = Some(p);
                parent = self.raw.nodes[p].parent;
                continue;
            }

            if self.color(far_child) == Color::Black {
                log::trace!("delete fixup: red near nephew, rotate {far:?} at node {w}");
                if let Some(near) = near_child {
                    self.paint(near, Color::Black);
                }
                self.paint(w, Color::Red);
                self.raw.rotate(w, far);
                w = self.sibling(p, far);
            }

            log::trace!("delete fixup: red far nephew, rotate {side:?} at node {p}");
            let parent_color = self.raw.nodes[p].tag;
            self.paint(w, parent_color);
            self.paint(p, Color::Black);
            if let Some(far_child) = self.raw.nodes[w].child(far) {
                self.paint(far_child, Color::Black);
            }
            self.raw.rotate(p, side);
            x = self.raw.root;
        }

        if let Some(x) = x {
            self.paint(x, Color::Black);
        }
    }

    /// The child of `p` on `side`, which must exist for a double-black
    /// sibling: the other side is at least one black node taller.
    fn sibling(&self, p: NodeIdx, side: Side) -> NodeIdx {
        return self.raw.nodes[p]
            .child(side)
            .expect("a double-black position always has a sibling");
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// A tree ordered by `Ord::cmp`.
    pub fn natural() -> RedBlackTree<T> {
        return RedBlackTree::new(natural());
    }
}

impl<T: Ord> Default for RedBlackTree<T> {
    fn default() -> Self {
        return RedBlackTree::natural();
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RedBlackTree::natural();
        tree.extend(iter);
        return tree;
    }
}

impl<T, C> Extend<T> for RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = InOrder<'a, T, Color>;

    fn into_iter(self) -> InOrder<'a, T, Color> {
        return self.raw.in_order();
    }
}

impl<T, C> OrderedTree for RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn insert(&mut self, value: T) {
        RedBlackTree::insert(self, value);
    }

    fn delete(&mut self, value: &T) -> Result<(), TreeError> {
        return RedBlackTree::delete(self, value);
    }

    fn search(&self, value: &T) -> Option<&T> {
        return RedBlackTree::search(self, value);
    }

    fn len(&self) -> usize {
        return RedBlackTree::len(self);
    }
}

impl<T, C> Traversal for RedBlackTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn in_order(&self) -> impl Iterator<Item = &T> {
        return self.raw.in_order();
    }

    fn pre_order(&self) -> impl Iterator<Item = &T> {
        return self.raw.pre_order();
    }

    fn post_order(&self) -> impl Iterator<Item = &T> {
        return self.raw.post_order();
    }

    fn level_order(&self) -> impl Iterator<Item = &T> {
        return self.raw.level_order();
    }
}

impl<T, C> fmt::Debug for RedBlackTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.raw.in_order()).finish();
    }
}

impl<T, C> fmt::Display for RedBlackTree<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return pretty::render(f, &self.raw.nodes, self.raw.root);
    }
}
