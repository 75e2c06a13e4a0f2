// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Ordered binary trees.
//!
//! Both trees are instances of one design: an arena of nodes linked by
//! index, ordered by a user comparator, with equal values routed right.
//! `BinarySearchTree` stops there. `RedBlackTree` adds a color tag and
//! restores its invariants after every insert and delete.

mod arena;
mod node;
mod pretty;
mod raw;
mod traversal;

pub mod bst;
pub mod rbtree;
pub mod validate;

pub use arena::NodeIdx;
pub use bst::BinarySearchTree;
pub use node::Color;
pub use rbtree::RedBlackTree;
pub use traversal::InOrder;
pub use traversal::LevelOrder;
pub use traversal::PostOrder;
pub use traversal::PreOrder;
pub use validate::InvariantViolation;

use crate::error::TreeError;

/// Core operations every ordered tree supports.
pub trait OrderedTree {
    /// The stored value type.
    type Item;

    /// Add a value. Always succeeds; duplicates are kept.
    fn insert(&mut self, value: Self::Item);

    /// Remove one value comparing equal to `value`.
    ///
    /// Returns `TreeError::NotFound` and leaves the tree untouched if
    /// nothing matches.
    fn delete(&mut self, value: &Self::Item) -> Result<(), TreeError>;

    /// The first stored value comparing equal to `value` on the descent
    /// from the root.
    fn search(&self, value: &Self::Item) -> Option<&Self::Item>;

    /// Number of stored values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    fn contains(&self, value: &Self::Item) -> bool {
        return self.search(value).is_some();
    }
}

/// The four classic traversal orders.
///
/// Every call starts a fresh walk from the root.
pub trait Traversal: OrderedTree {
    /// Left, self, right. Non-decreasing comparator order.
    fn in_order(&self) -> impl Iterator<Item = &Self::Item>;

    /// Self, left, right.
    fn pre_order(&self) -> impl Iterator<Item = &Self::Item>;

    /// Left, right, self.
    fn post_order(&self) -> impl Iterator<Item = &Self::Item>;

    /// Breadth-first, left to right within a level.
    fn level_order(&self) -> impl Iterator<Item = &Self::Item>;
}
