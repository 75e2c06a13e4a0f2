// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Unbalanced binary search tree.
//!
//! Same node shape as the red-black tree minus the color. Nothing keeps it
//! balanced, so sorted input degrades it into a linked list with O(n)
//! operations. That is the expected behavior of a plain BST.

use std::cmp::Ordering;
use std::fmt;

use super::OrderedTree;
use super::Traversal;
use super::arena::NodeIdx;
use super::pretty;
use super::raw::RawTree;
use super::traversal::InOrder;
use super::traversal::LevelOrder;
use super::traversal::PostOrder;
use super::traversal::PreOrder;
use super::validate::InvariantViolation;
use crate::compare::Natural;
use crate::compare::natural;
use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::queue::Queue;

/// A binary search tree ordered by `C`.
///
/// ```
/// use ordtree::tree::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new(|a: &i32, b: &i32| a.cmp(b));
/// for v in [50, 30, 20, 40, 70, 60, 80] {
///     tree.insert(v);
/// }
/// assert_eq!(tree.search(&40), Some(&40));
/// assert!(tree.delete(&51).is_err());
/// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![20, 30, 40, 50, 60, 70, 80]);
/// ```
#[derive(Clone)]
pub struct BinarySearchTree<T, C = Natural<T>> {
    raw: RawTree<T, (), C>,
}

impl<T, C> BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> BinarySearchTree<T, C> {
        return Self::with_config(compare, TreeConfig::default());
    }

    pub fn with_config(compare: C, config: TreeConfig) -> BinarySearchTree<T, C> {
        return BinarySearchTree {
            raw: RawTree::new(compare, config),
        };
    }

    pub fn insert(&mut self, value: T) {
        self.raw.attach(value, ());
        self.check("insert");
    }

    pub fn delete(&mut self, value: &T) -> Result<(), TreeError> {
        return self.take(value).map(|_| ());
    }

    /// Delete and hand back the stored value that matched.
    ///
    /// A node with two children keeps its place and receives its in-order
    /// successor's value; the successor's node is the one unlinked.
    pub fn take(&mut self, value: &T) -> Result<T, TreeError> {
        let Some(target) = self.raw.find(value) else {
            log::debug!("bst delete missed: no equal value among {} nodes", self.raw.len());
            return Err(TreeError::NotFound);
        };
        let doomed = self.raw.promote_successor(target);
        let spliced = self.raw.splice_out(doomed);
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

    /// Nodes on the longest root-to-leaf path. Up to `len()` for sorted input.
    pub fn height(&self) -> usize {
        return self.raw.height();
    }

    pub fn in_order(&self) -> InOrder<'_, T, ()> {
        return self.raw.in_order();
    }

    pub fn pre_order(&self) -> PreOrder<'_, T, ()> {
        return self.raw.pre_order();
    }

    pub fn post_order(&self) -> PostOrder<'_, T, ()> {
        return self.raw.post_order();
    }

    pub fn level_order(&self) -> LevelOrder<'_, T, ()> {
        return self.raw.level_order();
    }

    /// Level order through a caller-supplied FIFO. The queue should start
    /// empty; it is drained by the time the iterator finishes.
    pub fn level_order_with<Q: Queue<NodeIdx>>(&self, queue: Q) -> LevelOrder<'_, T, (), Q> {
        return self.raw.level_order_with(queue);
    }

    /// Same as `in_order`.
    pub fn iter(&self) -> InOrder<'_, T, ()> {
        return self.raw.in_order();
    }

    /// Check ordering and link consistency.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        return self.raw.check_structure();
    }

    fn check(&self, op: &str) {
        if !self.raw.config.check_invariants {
            return;
        }
        if let Err(violation) = self.validate() {
            panic!("binary search tree broken after {op}: {violation}");
        }
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// A tree ordered by `Ord::cmp`.
    pub fn natural() -> BinarySearchTree<T> {
        return BinarySearchTree::new(natural());
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        return BinarySearchTree::natural();
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::natural();
        tree.extend(iter);
        return tree;
    }
}

impl<T, C> Extend<T> for BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = InOrder<'a, T, ()>;

    fn into_iter(self) -> InOrder<'a, T, ()> {
        return self.raw.in_order();
    }
}

impl<T, C> OrderedTree for BinarySearchTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn insert(&mut self, value: T) {
        BinarySearchTree::insert(self, value);
    }

    fn delete(&mut self, value: &T) -> Result<(), TreeError> {
        return BinarySearchTree::delete(self, value);
    }

    fn search(&self, value: &T) -> Option<&T> {
        return BinarySearchTree::search(self, value);
    }

    fn len(&self) -> usize {
        return BinarySearchTree::len(self);
    }
}

impl<T, C> Traversal for BinarySearchTree<T, C>
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

impl<T, C> fmt::Debug for BinarySearchTree<T, C>
where
    T: fmt::Debug,
    C: Fn(&T, &T) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.raw.in_order()).finish();
    }
}

impl<T, C> fmt::Display for BinarySearchTree<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return pretty::render(f, &self.raw.nodes, self.raw.root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinarySearchTree<i32> {
        return [50, 30, 20, 40, 70, 60, 80].into_iter().collect();
    }

    fn collect<'a>(iter: impl Iterator<Item = &'a i32>) -> Vec<i32> {
        return iter.copied().collect();
    }

    #[test]
    fn search_hits_and_misses() {
        let tree: BinarySearchTree<i32> = [1, 3, 10, 4, 2, -1].into_iter().collect();
        assert_eq!(tree.search(&5), None);
        assert_eq!(tree.search(&4), Some(&4));
        assert!(tree.contains(&-1));
    }

    #[test]
    fn traversals() {
        let tree = sample();
        assert_eq!(collect(tree.in_order()), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(collect(tree.pre_order()), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(collect(tree.post_order()), vec![20, 40, 30, 60, 80, 70, 50]);
        assert_eq!(collect(tree.level_order()), vec![50, 30, 70, 20, 40, 60, 80]);
    }

    #[test]
    fn delete_leaf_then_root_promotes_successor() {
        let mut tree = sample();
        assert_eq!(tree.delete(&51), Err(TreeError::NotFound));
        assert_eq!(tree.delete(&20), Ok(()));
        assert_eq!(tree.delete(&50), Ok(()));
        assert_eq!(tree.level_order().next(), Some(&60));
        assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![30, 40, 60, 70, 80]);
        tree.validate().unwrap();
    }

    #[test]
    fn delete_one_child_splices_child_up() {
        let mut tree: BinarySearchTree<i32> = [10, 5, 3].into_iter().collect();
        tree.delete(&5).unwrap();
        assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![10, 3]);
        tree.validate().unwrap();
    }

    #[test]
    fn failed_delete_leaves_tree_unchanged() {
        let mut tree = sample();
        let before: Vec<i32> = tree.level_order().copied().collect();
        assert!(tree.delete(&99).is_err());
        assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), before);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn sorted_input_degrades_to_a_path() {
        let tree: BinarySearchTree<u32> = (0..64).collect();
        assert_eq!(tree.height(), 64);
        assert_eq!(tree.min(), Some(&0));
        assert_eq!(tree.max(), Some(&63));
    }

    #[test]
    fn take_returns_the_matching_value() {
        let by_key = |a: &(u8, &'static str), b: &(u8, &'static str)| a.0.cmp(&b.0);
        let mut tree = BinarySearchTree::new(by_key);
        tree.insert((2, "two"));
        tree.insert((1, "one"));
        tree.insert((3, "three"));
        assert_eq!(tree.take(&(2, "")), Ok((2, "two")));
        assert_eq!(tree.search(&(3, "")), Some(&(3, "three")));
    }

    #[test]
    fn display_draws_the_shape() {
        let tree: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
        assert_eq!(tree.to_string(), "R----2\n     L----1\n     R----3\n");
    }

    #[test]
    fn empty_tree() {
        let mut tree = BinarySearchTree::<i32>::default();
        assert!(tree.is_empty());
        assert_eq!(tree.level_order().count(), 0);
        assert_eq!(tree.delete(&1), Err(TreeError::NotFound));
        assert_eq!(format!("{tree:?}"), "[]");
    }
}
