// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! A tree shared between threads behind a reader-writer lock.
//!
//! Searches and traversals never mutate, so any number of readers can hold
//! the lock together. Inserts and deletes take it exclusively. There is no
//! finer-grained locking inside the tree.

use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use crate::error::TreeError;
use crate::tree::OrderedTree;
use crate::tree::Traversal;

/// Any `OrderedTree` behind an `RwLock`.
///
/// ```
/// use std::sync::Arc;
/// use ordtree::sync::SharedTree;
/// use ordtree::tree::RedBlackTree;
///
/// let shared = Arc::new(SharedTree::new(RedBlackTree::<u32>::natural()));
/// let handles: Vec<_> = (0..4)
///     .map(|t| {
///         let shared = Arc::clone(&shared);
///         std::thread::spawn(move || {
///             for i in 0..10 {
///                 shared.insert(t * 10 + i);
///             }
///         })
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
/// assert_eq!(shared.len(), 40);
/// assert_eq!(shared.snapshot(), (0..40).collect::<Vec<_>>());
/// ```
#[derive(Debug, Default)]
pub struct SharedTree<Tr> {
    inner: RwLock<Tr>,
}

impl<Tr> SharedTree<Tr> {
    pub fn new(tree: Tr) -> SharedTree<Tr> {
        return SharedTree {
            inner: RwLock::new(tree),
        };
    }

    /// Shared access. A poisoned lock is recovered: every tree operation
    /// finishes its relinking before calling back into user code, so a
    /// panic elsewhere cannot leave the node graph half-spliced.
    pub fn read(&self) -> RwLockReadGuard<'_, Tr> {
        return self.inner.read().unwrap_or_else(|poisoned| {
            log::warn!("shared tree: recovering poisoned lock for read");
            return PoisonError::into_inner(poisoned);
        });
    }

    /// Exclusive access.
    pub fn write(&self) -> RwLockWriteGuard<'_, Tr> {
        return self.inner.write().unwrap_or_else(|poisoned| {
            log::warn!("shared tree: recovering poisoned lock for write");
            return PoisonError::into_inner(poisoned);
        });
    }

    pub fn into_inner(self) -> Tr {
        return self.inner.into_inner().unwrap_or_else(PoisonError::into_inner);
    }

    pub fn insert(&self, value: Tr::Item)
    where
        Tr: OrderedTree,
    {
        self.write().insert(value);
    }

    pub fn delete(&self, value: &Tr::Item) -> Result<(), TreeError>
    where
        Tr: OrderedTree,
    {
        return self.write().delete(value);
    }

    /// A copy of the first stored value equal to `value`.
    pub fn get(&self, value: &Tr::Item) -> Option<Tr::Item>
    where
        Tr: OrderedTree,
        Tr::Item: Clone,
    {
        return self.read().search(value).cloned();
    }

    pub fn contains(&self, value: &Tr::Item) -> bool
    where
        Tr: OrderedTree,
    {
        return self.read().contains(value);
    }

    pub fn len(&self) -> usize
    where
        Tr: OrderedTree,
    {
        return self.read().len();
    }

    pub fn is_empty(&self) -> bool
    where
        Tr: OrderedTree,
    {
        return self.read().is_empty();
    }

    /// The in-order contents, copied out under one read lock.
    pub fn snapshot(&self) -> Vec<Tr::Item>
    where
        Tr: Traversal,
        Tr::Item: Clone,
    {
        return self.read().in_order().cloned().collect();
    }
}
