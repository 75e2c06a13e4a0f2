// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Lazy traversals shared by both trees.
//!
//! Each iterator borrows the node arena and walks from the root it was
//! created with. Nothing is shared between iterators, so every call to a
//! traversal method restarts from the top.
//!
//! The depth-first walks keep an explicit stack of node indices. It holds at
//! most one entry per level (two for post-order), so an inline `SmallVec`
//! covers any balanced tree without touching the heap.

use std::collections::VecDeque;

use smallvec::SmallVec;

use super::arena::Arena;
use super::arena::NodeIdx;
use super::node::Node;
use crate::queue::Queue;

type Stack<E> = SmallVec<[E; 32]>;

/// Left, self, right: ascending comparator order.
pub struct InOrder<'a, T, M> {
    nodes: &'a Arena<Node<T, M>>,
    stack: Stack<NodeIdx>,
    cursor: Option<NodeIdx>,
}

impl<'a, T, M> InOrder<'a, T, M> {
    pub(crate) fn new(nodes: &'a Arena<Node<T, M>>, root: Option<NodeIdx>) -> Self {
        return InOrder {
            nodes,
            stack: Stack::new(),
            cursor: root,
        };
    }
}

impl<'a, T, M> Iterator for InOrder<'a, T, M> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        while let Some(idx) = self.cursor {
            self.stack.push(idx);
            self.cursor = nodes[idx].left;
        }
        let idx = self.stack.pop()?;
        let node = &nodes[idx];
        self.cursor = node.right;
        return Some(&node.value);
    }
}

/// Self, left, right.
pub struct PreOrder<'a, T, M> {
    nodes: &'a Arena<Node<T, M>>,
    stack: Stack<NodeIdx>,
}

impl<'a, T, M> PreOrder<'a, T, M> {
    pub(crate) fn new(nodes: &'a Arena<Node<T, M>>, root: Option<NodeIdx>) -> Self {
        return PreOrder {
            nodes,
            stack: root.into_iter().collect(),
        };
    }
}

impl<'a, T, M> Iterator for PreOrder<'a, T, M> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        let idx = self.stack.pop()?;
        let node = &nodes[idx];
        // Right first so left pops first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        return Some(&node.value);
    }
}

/// Left, right, self.
pub struct PostOrder<'a, T, M> {
    nodes: &'a Arena<Node<T, M>>,
    /// `(node, children_pushed)`
    stack: Stack<(NodeIdx, bool)>,
}

impl<'a, T, M> PostOrder<'a, T, M> {
    pub(crate) fn new(nodes: &'a Arena<Node<T, M>>, root: Option<NodeIdx>) -> Self {
        return PostOrder {
            nodes,
            stack: root.map(|idx| (idx, false)).into_iter().collect(),
        };
    }
}

impl<'a, T, M> Iterator for PostOrder<'a, T, M> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        loop {
            let (idx, expanded) = self.stack.pop()?;
            let node = &nodes[idx];
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((idx, true));
            self.stack.extend(node.right.map(|r| (r, false)));
            self.stack.extend(node.left.map(|l| (l, false)));
        }
    }
}

/// Breadth-first, children enqueued left then right.
///
/// Generic over the FIFO collaborator; `VecDeque` unless told otherwise.
pub struct LevelOrder<'a, T, M, Q = VecDeque<NodeIdx>> {
    nodes: &'a Arena<Node<T, M>>,
    queue: Q,
}

impl<'a, T, M, Q> LevelOrder<'a, T, M, Q>
where
    Q: Queue<NodeIdx>,
{
    pub(crate) fn with_queue(nodes: &'a Arena<Node<T, M>>, root: Option<NodeIdx>, mut queue: Q) -> Self {
        // An empty tree enqueues nothing and the walk ends immediately.
        if let Some(root) = root {
            queue.enqueue(root);
        }
        return LevelOrder { nodes, queue };
    }
}

impl<'a, T, M, Q> Iterator for LevelOrder<'a, T, M, Q>
where
    Q: Queue<NodeIdx>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        let idx = self.queue.dequeue().ok()?;
        let node = &nodes[idx];
        if let Some(left) = node.left {
            self.queue.enqueue(left);
        }
        if let Some(right) = node.right {
            self.queue.enqueue(right);
        }
        return Some(&node.value);
    }
}
