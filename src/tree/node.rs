// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The node shape shared by both trees.
//!
//! A node carries its value, a per-tree tag (`Color` for the red-black tree,
//! `()` for the plain BST), owned child links and a non-owning parent link.
//! All links are arena indices.

use super::arena::NodeIdx;
use crate::compare::Side;

/// Red-black node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T, M> {
    pub value: T,
    pub tag: M,
    pub left: Option<NodeIdx>,
    pub right: Option<NodeIdx>,
    /// Back-reference used for upward navigation. Never owns.
    pub parent: Option<NodeIdx>,
}

impl<T, M> Node<T, M> {
    pub fn new(value: T, tag: M, parent: Option<NodeIdx>) -> Node<T, M> {
        return Node {
            value,
            tag,
            left: None,
            right: None,
            parent,
        };
    }

    #[inline(always)]
    pub fn child(&self, side: Side) -> Option<NodeIdx> {
        return match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
    }

    #[inline(always)]
    pub fn set_child(&mut self, side: Side, child: Option<NodeIdx>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline(always)]
    pub fn has_two_children(&self) -> bool {
        return self.left.is_some() && self.right.is_some();
    }
}

/// Optional annotation printed next to a node's value.
pub(crate) trait TagLabel {
    fn label(&self) -> Option<&'static str>;
}

impl TagLabel for () {
    fn label(&self) -> Option<&'static str> {
        return None;
    }
}

impl TagLabel for Color {
    fn label(&self) -> Option<&'static str> {
        return Some(match self {
            Color::Red => "RED",
            Color::Black => "BLACK",
        });
    }
}
