// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Structural invariant checks.
//!
//! A violation here is a bug in the tree, not a user error. The trees run
//! these after every mutation when `TreeConfig::check_invariants` is set,
//! and tests call them directly.

use std::cmp::Ordering;

use super::arena::NodeIdx;
use super::node::Color;
use super::raw::RawTree;

/// A broken tree invariant. Depths count from the root at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("root is red")]
    RedRoot,
    #[error("red node at depth {depth} has a red child")]
    RedRedEdge { depth: usize },
    #[error("black heights differ below depth {depth}: left {left}, right {right}")]
    BlackHeight { depth: usize, left: usize, right: usize },
    #[error("in-order sequence decreases at position {position}")]
    OutOfOrder { position: usize },
    #[error("parent link of node at depth {depth} does not point back to its parent")]
    ParentLink { depth: usize },
    #[error("reached {counted} nodes but tree length is {len}")]
    LengthMismatch { counted: usize, len: usize },
}

/// Color rules on top of the plain structural checks.
/// Returns the black-height of the root (nil leaves excluded, root included).
pub(crate) fn check_red_black<T, C>(tree: &RawTree<T, Color, C>) -> Result<usize, InvariantViolation>
where
    C: Fn(&T, &T) -> Ordering,
{
    tree.check_structure()?;
    let Some(root) = tree.root else {
        return Ok(0);
    };
    if tree.nodes[root].tag == Color::Red {
        return Err(InvariantViolation::RedRoot);
    }
    return black_height(tree, Some(root), 0);
}

fn black_height<T, C>(
    tree: &RawTree<T, Color, C>,
    idx: Option<NodeIdx>,
    depth: usize,
) -> Result<usize, InvariantViolation> {
    let Some(idx) = idx else {
        return Ok(0);
    };
    let node = &tree.nodes[idx];
    if node.tag == Color::Red {
        for child in [node.left, node.right].into_iter().flatten() {
            if tree.nodes[child].tag == Color::Red {
                return Err(InvariantViolation::RedRedEdge { depth });
            }
        }
    }

    let left = black_height(tree, node.left, depth + 1)?;
    let right = black_height(tree, node.right, depth + 1)?;
    if left != right {
        return Err(InvariantViolation::BlackHeight { depth, left, right });
    }
    let own = if node.tag == Color::Black { 1 } else { 0 };
    return Ok(left + own);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::natural;
    use crate::config::TreeConfig;

    fn colored(values: &[(i32, Color)]) -> RawTree<i32, Color, fn(&i32, &i32) -> Ordering> {
        let mut tree = RawTree::new(natural::<i32>(), TreeConfig::default());
        for &(v, c) in values {
            tree.attach(v, c);
        }
        return tree;
    }

    #[test]
    fn empty_tree_is_valid() {
        assert_eq!(check_red_black(&colored(&[])), Ok(0));
    }

    #[test]
    fn balanced_tree_reports_black_height() {
        let tree = colored(&[(2, Color::Black), (1, Color::Red), (3, Color::Red)]);
        assert_eq!(check_red_black(&tree), Ok(1));
    }

    #[test]
    fn red_root_is_rejected() {
        let tree = colored(&[(2, Color::Red)]);
        assert_eq!(check_red_black(&tree), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn red_red_edge_is_rejected() {
        let tree = colored(&[
            (2, Color::Black),
            (1, Color::Black),
            (4, Color::Red),
            (5, Color::Red),
        ]);
        assert_eq!(check_red_black(&tree), Err(InvariantViolation::RedRedEdge { depth: 1 }));
    }

    #[test]
    fn uneven_black_height_is_rejected() {
        let tree = colored(&[(2, Color::Black), (1, Color::Black)]);
        assert_eq!(
            check_red_black(&tree),
            Err(InvariantViolation::BlackHeight { depth: 0, left: 1, right: 0 })
        );
    }
}
