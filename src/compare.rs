// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The comparison contract shared by every tree.
//!
//! A comparator is any `Fn(&T, &T) -> Ordering` that is a total order and
//! consistent with equality. The first argument is always the value being
//! inserted or looked up, the second is the value stored in the tree.
//!
//! Routing policy: `Less` goes left, everything else (including `Equal`)
//! goes right. Duplicates therefore always land as right-descendants of
//! their equal predecessor at insertion time.

use std::cmp::Ordering;

/// Comparator used by trees built from `T: Ord` (`Default`, `FromIterator`).
pub type Natural<T> = fn(&T, &T) -> Ordering;

/// The natural comparator, `Ord::cmp`.
pub fn natural<T: Ord>() -> Natural<T> {
    return <T as Ord>::cmp;
}

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other child slot.
    #[inline(always)]
    pub fn opposite(self) -> Side {
        return match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };
    }

    /// Route an incoming value against a stored one. Ties go right.
    #[inline]
    pub fn route<T, C>(compare: &C, item: &T, stored: &T) -> Side
    where
        C: Fn(&T, &T) -> Ordering,
    {
        return match compare(item, stored) {
            Ordering::Less => Side::Left,
            Ordering::Equal | Ordering::Greater => Side::Right,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_route_right() {
        let cmp = natural::<i32>();
        assert_eq!(Side::route(&cmp, &1, &2), Side::Left);
        assert_eq!(Side::route(&cmp, &2, &2), Side::Right);
        assert_eq!(Side::route(&cmp, &3, &2), Side::Right);
    }

    #[test]
    fn opposite_is_involution() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Left.opposite().opposite(), Side::Left);
    }

    #[test]
    fn custom_comparator_reverses_routing() {
        let rev = |a: &i32, b: &i32| b.cmp(a);
        assert_eq!(Side::route(&rev, &1, &2), Side::Right);
        assert_eq!(Side::route(&rev, &3, &2), Side::Left);
    }
}
