// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Ordered binary trees: a plain binary search tree and a red-black tree.
//!
//! # Quick Start
//!
//! ```
//! use ordtree::tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new(|a: &i32, b: &i32| a.cmp(b));
//! for v in [50, 25, 75, 10, 30, 60, 80, 5, 15, 27, 55, 65, 70, 90] {
//!     tree.insert(v);
//! }
//! assert_eq!(
//!     tree.in_order().copied().collect::<Vec<_>>(),
//!     vec![5, 10, 15, 25, 27, 30, 50, 55, 60, 65, 70, 75, 80, 90],
//! );
//!
//! tree.delete(&25).unwrap();
//! assert_eq!(tree.search(&25), None);
//! assert!(tree.delete(&25).is_err());
//! ```
//!
//! # Layout
//!
//! - `tree`: the trees, their shared traversal and validation machinery.
//! - `compare`: the comparator contract and tie-breaking policy.
//! - `queue`: the FIFO capability used by level-order traversal.
//! - `sync`: a reader-writer locked wrapper for sharing a tree.
//! - `config`, `error`: construction parameters and error types.

pub mod compare;
pub mod config;
pub mod error;
pub mod queue;
pub mod sync;
pub mod tree;

pub use error::TreeError;
