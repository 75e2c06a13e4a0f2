// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Sideways tree diagrams for debugging.

use std::fmt;

use super::arena::Arena;
use super::arena::NodeIdx;
use super::node::Node;
use super::node::TagLabel;

/// Write one line per node, children indented under their parent:
///
/// ```text
/// R----20 (BLACK)
///      L----10 (RED)
///      R----30 (RED)
/// ```
pub(crate) fn render<T, M>(
    f: &mut fmt::Formatter<'_>,
    nodes: &Arena<Node<T, M>>,
    root: Option<NodeIdx>,
) -> fmt::Result
where
    T: fmt::Display,
    M: TagLabel,
{
    let mut indent = String::new();
    // `(node, indent length, last)`, walked pre-order. A node's children
    // share its indent prefix, so truncating to the recorded length
    // restores the right prefix even after a deeper sibling subtree.
    let mut stack: Vec<(NodeIdx, usize, bool)> = root.map(|r| (r, 0, true)).into_iter().collect();
    while let Some((idx, depth, last)) = stack.pop() {
        indent.truncate(depth);
        let node = &nodes[idx];
        let mark = if last { "R----" } else { "L----" };
        write!(f, "{indent}{mark}{}", node.value)?;
        match node.tag.label() {
            Some(label) => writeln!(f, " ({label})")?,
            None => writeln!(f)?,
        }

        indent.push_str(if last { "     " } else { "|    " });
        // Right first so left pops first.
        stack.extend(node.right.map(|r| (r, indent.len(), true)));
        stack.extend(node.left.map(|l| (l, indent.len(), false)));
    }
    return Ok(());
}
