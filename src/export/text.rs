//! Text serializer: forest back into TreeDown indentation text.
//!
//! Emits 4-space indentation rather than tabs so exported files stay
//! portable; the parser reads a run of 4 spaces as one level, so the
//! round-trip reconstructs the identical shape.

use crate::domain::entities::{normalize_name, TreeNode};
use crate::domain::parser::SPACES_PER_LEVEL;

/// Serialize a forest to TreeDown text: pre-order, one line per node,
/// `\n`-joined with no trailing newline. Empty input yields an empty string.
pub fn to_text(forest: &[TreeNode]) -> String {
    let mut lines = Vec::new();
    walk(forest, 0, &mut lines);
    lines.join("\n")
}

fn walk(nodes: &[TreeNode], depth: usize, lines: &mut Vec<String>) {
    let indent = " ".repeat(SPACES_PER_LEVEL * depth);
    for node in nodes {
        lines.push(format!("{indent}{}", normalize_name(&node.name)));
        walk(&node.children, depth + 1, lines);
    }
}
