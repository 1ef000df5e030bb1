//! Indentation parser: TreeDown text into a forest.
//!
//! One tab at line start = one level; every 4 leading spaces = one level.
//! Blank lines are skipped, labels are trimmed, and lines whose depth has no
//! parent are demoted to new roots instead of failing the parse.

use tracing::{debug, instrument};

use crate::domain::entities::{Forest, TreeNode};

/// Leading spaces per indentation level.
pub const SPACES_PER_LEVEL: usize = 4;

/// Parse TreeDown text into a forest.
///
/// Ids are assigned sequentially in document order (`n-0`, `n-1`, ...) from a
/// counter local to this call, so parsing the same text twice yields
/// identical ids. Never fails: malformed indentation is recovered by
/// demoting the orphaned line to a top-level root.
#[instrument(level = "debug", skip(text))]
pub fn parse(text: &str) -> Forest {
    let text = normalize(text);

    let mut roots: Forest = Vec::new();
    // Path from the current root down to the most recent node. Nodes are
    // attached to their parent when popped, which preserves sibling order.
    let mut stack: Vec<TreeNode> = Vec::new();
    let mut next_id = 0usize;

    for raw in text.split('\n') {
        if raw.trim().is_empty() {
            continue;
        }

        let (depth, label_start) = measure_indent(raw);
        let node = TreeNode::new(format!("n-{next_id}"), &raw[label_start..]);
        next_id += 1;

        if depth == 0 {
            close_to(&mut stack, &mut roots, 0);
        } else if depth <= stack.len() {
            // A line at depth D closes out everything at D and deeper;
            // its parent is then the node at D-1.
            close_to(&mut stack, &mut roots, depth);
        } else {
            // No ancestor at depth-1: orphaned deep line, demote to root.
            debug!(depth, name = %node.name, "demoting orphaned line to root");
            close_to(&mut stack, &mut roots, 0);
        }
        stack.push(node);
    }

    close_to(&mut stack, &mut roots, 0);
    roots
}

/// Pop the path stack down to `keep` entries, attaching each popped node to
/// the node above it (or to the root list when the stack empties).
fn close_to(stack: &mut Vec<TreeNode>, roots: &mut Forest, keep: usize) {
    while stack.len() > keep {
        let Some(node) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}

/// Strip a UTF-8 BOM and normalize CRLF / CR newlines to LF.
fn normalize(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Count leading tabs, then one contiguous space run, and convert to
/// indentation levels. Returns `(levels, byte offset of the label)`.
fn measure_indent(line: &str) -> (usize, usize) {
    let bytes = line.as_bytes();
    let mut i = 0;
    let mut tabs = 0;
    let mut spaces = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\t' => {
                tabs += 1;
                i += 1;
            }
            b' ' => {
                // count contiguous spaces, then stop the scan
                while i < bytes.len() && bytes[i] == b' ' {
                    spaces += 1;
                    i += 1;
                }
                break;
            }
            _ => break,
        }
    }

    (tabs + spaces / SPACES_PER_LEVEL, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_tabs_and_space_runs() {
        assert_eq!(measure_indent("name"), (0, 0));
        assert_eq!(measure_indent("\tname"), (1, 1));
        assert_eq!(measure_indent("\t\tname"), (2, 2));
        assert_eq!(measure_indent("    name"), (1, 4));
        assert_eq!(measure_indent("     name"), (1, 5)); // remainder discarded
        assert_eq!(measure_indent("\t    name"), (2, 5)); // tab + 4 spaces
        assert_eq!(measure_indent("  name"), (0, 2));
    }

    #[test]
    fn id_counter_is_local_to_each_call() {
        let first = parse("A\n\tB");
        let second = parse("A\n\tB");
        assert_eq!(first, second);
        assert_eq!(first[0].id, "n-0");
        assert_eq!(first[0].children[0].id, "n-1");
    }
}
