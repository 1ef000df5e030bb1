//! Domain entities: the canonical tree node and forest helpers.

use serde::{Deserialize, Serialize};
use termtree::Tree;

/// Placeholder label for nodes whose name is empty or whitespace-only.
pub const UNNAMED: &str = "(unnamed)";

/// A single person entry in the family tree.
///
/// `children` is always present, even for leaves, and preserves document
/// order. Ids are unique within one parse pass; they are not stable across
/// re-parses of edited text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

/// Ordered sequence of root-level nodes.
pub type Forest = Vec<TreeNode>;

impl TreeNode {
    /// Create a node with a normalized name and no children.
    pub fn new(id: impl Into<String>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: normalize_name(name),
            children: Vec::new(),
        }
    }

    /// Depth of the subtree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes in the subtree rooted here, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// First node in the subtree (pre-order) with the given id.
    pub fn find(&self, id: &str) -> Option<&TreeNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Convert to a `termtree` tree for terminal display.
    pub fn to_display_tree(&self, show_ids: bool) -> Tree<String> {
        let label = if show_ids {
            format!("{} [{}]", self.name, self.id)
        } else {
            self.name.clone()
        };
        let leaves: Vec<_> = self
            .children
            .iter()
            .map(|child| child.to_display_tree(show_ids))
            .collect();
        Tree::new(label).with_leaves(leaves)
    }
}

/// First node in the forest (root order, pre-order within each root)
/// with the given id.
pub fn find_node<'a>(forest: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    forest.iter().find_map(|root| root.find(id))
}

/// Total node count over all roots.
pub fn node_count(forest: &[TreeNode]) -> usize {
    forest.iter().map(TreeNode::node_count).sum()
}

/// Maximum depth over all roots; an empty forest has depth 0.
pub fn forest_depth(forest: &[TreeNode]) -> usize {
    forest.iter().map(TreeNode::depth).max().unwrap_or(0)
}

/// Trim a raw label, substituting the `(unnamed)` placeholder when nothing
/// remains.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNNAMED.to_string()
    } else {
        trimmed.to_string()
    }
}
