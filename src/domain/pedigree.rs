//! Pedigree builder: restrict a forest to one node's ancestor lineage.

use tracing::instrument;

use crate::domain::entities::TreeNode;

/// Build the direct-ancestor lineage of `target_id`.
///
/// Searches the forest depth-first (root order, then children in order) for
/// the first node with the given id, then folds the ancestor path outward:
/// the target keeps its own subtree, each ancestor is copied with the next
/// inner node as its sole child. The returned node is the original top-level
/// ancestor; the single-root guarantee lives in the return type.
///
/// Returns `None` when the forest is empty, the id is empty, or no node
/// matches. The input forest is never mutated.
#[instrument(level = "debug", skip(forest))]
pub fn build_pedigree(forest: &[TreeNode], target_id: &str) -> Option<TreeNode> {
    if forest.is_empty() || target_id.is_empty() {
        return None;
    }

    let path = find_path(forest, target_id)?;

    let mut lineage = (*path.last().expect("path is non-empty")).clone();
    for ancestor in path.iter().rev().skip(1) {
        lineage = TreeNode {
            id: ancestor.id.clone(),
            name: ancestor.name.clone(),
            children: vec![lineage],
        };
    }
    Some(lineage)
}

/// Push/pop traversal recording the path from a root down to the target.
/// At most one path is retained: the first match in document order wins.
fn find_path<'a>(forest: &'a [TreeNode], target_id: &str) -> Option<Vec<&'a TreeNode>> {
    fn visit<'a>(node: &'a TreeNode, target_id: &str, path: &mut Vec<&'a TreeNode>) -> bool {
        path.push(node);
        if node.id == target_id {
            return true;
        }
        for child in &node.children {
            if visit(child, target_id, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    for root in forest {
        if visit(root, target_id, &mut path) {
            return Some(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_prefers_first_match_in_document_order() {
        let forest = vec![
            TreeNode {
                id: "r1".into(),
                name: "First".into(),
                children: vec![TreeNode::new("dup", "In first tree")],
            },
            TreeNode {
                id: "r2".into(),
                name: "Second".into(),
                children: vec![TreeNode::new("dup", "In second tree")],
            },
        ];

        let pedigree = build_pedigree(&forest, "dup").unwrap();
        assert_eq!(pedigree.id, "r1");
        assert_eq!(pedigree.children[0].name, "In first tree");
    }
}
