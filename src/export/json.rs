//! JSON export: direct structural serialization of the forest.

use crate::domain::entities::TreeNode;

/// Pretty-print the forest as a JSON array of `{id, name, children}`
/// records, nothing more.
pub fn to_json(forest: &[TreeNode]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(forest)
}
