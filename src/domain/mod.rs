//! Domain layer: tree entities and pure tree algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod parser;
pub mod pedigree;

pub use entities::{find_node, forest_depth, node_count, Forest, TreeNode, UNNAMED};
pub use parser::parse;
pub use pedigree::build_pedigree;
