//! Deterministic diagram layout.
//!
//! Three passes over a private annotated copy of the forest: per-node box
//! measurement (with label wrapping), bottom-up subtree sizing, top-down
//! position assignment. Emits drawing primitives plus canvas bounds; the
//! caller's forest is never touched.

pub mod wrap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::entities::TreeNode;
use self::wrap::wrap_text;

/// Horizontal gap between independent trees of a forest.
pub const TREE_GAP: f64 = 40.0;

/// Canvas reported for an empty forest.
pub const EMPTY_WIDTH: f64 = 800.0;
pub const EMPTY_HEIGHT: f64 = 200.0;

/// Geometry tunables. All fields have defaults; the config layer exposes
/// them under `[layout]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Vertical distance between a node and its children row
    pub level_gap: f64,
    /// Horizontal distance between adjacent subtrees
    pub sibling_gap: f64,
    /// Wrap width for labels, in characters
    pub max_chars_per_line: usize,
    /// Assumed average glyph width in px
    pub char_px: f64,
    pub line_height: f64,
    /// Box interior padding
    pub padding_x: f64,
    pub padding_y: f64,
    pub min_box_width: f64,
    pub min_box_height: f64,
    /// Outer canvas margin
    pub margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            level_gap: 60.0,
            sibling_gap: 24.0,
            max_chars_per_line: 24,
            char_px: 7.2,
            line_height: 16.0,
            padding_x: 10.0,
            padding_y: 8.0,
            min_box_width: 120.0,
            min_box_height: 36.0,
            margin: 24.0,
        }
    }
}

/// A drawable shape. Connectors come first in a `Scene` (paint order), then
/// each node's box and label in pre-order.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Node box at its absolute origin.
    Box {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Wrapped label lines; `x` is the box's horizontal center, `y` the
    /// first baseline, successive lines `line_height` apart.
    Label {
        x: f64,
        y: f64,
        lines: Vec<String>,
        line_height: f64,
    },
    /// Orthogonal elbow from the bottom-center of a parent box to the
    /// top-center of a child box: vertical to `mid_y`, horizontal, vertical.
    Connector {
        x1: f64,
        y1: f64,
        mid_y: f64,
        x2: f64,
        y2: f64,
    },
}

/// Layout result: primitives in paint order plus computed canvas bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
    pub width: f64,
    pub height: f64,
}

/// Per-node geometry, built from a borrowed forest so the caller's nodes
/// stay untouched.
struct LayoutNode {
    lines: Vec<String>,
    width: f64,
    height: f64,
    subtree_width: f64,
    subtree_height: f64,
    x: f64,
    y: f64,
    children: Vec<LayoutNode>,
}

/// Compute the diagram layout for a forest.
///
/// Deterministic: identical forest and config produce an identical scene.
#[instrument(level = "debug", skip(forest, config))]
pub fn layout(forest: &[TreeNode], config: &LayoutConfig) -> Scene {
    if forest.is_empty() {
        return Scene {
            primitives: Vec::new(),
            width: EMPTY_WIDTH,
            height: EMPTY_HEIGHT,
        };
    }

    let mut roots: Vec<LayoutNode> = forest.iter().map(|root| measure(root, config)).collect();

    // Roots go left-to-right, each starting at the outer margin's top.
    let mut cursor_x = config.margin;
    let mut max_bottom = 0.0f64;
    for root in &mut roots {
        assign_positions(root, cursor_x, config.margin, config);
        cursor_x += root.subtree_width + TREE_GAP;
        max_bottom = max_bottom.max(root.y + root.subtree_height);
    }

    let mut primitives = Vec::new();
    for root in &roots {
        emit_connectors(root, &mut primitives);
    }
    for root in &roots {
        emit_node(root, config, &mut primitives);
    }

    Scene {
        primitives,
        width: cursor_x + config.margin - TREE_GAP,
        height: max_bottom + config.margin,
    }
}

/// Pass 1+2: wrap the label, measure the box, and size subtrees bottom-up.
fn measure(node: &TreeNode, config: &LayoutConfig) -> LayoutNode {
    let lines = wrap_text(&node.name, config.max_chars_per_line);
    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(1)
        .max(1);
    let width = config
        .min_box_width
        .max(longest as f64 * config.char_px + 2.0 * config.padding_x);
    let height = config
        .min_box_height
        .max(lines.len() as f64 * config.line_height + 2.0 * config.padding_y);

    let children: Vec<LayoutNode> = node
        .children
        .iter()
        .map(|child| measure(child, config))
        .collect();

    let (subtree_width, subtree_height) = if children.is_empty() {
        (width, height)
    } else {
        let row = children_row_width(&children, config);
        let tallest = children
            .iter()
            .map(|child| child.subtree_height)
            .fold(0.0, f64::max);
        (width.max(row), height + config.level_gap + tallest)
    };

    LayoutNode {
        lines,
        width,
        height,
        subtree_width,
        subtree_height,
        x: 0.0,
        y: 0.0,
        children,
    }
}

fn children_row_width(children: &[LayoutNode], config: &LayoutConfig) -> f64 {
    children
        .iter()
        .map(|child| child.subtree_width)
        .sum::<f64>()
        + config.sibling_gap * (children.len() - 1) as f64
}

/// Pass 3: place each box inside its allotted span, centering parents over
/// the combined children row and leaves within their own span.
fn assign_positions(node: &mut LayoutNode, left_x: f64, top_y: f64, config: &LayoutConfig) {
    node.x = left_x + (node.subtree_width - node.width) / 2.0;
    node.y = top_y;

    if node.children.is_empty() {
        return;
    }

    let row = children_row_width(&node.children, config);
    let mut child_x = left_x + (node.subtree_width - row) / 2.0;
    let child_y = top_y + node.height + config.level_gap;
    for child in &mut node.children {
        assign_positions(child, child_x, child_y, config);
        child_x += child.subtree_width + config.sibling_gap;
    }
}

fn emit_connectors(node: &LayoutNode, out: &mut Vec<Primitive>) {
    for child in &node.children {
        let x1 = node.x + node.width / 2.0;
        let y1 = node.y + node.height;
        let x2 = child.x + child.width / 2.0;
        let y2 = child.y;
        out.push(Primitive::Connector {
            x1,
            y1,
            mid_y: (y1 + y2) / 2.0,
            x2,
            y2,
        });
        emit_connectors(child, out);
    }
}

fn emit_node(node: &LayoutNode, config: &LayoutConfig, out: &mut Vec<Primitive>) {
    out.push(Primitive::Box {
        x: node.x,
        y: node.y,
        width: node.width,
        height: node.height,
    });
    out.push(Primitive::Label {
        x: node.x + node.width / 2.0,
        y: node.y + config.padding_y + config.line_height,
        lines: node.lines.clone(),
        line_height: config.line_height,
    });
    for child in &node.children {
        emit_node(child, config, out);
    }
}
