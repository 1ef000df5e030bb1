//! Tests for the JSON, HTML, and SVG export formatters

use treedown::domain::{parse, TreeNode};
use treedown::export::{render_svg, to_json, to_static_html};
use treedown::layout::{layout, LayoutConfig, Scene};

// ============================================================
// JSON Export
// ============================================================

#[test]
fn given_single_node_when_exporting_json_then_output_is_exact() {
    let forest = vec![TreeNode::new("n-0", "A")];

    let json = to_json(&forest).unwrap();

    assert_eq!(
        json,
        "[\n  {\n    \"id\": \"n-0\",\n    \"name\": \"A\",\n    \"children\": []\n  }\n]"
    );
}

#[test]
fn given_nested_forest_when_exporting_json_then_structure_round_trips() {
    let forest = parse("Parent\n\tChild A\n\t\tGrandchild A1\n\tChild B");

    let json = to_json(&forest).unwrap();
    let back: Vec<TreeNode> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, forest);
}

#[test]
fn given_empty_forest_when_exporting_json_then_empty_array() {
    assert_eq!(to_json(&[]).unwrap(), "[]");
}

// ============================================================
// HTML Export
// ============================================================

#[test]
fn given_forest_when_exporting_html_then_document_is_self_contained() {
    let html = to_static_html(&parse("A\n\tB"));

    assert!(html.starts_with("<!doctype html>"));
    // no external scripts, styles, or network references
    assert!(!html.contains("src="));
    assert!(!html.contains("href="));
    assert!(!html.contains("http"));
}

#[test]
fn given_forest_when_exporting_html_then_viewer_state_machine_is_embedded() {
    let html = to_static_html(&parse("A\n\tB"));

    // data literal
    assert!(html.contains("const ROOTS = [{"));
    // expand/collapse + focus/unfocus machinery
    assert!(html.contains("let focusedId = null;"));
    assert!(html.contains("function visibleForest()"));
    assert!(html.contains("function renderNode(node, level, idx)"));
    assert!(html.contains("el.expandAll.onclick"));
    assert!(html.contains("el.collapseAll.onclick"));
    assert!(html.contains("el.unfocus.onclick"));
}

#[test]
fn given_markup_in_names_when_exporting_html_then_data_is_entity_escaped() {
    let forest = vec![TreeNode::new("n-0", "Ada </script> & <b>Bob</b>")];

    let html = to_static_html(&forest);

    assert!(!html.contains("</script> &"));
    assert!(html.contains("&lt;/script&gt; &amp; &lt;b&gt;Bob&lt;/b&gt;"));
}

// ============================================================
// SVG Export
// ============================================================

#[test]
fn given_laid_out_forest_when_rendering_svg_then_shapes_appear() {
    let scene = layout(&parse("P\n\tA\n\tB"), &LayoutConfig::default());

    let svg = render_svg(&scene);

    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    assert_eq!(svg.matches("<rect ").count(), 3);
    assert_eq!(svg.matches("<path ").count(), 2);
    assert_eq!(svg.matches("<tspan ").count(), 3);
    // orthogonal elbow, never a diagonal line
    assert!(svg.contains("d=\"M156,60 V90 H84 V120\""));
}

#[test]
fn given_narrow_scene_when_rendering_svg_then_view_width_is_floored() {
    let scene = layout(&parse("A"), &LayoutConfig::default());

    let svg = render_svg(&scene);

    assert!(svg.contains("viewBox=\"0 0 800 84\""));
}

#[test]
fn given_tall_scene_when_rendering_svg_then_render_height_is_capped() {
    let scene = Scene {
        primitives: Vec::new(),
        width: 100.0,
        height: 5000.0,
    };

    let svg = render_svg(&scene);

    // the document caps its height, the view box keeps the computed value
    assert!(svg.contains("height=\"1200\""));
    assert!(svg.contains("viewBox=\"0 0 800 5000\""));
}

#[test]
fn given_markup_in_labels_when_rendering_svg_then_text_is_escaped() {
    let scene = layout(&parse("A <& B>"), &LayoutConfig::default());

    let svg = render_svg(&scene);

    assert!(svg.contains("A &lt;&amp; B&gt;"));
}

// ============================================================
// Non-Mutation
// ============================================================

#[test]
fn given_any_export_when_done_then_input_forest_is_unchanged() {
    let forest = parse("P\n\tA\n\tB");
    let snapshot = forest.clone();

    let _ = to_json(&forest);
    let _ = to_static_html(&forest);
    let _ = render_svg(&layout(&forest, &LayoutConfig::default()));

    assert_eq!(forest, snapshot);
}
