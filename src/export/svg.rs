//! SVG export: render a layout scene as a standalone vector document.

use std::fmt::Write as _;

use crate::layout::{Primitive, Scene};

/// The view box never shrinks below this width.
pub const MIN_VIEW_WIDTH: f64 = 800.0;

/// Rendered document height is capped here; the scene keeps its computed
/// height in the view box so tall forests scale instead of clipping.
pub const MAX_RENDER_HEIGHT: f64 = 1200.0;

const FONT_STACK: &str = "system-ui, -apple-system, Segoe UI, Roboto, sans-serif";

/// Render a scene into a self-contained SVG document.
pub fn render_svg(scene: &Scene) -> String {
    let view_width = scene.width.max(MIN_VIEW_WIDTH);
    let render_height = scene.height.min(MAX_RENDER_HEIGHT);

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100%\" height=\"{render_height}\" \
         viewBox=\"0 0 {view_width} {height}\" preserveAspectRatio=\"xMinYMin meet\">",
        height = scene.height,
    );

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Connector {
                x1,
                y1,
                mid_y,
                x2,
                y2,
            } => {
                let _ = writeln!(
                    out,
                    "  <path d=\"M{x1},{y1} V{mid_y} H{x2} V{y2}\" stroke=\"#888\" fill=\"none\" stroke-width=\"1\"/>",
                );
            }
            Primitive::Box {
                x,
                y,
                width,
                height,
            } => {
                let _ = writeln!(
                    out,
                    "  <rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" rx=\"8\" ry=\"8\" \
                     fill=\"#fff\" stroke=\"#444\" stroke-width=\"1.25\"/>",
                );
            }
            Primitive::Label {
                x,
                y,
                lines,
                line_height,
            } => {
                let _ = writeln!(
                    out,
                    "  <text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" font-size=\"12\" fill=\"#111\" \
                     font-family=\"{FONT_STACK}\">",
                );
                for (i, line) in lines.iter().enumerate() {
                    let dy = if i == 0 { 0.0 } else { *line_height };
                    let _ = writeln!(
                        out,
                        "    <tspan x=\"{x}\" dy=\"{dy}\">{}</tspan>",
                        escape_xml(line),
                    );
                }
                out.push_str("  </text>\n");
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_labels() {
        assert_eq!(escape_xml("A <& B>"), "A &lt;&amp; B&gt;");
    }
}
