//! Export formatters: TreeDown text, JSON, static HTML viewer, SVG diagram.

pub mod html;
pub mod json;
pub mod svg;
pub mod text;

pub use html::to_static_html;
pub use json::to_json;
pub use svg::render_svg;
pub use text::to_text;
