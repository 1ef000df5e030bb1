//! treedown: the parsing, pedigree, layout, and export core of a
//! family-tree editor.
//!
//! Pipeline: raw TreeDown text → [`domain::parse`] → forest →
//! ([`domain::build_pedigree`]) → [`export::to_text`] / [`layout::layout`] /
//! [`export::to_json`] / [`export::to_static_html`] / [`export::render_svg`].
//!
//! All core operations are pure, synchronous functions: no I/O, no shared
//! state between calls, permissive recovery instead of errors.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod export;
pub mod layout;
pub mod util;
