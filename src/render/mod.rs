//! Rendering module: logical document tree to output text.

mod html;
mod json;
mod tree;

pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use tree::{Element, Node};
