//! A minimal HTML element tree with a pretty-printing serializer.
//!
//! The HTML renderer builds a tree of [`Element`] values and serializes it
//! in one pass. Text content and attribute values are escaped with
//! `html-escape`; indentation is two spaces per depth, with elements whose
//! only child is text kept on a single line.

use std::fmt::Write;

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["meta", "br", "hr", "img", "link"];

/// A node in the tree: an element or a run of text.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with classes, attributes, and children.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a class.
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Append an element child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Serialize the tree rooted at this element.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out, 0);
        out
    }

    fn open_tag(&self) -> String {
        let mut tag = format!("<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(
                tag,
                " class=\"{}\"",
                html_escape::encode_double_quoted_attribute(&self.classes.join(" "))
            );
        }
        for (name, value) in &self.attrs {
            let _ = write!(
                tag,
                " {}=\"{}\"",
                name,
                html_escape::encode_double_quoted_attribute(value)
            );
        }
        tag.push('>');
        tag
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push_str(&self.open_tag());

        if VOID_TAGS.contains(&self.tag.as_str()) {
            out.push('\n');
            return;
        }

        // A lone text child stays on one line; anything else gets a block
        // layout with indented children.
        match self.children.as_slice() {
            [] => {}
            [Node::Text(text)] => {
                out.push_str(&html_escape::encode_text(text));
            }
            children => {
                out.push('\n');
                for node in children {
                    match node {
                        Node::Element(el) => el.write_into(out, depth + 1),
                        Node::Text(text) => {
                            out.push_str(&"  ".repeat(depth + 1));
                            out.push_str(&html_escape::encode_text(text));
                            out.push('\n');
                        }
                    }
                }
                out.push_str(&indent);
            }
        }

        out.push_str(&format!("</{}>", self.tag));
        out.push('\n');
    }
}
