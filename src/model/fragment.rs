//! Positioned text fragments and their semantic roles.

use serde::{Deserialize, Serialize};

/// A unit of extracted text with its bounding-box geometry.
///
/// Coordinates are in page space with a lower-left origin, so larger `y`
/// means higher on the page. Fragments are produced once per extraction
/// pass and never modified afterward; whitespace-only text is filtered out
/// before a fragment is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFragment {
    /// Text content, trimmed, never empty.
    pub text: String,

    /// X coordinate of the lower-left corner.
    pub x: f32,

    /// Y coordinate of the lower-left corner.
    pub y: f32,

    /// Width of the bounding box.
    pub width: f32,

    /// Height of the bounding box.
    pub height: f32,
}

impl TextFragment {
    /// Create a new fragment.
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
        }
    }
}

/// Semantic role of a fragment, derived purely from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Short all-caps text, e.g. a section or page header.
    Header,
    /// Short all-digit text, e.g. a page number.
    Footer,
    /// Everything else.
    Body,
}

/// A fragment with its assigned role.
///
/// The role is computed before (and independent of) reading-order sorting
/// and is never re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedFragment {
    /// The underlying fragment.
    pub fragment: TextFragment,

    /// Role derived from the fragment text.
    pub role: Role,
}

impl ClassifiedFragment {
    /// Pair a fragment with a role.
    pub fn new(fragment: TextFragment, role: Role) -> Self {
        Self { fragment, role }
    }

    /// Text content of the underlying fragment.
    pub fn text(&self) -> &str {
        &self.fragment.text
    }

    /// Vertical position of the underlying fragment.
    pub fn y(&self) -> f32 {
        self.fragment.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_new() {
        let frag = TextFragment::new("INTRODUCTION", 72.0, 700.0, 120.0, 14.0);
        assert_eq!(frag.text, "INTRODUCTION");
        assert_eq!(frag.y, 700.0);
    }

    #[test]
    fn test_classified_fragment_accessors() {
        let frag = TextFragment::new("42", 300.0, 30.0, 12.0, 10.0);
        let classified = ClassifiedFragment::new(frag, Role::Footer);
        assert_eq!(classified.text(), "42");
        assert_eq!(classified.y(), 30.0);
        assert_eq!(classified.role, Role::Footer);
    }
}
