//! The logical document tree handed to the renderer.
//!
//! Past this point exact coordinates are gone: a block is positioned only
//! by its rank within its page, and a page only by its rank within the
//! document.

use super::Role;
use serde::{Deserialize, Serialize};

/// One fragment's contribution to the output tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalBlock {
    /// Role carried over from classification.
    pub role: Role,

    /// Text content.
    pub text: String,
}

impl LogicalBlock {
    /// Create a new block.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// An ordered sequence of blocks with its output page number.
///
/// `number` is the page's 1-based position among OUTPUT pages, which differs
/// from the source index when empty pages were dropped. See
/// [`assemble`](crate::layout::assemble) for how numbers are assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalPage {
    /// 1-based position in the output document.
    pub number: usize,

    /// Blocks in reading order.
    pub blocks: Vec<LogicalBlock>,
}

impl LogicalPage {
    /// Create a page from blocks already in reading order.
    pub fn new(number: usize, blocks: Vec<LogicalBlock>) -> Self {
        Self { number, blocks }
    }

    /// Number of blocks on this page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// Root of the tree handed to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogicalDocument {
    /// Pages in output order.
    pub pages: Vec<LogicalPage>,
}

impl LogicalDocument {
    /// Create a document from fully-computed pages.
    pub fn new(pages: Vec<LogicalPage>) -> Self {
        Self { pages }
    }

    /// Number of output pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the document has any content at all.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of blocks across all pages.
    pub fn block_count(&self) -> usize {
        self.pages.iter().map(|p| p.blocks.len()).sum()
    }
}
