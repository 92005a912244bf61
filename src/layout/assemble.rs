//! Document assembly: classified, ordered fragments into a logical tree.
//!
//! The assembler is a pure function from fully-computed pages to an
//! immutable [`LogicalDocument`] value; there is no shared builder being
//! appended to. Pages that ended up with no fragments are dropped from the
//! output entirely, with a warning that carries the original page index.
//!
//! Output pages are numbered by their position among the surviving pages,
//! not by their source index: a document with content on pages 1 and 3
//! renders "Page 1" and "Page 2". Consumers that need source indices should
//! rely on the warning diagnostics, not on the rendered numbers.

use crate::model::{ClassifiedFragment, LogicalBlock, LogicalDocument, LogicalPage};

/// Build a logical document from per-page fragments.
///
/// Fragments must already be classified and in reading order; the assembler
/// preserves both. Every input fragment contributes exactly one block:
/// nothing is dropped or duplicated below the page level.
pub fn assemble(pages: Vec<Vec<ClassifiedFragment>>) -> LogicalDocument {
    let mut output: Vec<LogicalPage> = Vec::new();

    for (index, fragments) in pages.into_iter().enumerate() {
        let source_page = index + 1;
        if fragments.is_empty() {
            log::warn!("no text found on page {source_page}, dropping it from output");
            continue;
        }

        log::info!(
            "page {} -> output page {} with {} blocks",
            source_page,
            output.len() + 1,
            fragments.len()
        );

        let blocks: Vec<LogicalBlock> = fragments
            .into_iter()
            .map(|f| LogicalBlock::new(f.role, f.fragment.text))
            .collect();
        output.push(LogicalPage::new(output.len() + 1, blocks));
    }

    LogicalDocument::new(output)
}
