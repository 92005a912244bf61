//! Page-layout reconstruction: the core of the pipeline.
//!
//! Three stages, strictly sequential:
//! 1. [`classify`]: assign each fragment a semantic role from its text;
//! 2. [`order_classified`]: stable sort into top-to-bottom reading order;
//! 3. [`assemble`]: build the immutable logical tree, dropping empty pages.
//!
//! Classification is independent of ordering and is never re-derived after
//! the sort.

mod assemble;
mod classify;
mod order;

pub use assemble::assemble;
pub use classify::{classify, classify_page};
pub use order::{order_classified, order_fragments};

use crate::model::{LogicalDocument, TextFragment};

/// Run the full layout reconstruction over extracted pages.
pub fn reconstruct(pages: Vec<Vec<TextFragment>>) -> LogicalDocument {
    let classified = pages
        .into_iter()
        .map(|fragments| {
            let mut page = classify_page(fragments);
            order_classified(&mut page);
            page
        })
        .collect();
    assemble(classified)
}
