//! Fragment extraction: PDF bytes in, positioned text fragments out.

mod backend;
mod fragments;

pub use backend::{decode_text_simple, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue};
pub use fragments::FragmentExtractor;
