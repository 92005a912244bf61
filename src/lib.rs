//! # pdf2html
//!
//! Converts PDF documents into structured HTML, preserving reading order
//! and coarse visual semantics (headers, footers, body text) without
//! reproducing the original visual layout.
//!
//! The interesting part is page-layout reconstruction: a PDF page yields an
//! unordered set of absolutely-positioned text fragments, and this crate
//! recovers their top-to-bottom reading order and assigns each a semantic
//! role using geometric and lexical heuristics alone. PDF decoding is
//! delegated to `lopdf`; HTML serialization to a small element-tree
//! pretty-printer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> pdf2html::Result<()> {
//!     // Convert every PDF in a directory
//!     let summary = pdf2html::convert_dir(Path::new("input"), Path::new("html_output"))?;
//!     println!("{} converted, {} failed", summary.converted(), summary.failed());
//!
//!     // Or drive the pipeline for one document
//!     let doc = pdf2html::extract_document(Path::new("report.pdf"))?;
//!     let html = pdf2html::render::to_html(&doc)?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```
//!
//! ## Behavioral notes
//!
//! Two behaviors are intentional and relied upon by downstream consumers:
//!
//! - Pages without text are dropped from the output and remaining pages are
//!   renumbered sequentially, so rendered page numbers need not match
//!   source page indices (a warning diagnostic carries the original index).
//! - The header heuristic treats text with no alphabetic characters as
//!   vacuously all-uppercase, so short symbol or digit strings classify as
//!   headers.
//!
//! ## Known limitations
//!
//! Reading order is a single-axis sort by vertical position. Multi-column
//! layouts interleave; column detection is out of scope.

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::{
    convert_bytes, convert_dir, convert_dir_with, convert_file, extract_document,
    extract_document_bytes, BatchSummary, FileReport, FileStatus, Outcome,
};
pub use error::{Error, Result};
pub use model::{
    ClassifiedFragment, LogicalBlock, LogicalDocument, LogicalPage, Role, TextFragment,
};
