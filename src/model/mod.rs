//! Document model types.
//!
//! Two layers of intermediate representation bridge extraction and
//! rendering: positioned [`TextFragment`]s as pulled out of a page, and the
//! [`LogicalDocument`] tree where exact coordinates have been discarded in
//! favor of reading order and semantic roles.

mod document;
mod fragment;

pub use document::{LogicalBlock, LogicalDocument, LogicalPage};
pub use fragment::{ClassifiedFragment, Role, TextFragment};
