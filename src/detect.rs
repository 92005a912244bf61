//! Input detection: PDF magic bytes and candidate-file selection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// PDF magic bytes at the start of every PDF file.
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Verify that a byte slice begins with a PDF header.
pub fn check_pdf_bytes(data: &[u8]) -> Result<()> {
    if data.starts_with(PDF_MAGIC) {
        Ok(())
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Verify that the file at `path` begins with a PDF header.
///
/// `read_exact` rather than a single `read`: a short read must not
/// misclassify a valid file. Files shorter than the magic itself cannot be
/// PDFs and report as unknown format, not as an I/O error.
pub fn check_pdf_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut header = [0u8; PDF_MAGIC.len()];
    let mut file = File::open(path)?;
    match file.read_exact(&mut header) {
        Ok(()) => check_pdf_bytes(&header),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(Error::UnknownFormat),
        Err(e) => Err(e.into()),
    }
}

/// Check whether bytes look like a PDF document.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    check_pdf_bytes(data).is_ok()
}

/// Check whether a path carries a `.pdf` extension, case-insensitively.
///
/// This is how the batch driver selects candidate files; the content check
/// happens later, when the file is actually opened.
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}
