//! Conversion pipeline and batch driver.
//!
//! The single-document pipeline is strictly sequential: extract, classify,
//! order, assemble, render, write. The batch driver runs independent files
//! in parallel with rayon; documents share no mutable state, so there is
//! no ordering requirement between them. One file's failure is caught,
//! logged, and reported; the batch always continues.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::detect;
use crate::error::Result;
use crate::extract::FragmentExtractor;
use crate::layout;
use crate::model::LogicalDocument;
use crate::render;

/// Outcome of converting a single document.
#[derive(Debug)]
pub enum Outcome {
    /// HTML written to `path`.
    Written { path: PathBuf, bytes: usize },
    /// Extraction succeeded but the document contains no text; nothing was
    /// written. This is a no-op with a warning, not an error.
    NoText,
}

/// Extract a PDF file into its logical document tree.
pub fn extract_document(path: &Path) -> Result<LogicalDocument> {
    detect::check_pdf_file(path)?;
    let extractor = FragmentExtractor::open(path)?;
    let pages = extractor.extract()?;
    log::info!("{}: found {} pages", path.display(), pages.len());
    Ok(layout::reconstruct(pages))
}

/// Extract a PDF from bytes into its logical document tree.
pub fn extract_document_bytes(data: &[u8]) -> Result<LogicalDocument> {
    detect::check_pdf_bytes(data)?;
    let extractor = FragmentExtractor::from_bytes(data)?;
    let pages = extractor.extract()?;
    log::info!("found {} pages", pages.len());
    Ok(layout::reconstruct(pages))
}

/// Convert PDF bytes to an HTML string.
///
/// Returns `Ok(None)` when the document yields no text at all.
pub fn convert_bytes(data: &[u8]) -> Result<Option<String>> {
    let doc = extract_document_bytes(data)?;
    if doc.is_empty() {
        log::warn!("no text content extracted");
        return Ok(None);
    }
    render::to_html(&doc).map(Some)
}

/// Convert one PDF file, writing `<output_dir>/<stem>.html`.
///
/// The output directory is created if absent. An existing output file is
/// silently overwritten.
pub fn convert_file(input: &Path, output_dir: &Path) -> Result<Outcome> {
    let doc = extract_document(input)?;
    if doc.is_empty() {
        log::warn!(
            "{}: no text content extracted, skipping output",
            input.display()
        );
        return Ok(Outcome::NoText);
    }

    let html = render::to_html(&doc)?;

    fs::create_dir_all(output_dir)?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let path = output_dir.join(format!("{stem}.html"));
    fs::write(&path, &html)?;

    log::info!("wrote {} bytes to {}", html.len(), path.display());
    Ok(Outcome::Written {
        path,
        bytes: html.len(),
    })
}

/// Status of one file within a batch run.
#[derive(Debug)]
pub enum FileStatus {
    /// HTML output written.
    Converted { output: PathBuf, bytes: usize },
    /// Document had no text; no output written.
    Empty,
    /// Conversion failed; the rest of the batch was unaffected.
    Failed(String),
}

/// Report for one file within a batch run.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub status: FileStatus,
}

/// Summary of a batch run over a directory.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<FileReport>,
}

impl BatchSummary {
    /// Number of files converted to HTML.
    pub fn converted(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Converted { .. }))
    }

    /// Number of files skipped for having no text.
    pub fn empty(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Empty))
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.status)).count()
    }
}

/// List the candidate PDF files in a directory, sorted by name.
///
/// Candidates are regular files with a case-insensitive `.pdf` extension;
/// anything else is ignored.
pub fn pdf_candidates(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut candidates: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && detect::has_pdf_extension(path))
        .collect();
    candidates.sort();
    Ok(candidates)
}

/// Convert every candidate PDF in `input_dir` into `output_dir`.
pub fn convert_dir(input_dir: &Path, output_dir: &Path) -> Result<BatchSummary> {
    convert_dir_with(input_dir, output_dir, |_| {})
}

/// Like [`convert_dir`], invoking `observer` as each file finishes.
///
/// Files run in parallel; the observer must tolerate arbitrary completion
/// order. Reports in the returned summary keep candidate (name) order.
pub fn convert_dir_with<F>(input_dir: &Path, output_dir: &Path, observer: F) -> Result<BatchSummary>
where
    F: Fn(&FileReport) + Sync,
{
    let candidates = pdf_candidates(input_dir)?;
    fs::create_dir_all(output_dir)?;

    let reports: Vec<FileReport> = candidates
        .par_iter()
        .map(|input| {
            let status = match convert_file(input, output_dir) {
                Ok(Outcome::Written { path, bytes }) => FileStatus::Converted {
                    output: path,
                    bytes,
                },
                Ok(Outcome::NoText) => FileStatus::Empty,
                Err(e) => {
                    log::error!("failed to process {}: {}", input.display(), e);
                    FileStatus::Failed(e.to_string())
                }
            };
            let report = FileReport {
                input: input.clone(),
                status,
            };
            observer(&report);
            report
        })
        .collect();

    Ok(BatchSummary { reports })
}
