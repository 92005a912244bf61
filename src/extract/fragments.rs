//! Content-stream walk producing positioned text fragments.
//!
//! This is the extraction side of the pipeline: it replays a page's text
//! operators (`BT`/`ET`, `Td`/`TD`/`Tm`/`T*`, `Tj`/`TJ`/`'`/`"`), tracking
//! the text matrix to recover where each run of text sits on the page.
//! Consecutive runs on the same baseline are merged into one fragment, so a
//! fragment approximates a visual line. Widths and heights are estimated
//! from the font size; they only need to be good enough for layout
//! heuristics, not for visual reproduction.

use std::path::Path;

use crate::error::Result;
use crate::model::TextFragment;

use super::backend::{ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue};

/// TJ adjustments beyond this many 1/1000 text-space units are word gaps.
const SPACE_ADJUSTMENT: f32 = 200.0;

/// Runs whose baselines differ by less than this merge into one fragment.
const BASELINE_EPSILON: f32 = 0.5;

/// Extracts positioned text fragments from every page of a document.
pub struct FragmentExtractor<B: PdfBackend> {
    backend: B,
}

impl FragmentExtractor<LopdfBackend> {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(LopdfBackend::load_file(path)?))
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self::new(LopdfBackend::load_bytes(data)?))
    }
}

impl<B: PdfBackend> FragmentExtractor<B> {
    /// Wrap an already-loaded backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Extract fragments for every page, in document order.
    ///
    /// Pages yielding no text produce an empty vector at their position;
    /// deciding what to do with them is the assembler's job, not ours.
    pub fn extract(&self) -> Result<Vec<Vec<TextFragment>>> {
        let mut pages = Vec::new();
        for (page_num, page_id) in self.backend.pages() {
            let fragments = self.extract_page(page_id)?;
            log::debug!("page {}: {} text fragments", page_num, fragments.len());
            pages.push(fragments);
        }
        Ok(pages)
    }

    /// Replay one page's content stream into fragments.
    fn extract_page(&self, page: PageId) -> Result<Vec<TextFragment>> {
        let content = self.backend.page_content(page)?;
        if content.is_empty() {
            return Ok(Vec::new());
        }
        let ops = self.backend.decode_content(&content)?;

        let mut fragments: Vec<TextFragment> = Vec::new();
        let mut matrix = TextMatrix::default();
        let mut font_name: Vec<u8> = Vec::new();
        let mut font_size: f32 = 12.0;
        let mut in_text = false;

        for op in ops {
            match op.operator.as_str() {
                "BT" => {
                    in_text = true;
                    matrix = TextMatrix::default();
                }
                "ET" => {
                    in_text = false;
                }
                "Tf" => {
                    if op.operands.len() >= 2 {
                        if let PdfValue::Name(name) = &op.operands[0] {
                            font_name = name.clone();
                        }
                        font_size = op.operands[1].as_number().unwrap_or(12.0);
                    }
                }
                "TL" => {
                    if let Some(l) = op.operands.first().and_then(PdfValue::as_number) {
                        matrix.leading = l;
                    }
                }
                "Td" | "TD" => {
                    if op.operands.len() >= 2 {
                        let tx = op.operands[0].as_number().unwrap_or(0.0);
                        let ty = op.operands[1].as_number().unwrap_or(0.0);
                        if op.operator == "TD" {
                            matrix.leading = -ty;
                        }
                        matrix.translate(tx, ty);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        let n = |i: usize, d: f32| op.operands[i].as_number().unwrap_or(d);
                        matrix.set(n(0, 1.0), n(1, 0.0), n(2, 0.0), n(3, 1.0), n(4, 0.0), n(5, 0.0));
                    }
                }
                "T*" => {
                    matrix.next_line();
                }
                "Tj" | "TJ" => {
                    if in_text {
                        let text = self.show_text_operand(&op, page, &font_name);
                        push_fragment(&mut fragments, &text, &matrix, font_size);
                    }
                }
                "'" | "\"" => {
                    matrix.next_line();
                    if in_text {
                        // The " operator carries word/char spacing first.
                        let idx = if op.operator == "\"" { 2 } else { 0 };
                        if let Some(PdfValue::Str(bytes)) = op.operands.get(idx) {
                            let text = self.backend.decode_text(page, &font_name, bytes);
                            push_fragment(&mut fragments, &text, &matrix, font_size);
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(fragments)
    }

    /// Decode the text carried by a `Tj` or `TJ` operation.
    fn show_text_operand(&self, op: &ContentOp, page: PageId, font_name: &[u8]) -> String {
        match op.operands.first() {
            Some(PdfValue::Str(bytes)) => self.backend.decode_text(page, font_name, bytes),
            Some(PdfValue::Array(items)) => {
                let mut combined = String::new();
                for item in items {
                    match item {
                        PdfValue::Str(bytes) => {
                            combined.push_str(&self.backend.decode_text(page, font_name, bytes));
                        }
                        // Negative adjustments advance the pen; large ones
                        // stand in for word spaces.
                        PdfValue::Integer(_) | PdfValue::Real(_) => {
                            let adjustment = -item.as_number().unwrap_or(0.0);
                            if adjustment > SPACE_ADJUSTMENT && !combined.ends_with(' ') {
                                combined.push(' ');
                            }
                        }
                        _ => {}
                    }
                }
                combined
            }
            _ => String::new(),
        }
    }
}

/// Append decoded text at the current position, merging with the previous
/// fragment when it continues the same baseline.
fn push_fragment(fragments: &mut Vec<TextFragment>, text: &str, matrix: &TextMatrix, size: f32) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return;
    }

    let (x, y) = matrix.position();
    let effective_size = size * matrix.scale();
    let est_width = trimmed.chars().count() as f32 * effective_size * 0.5;

    if let Some(last) = fragments.last_mut() {
        if (last.y - y).abs() < BASELINE_EPSILON && x >= last.x {
            // Same line, continuing rightwards: extend the fragment. A gap
            // past the previous run's estimated right edge means a word
            // boundary the stream never spelled out.
            if x > last.x + last.width + 0.25 * effective_size {
                last.text.push(' ');
            }
            last.text.push_str(trimmed);
            last.width = last.width.max(x + est_width - last.x);
            last.height = last.height.max(effective_size);
            return;
        }
    }

    fragments.push(TextFragment::new(
        trimmed,
        x,
        y,
        est_width,
        effective_size,
    ));
}

/// Text matrix state: the transform plus the current line origin.
///
/// Only the parts of the full PDF text state that affect fragment geometry
/// are tracked here.
#[derive(Debug, Clone, Copy)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
    line_e: f32,
    line_f: f32,
    leading: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
            line_e: 0.0,
            line_f: 0.0,
            leading: 0.0,
        }
    }
}

impl TextMatrix {
    #[allow(clippy::many_single_char_names)]
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        *self = Self {
            a,
            b,
            c,
            d,
            e,
            f,
            line_e: e,
            line_f: f,
            leading: self.leading,
        };
    }

    /// `Td`: move to the start of the next line, offset from the current
    /// line start.
    fn translate(&mut self, tx: f32, ty: f32) {
        self.e = self.line_e + tx * self.a + ty * self.c;
        self.f = self.line_f + tx * self.b + ty * self.d;
        self.line_e = self.e;
        self.line_f = self.f;
    }

    /// `T*`: next line using the current leading.
    fn next_line(&mut self) {
        let leading = self.leading;
        self.translate(0.0, -leading);
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    /// Vertical scale factor applied to the font size.
    fn scale(&self) -> f32 {
        (self.c * self.c + self.d * self.d).sqrt()
    }
}
