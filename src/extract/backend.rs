//! PDF backend abstraction.
//!
//! Byte-level PDF parsing, stream decompression, and glyph decoding are
//! delegated to `lopdf`. The [`PdfBackend`] trait isolates that collaborator
//! from the fragment extraction logic, so the walker can be driven by a test
//! double as easily as by a real document.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Page identifier: (object number, generation number).
pub type PageId = (u32, u16);

/// A value from a PDF content stream operand.
#[derive(Debug, Clone)]
pub enum PdfValue {
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<PdfValue>),
    Other,
}

impl PdfValue {
    /// Numeric value, if this operand is a number.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            PdfValue::Integer(i) => Some(*i as f32),
            PdfValue::Real(r) => Some(*r),
            _ => None,
        }
    }
}

/// A single operation from a PDF content stream.
#[derive(Debug, Clone)]
pub struct ContentOp {
    pub operator: String,
    pub operands: Vec<PdfValue>,
}

/// Document access required by the fragment extractor.
pub trait PdfBackend {
    /// All pages, keyed by 1-based page number.
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Decompressed content stream bytes for a page.
    fn page_content(&self, page: PageId) -> Result<Vec<u8>>;

    /// Parse content stream bytes into operations.
    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>>;

    /// Decode a string operand using the named font's encoding on the given
    /// page, falling back to byte-level decoding when no encoding is found.
    fn decode_text(&self, page: PageId, font_name: &[u8], bytes: &[u8]) -> String;
}

/// Byte-level text decoding fallback when no font encoding is available:
/// UTF-16BE with BOM, then UTF-8, then Latin-1.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    bytes.iter().map(|&b| b as char).collect()
}

// ---------------------------------------------------------------------------
// LopdfBackend
// ---------------------------------------------------------------------------

use lopdf::{Document as LopdfDocument, Object};

/// Concrete [`PdfBackend`] over `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load a document from a file path.
    pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_doc(doc)
    }

    /// Load a document from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_doc(doc)
    }

    fn from_doc(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn page_content(&self, page_id: PageId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::Extract(e.to_string()))?;

        // A page without a Contents entry is blank, not malformed.
        let Ok(contents) = page_dict.get(b"Contents") else {
            return Ok(Vec::new());
        };

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return stream_bytes(s);
                }
                Err(Error::Extract("invalid content stream".to_string()))
            }
            // A page may carry several content streams; they form one
            // logical stream when concatenated.
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            content.extend_from_slice(&stream_bytes(s)?);
                            content.push(b' ');
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::Extract("invalid content stream".to_string())),
        }
    }

    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>> {
        let content =
            lopdf::content::Content::decode(data).map_err(|e| Error::Extract(e.to_string()))?;

        Ok(content
            .operations
            .into_iter()
            .map(|op| ContentOp {
                operator: op.operator,
                operands: op.operands.iter().map(convert_object).collect(),
            })
            .collect())
    }

    fn decode_text(&self, page: PageId, font_name: &[u8], bytes: &[u8]) -> String {
        if let Ok(fonts) = self.doc.get_page_fonts(page) {
            if let Some(font_dict) = fonts.get(font_name) {
                if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                    if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                        return text;
                    }
                }
            }
        }
        decode_text_simple(bytes)
    }
}

/// Content stream bytes, decoded through the stream's filter chain.
///
/// A stream without a `Filter` key is already raw; `decompressed_content`
/// reports a missing key for those, so they are returned as-is.
fn stream_bytes(s: &lopdf::Stream) -> Result<Vec<u8>> {
    if s.dict.has(b"Filter") {
        s.decompressed_content()
            .map_err(|e| Error::Extract(e.to_string()))
    } else {
        Ok(s.content.clone())
    }
}

fn convert_object(obj: &Object) -> PdfValue {
    match obj {
        Object::Integer(i) => PdfValue::Integer(*i),
        Object::Real(r) => PdfValue::Real(*r),
        Object::Name(n) => PdfValue::Name(n.clone()),
        Object::String(b, _) => PdfValue::Str(b.clone()),
        Object::Array(arr) => PdfValue::Array(arr.iter().map(convert_object).collect()),
        _ => PdfValue::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_simple_utf8() {
        assert_eq!(decode_text_simple(b"Hello"), "Hello");
    }

    #[test]
    fn test_decode_text_simple_latin1() {
        // 0xE9 = 'é' in Latin-1
        let bytes = vec![0x43, 0x61, 0x66, 0xE9];
        assert_eq!(decode_text_simple(&bytes), "Café");
    }

    #[test]
    fn test_decode_text_simple_utf16be() {
        let bytes = vec![0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_text_simple(&bytes), "Hi");
    }

    #[test]
    fn test_pdf_value_as_number() {
        assert_eq!(PdfValue::Integer(42).as_number(), Some(42.0));
        assert_eq!(PdfValue::Real(3.5).as_number(), Some(3.5));
        assert_eq!(PdfValue::Other.as_number(), None);
    }

    /// Minimal PDF whose page carries the given content stream objects,
    /// unfiltered, referenced by `Contents` (directly for one stream, as an
    /// array for several).
    fn raw_stream_pdf(streams: &[&str]) -> Vec<u8> {
        let mut buf = String::new();
        let mut offsets: Vec<usize> = Vec::new();

        buf.push_str("%PDF-1.4\n");

        offsets.push(buf.len());
        buf.push_str("1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        offsets.push(buf.len());
        buf.push_str("2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");

        let refs: Vec<String> = (0..streams.len()).map(|i| format!("{} 0 R", 4 + i)).collect();
        let contents = if streams.len() == 1 {
            refs[0].clone()
        } else {
            format!("[{}]", refs.join(" "))
        };
        offsets.push(buf.len());
        buf.push_str(&format!(
            "3 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents {} >>\nendobj\n",
            contents
        ));

        for (i, stream) in streams.iter().enumerate() {
            offsets.push(buf.len());
            buf.push_str(&format!(
                "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
                4 + i,
                stream.len(),
                stream
            ));
        }

        let size = offsets.len() + 1;
        let xref_offset = buf.len();
        buf.push_str(&format!("xref\n0 {}\n", size));
        buf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            buf.push_str(&format!("{:010} 00000 n \n", offset));
        }
        buf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, xref_offset
        ));

        buf.into_bytes()
    }

    #[test]
    fn test_page_content_returns_unfiltered_stream_raw() {
        let stream = "BT /F1 12 Tf 72 700 Td (Plain stream) Tj ET";
        let backend = LopdfBackend::load_bytes(&raw_stream_pdf(&[stream])).unwrap();

        let (_, page_id) = backend.pages().into_iter().next().unwrap();
        let content = backend.page_content(page_id).unwrap();
        assert_eq!(content, stream.as_bytes());
    }

    #[test]
    fn test_page_content_concatenates_unfiltered_stream_array() {
        let first = "BT /F1 12 Tf 72 700 Td (First half";
        let second = ") Tj ET";
        let backend = LopdfBackend::load_bytes(&raw_stream_pdf(&[first, second])).unwrap();

        let (_, page_id) = backend.pages().into_iter().next().unwrap();
        let content = backend.page_content(page_id).unwrap();
        let text = String::from_utf8(content).unwrap();
        assert!(text.contains("First half"));
        assert!(text.contains(") Tj ET"));
    }
}
