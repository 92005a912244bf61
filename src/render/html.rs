//! HTML rendering of the logical document tree.
//!
//! The output contract, which downstream tooling may depend on: one meta
//! charset declaration, one title, one style block defining exactly the
//! `.page`, `.text-block`, `.header`, and `.footer` class rules; a
//! `div.page` per logical page holding an `h2` page heading and one
//! `div.text-block` per block, with `header`/`footer` appended as an extra
//! class for those roles. Indentation is for humans and is not part of the
//! contract.

use crate::error::Result;
use crate::model::{LogicalDocument, LogicalPage, Role};

use super::tree::Element;

/// Fixed document title.
const TITLE: &str = "Converted PDF";

/// Embedded stylesheet. The four selector names are part of the output
/// contract; the declarations themselves are presentation defaults.
const STYLESHEET: &str = "\
.page { margin-bottom: 2em; padding: 1em; border-bottom: 1px solid #ccc; }
.text-block { margin: 0.5em 0; }
.header { font-weight: bold; font-size: 1.2em; }
.footer { font-size: 0.8em; color: #666; }";

/// Render a logical document as a self-contained HTML string.
pub fn to_html(doc: &LogicalDocument) -> Result<String> {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("title").text(TITLE))
        .child(Element::new("style").text(STYLESHEET));

    let mut body = Element::new("body");
    for page in &doc.pages {
        body = body.child(render_page(page));
    }

    let html = Element::new("html").child(head).child(body);
    Ok(format!("<!DOCTYPE html>\n{}", html.to_html()))
}

fn render_page(page: &LogicalPage) -> Element {
    let mut div = Element::new("div")
        .class("page")
        .child(Element::new("h2").text(format!("Page {}", page.number)));

    for block in &page.blocks {
        let mut el = Element::new("div").class("text-block");
        el = match block.role {
            Role::Header => el.class("header"),
            Role::Footer => el.class("footer"),
            Role::Body => el,
        };
        div = div.child(el.text(block.text.clone()));
    }

    div
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogicalBlock, LogicalPage};

    fn sample_doc() -> LogicalDocument {
        LogicalDocument::new(vec![LogicalPage::new(
            1,
            vec![
                LogicalBlock::new(Role::Header, "INTRODUCTION"),
                LogicalBlock::new(Role::Body, "Some body text."),
                LogicalBlock::new(Role::Footer, "1"),
            ],
        )])
    }

    #[test]
    fn test_fixed_head_contents() {
        let html = to_html(&sample_doc()).unwrap();
        assert_eq!(html.matches("<meta charset=\"utf-8\">").count(), 1);
        assert_eq!(html.matches("<title>").count(), 1);
        assert!(html.contains("<title>Converted PDF</title>"));
        assert_eq!(html.matches("<style>").count(), 1);
    }

    #[test]
    fn test_style_has_all_four_selectors() {
        let html = to_html(&sample_doc()).unwrap();
        for selector in [".page", ".text-block", ".header", ".footer"] {
            assert!(html.contains(selector), "missing selector {selector}");
        }
    }

    #[test]
    fn test_head_is_fixed_even_for_empty_document() {
        let html = to_html(&LogicalDocument::default()).unwrap();
        assert_eq!(html.matches("<meta charset=\"utf-8\">").count(), 1);
        assert!(html.contains("<title>Converted PDF</title>"));
        for selector in [".page", ".text-block", ".header", ".footer"] {
            assert!(html.contains(selector));
        }
    }

    #[test]
    fn test_roles_map_to_classes() {
        let html = to_html(&sample_doc()).unwrap();
        assert!(html.contains("<div class=\"text-block header\">INTRODUCTION</div>"));
        assert!(html.contains("<div class=\"text-block\">Some body text.</div>"));
        assert!(html.contains("<div class=\"text-block footer\">1</div>"));
    }

    #[test]
    fn test_page_heading() {
        let html = to_html(&sample_doc()).unwrap();
        assert!(html.contains("<h2>Page 1</h2>"));
    }

    #[test]
    fn test_block_text_is_escaped() {
        let doc = LogicalDocument::new(vec![LogicalPage::new(
            1,
            vec![LogicalBlock::new(Role::Body, "<script>alert(1)</script>")],
        )]);
        let html = to_html(&doc).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let doc = sample_doc();
        assert_eq!(to_html(&doc).unwrap(), to_html(&doc).unwrap());
    }
}
