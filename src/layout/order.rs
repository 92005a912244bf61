//! Reading-order reconstruction.
//!
//! A single-axis heuristic: fragments sort by descending `y`, so whatever
//! sits higher on the page reads first. The sort must be stable: fragments
//! sharing a baseline keep their extraction order, which is the only
//! left-to-right information this sort preserves. No x tie-break is applied.
//!
//! Known limitation: multi-column layouts interleave, because a single
//! vertical axis cannot tell one column from another. Fixing that would
//! require column detection, which this pipeline does not attempt.

use std::cmp::Ordering;

use crate::model::{ClassifiedFragment, TextFragment};

/// Sort raw fragments into reading order (stable, descending `y`).
pub fn order_fragments(fragments: &mut [TextFragment]) {
    fragments.sort_by(|a, b| descending_y(a.y, b.y));
}

/// Sort classified fragments into reading order (stable, descending `y`).
///
/// Roles are untouched; classification happened before this and is never
/// re-derived.
pub fn order_classified(fragments: &mut [ClassifiedFragment]) {
    fragments.sort_by(|a, b| descending_y(a.y(), b.y()));
}

fn descending_y(a: f32, b: f32) -> Ordering {
    // NaN coordinates compare equal, which leaves their extraction order
    // intact under the stable sort.
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn frag(text: &str, y: f32) -> TextFragment {
        TextFragment::new(text, 0.0, y, 10.0, 10.0)
    }

    #[test]
    fn test_descending_y_order() {
        let mut fragments = vec![frag("bottom", 10.0), frag("top", 700.0), frag("middle", 350.0)];
        order_fragments(&mut fragments);

        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["top", "middle", "bottom"]);
    }

    #[test]
    fn test_stable_tie_break_preserves_extraction_order() {
        // y values [10, 30, 10, 20] inserted in that order must come out as
        // 30, then the two 10s in their original relative order, then 20.
        let mut fragments = vec![
            frag("first-low", 10.0),
            frag("high", 30.0),
            frag("second-low", 10.0),
            frag("mid", 20.0),
        ];
        order_fragments(&mut fragments);

        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["high", "mid", "first-low", "second-low"]);
    }

    #[test]
    fn test_classified_sort_keeps_roles_attached() {
        let mut fragments = vec![
            ClassifiedFragment::new(frag("2", 30.0), Role::Footer),
            ClassifiedFragment::new(frag("TITLE", 700.0), Role::Header),
        ];
        order_classified(&mut fragments);

        assert_eq!(fragments[0].text(), "TITLE");
        assert_eq!(fragments[0].role, Role::Header);
        assert_eq!(fragments[1].role, Role::Footer);
    }

    #[test]
    fn test_nan_y_does_not_panic() {
        let mut fragments = vec![frag("a", f32::NAN), frag("b", 10.0), frag("c", f32::NAN)];
        order_fragments(&mut fragments);
        assert_eq!(fragments.len(), 3);
    }
}
