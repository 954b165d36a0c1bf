//! Tab-indenting XML re-formatter.
//!
//! Purely syntactic: the input is split at tag boundaries and every segment
//! is printed on its own line. Well-formedness is not checked.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s*<").unwrap());

const INDENT: &str = "\t";

/// Re-indent `raw` with one tag or text segment per line.
pub fn format_xml(raw: &str) -> String {
    let parts: Vec<&str> = TAG_BOUNDARY.split(raw).collect();
    let last = parts.len().saturating_sub(1);

    let mut formatted = String::with_capacity(raw.len() + parts.len() * 2);
    let mut depth = 0usize;

    for (index, part) in parts.iter().enumerate() {
        let segment = match (index == 0, index == last) {
            (true, true) => part.to_string(),
            (true, false) => format!("{}>", part),
            (false, true) => format!("<{}", part),
            (false, false) => format!("<{}>", part),
        };
        let line = segment.trim();
        if line.is_empty() {
            continue;
        }

        match classify(line) {
            Segment::Close => {
                depth = depth.saturating_sub(1);
                push_line(&mut formatted, depth, line);
            }
            Segment::Open => {
                push_line(&mut formatted, depth, line);
                depth += 1;
            }
            Segment::SelfClosing | Segment::Text => {
                push_line(&mut formatted, depth, line);
            }
        }
    }

    formatted.trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Close,
    SelfClosing,
    /// Any other segment starting with `<`, including `<a>x</a>`.
    Open,
    Text,
}

fn classify(line: &str) -> Segment {
    if line.starts_with("</") {
        Segment::Close
    } else if line.ends_with("/>") {
        Segment::SelfClosing
    } else if line.starts_with('<') {
        Segment::Open
    } else {
        Segment::Text
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_nested_indentation() {
        let raw = r#"<VBox><Label text="a" /><HBox>  <Button />
            </HBox></VBox>"#;
        assert_eq!(
            format_xml(raw),
            "<VBox>\n\t<Label text=\"a\" />\n\t<HBox>\n\t\t<Button />\n\t</HBox>\n</VBox>"
        );
    }

    #[test]
    fn test_single_segment_unchanged() {
        assert_eq!(format_xml("<Button />"), "<Button />");
        assert_eq!(format_xml(""), "");
    }

    #[test]
    fn test_element_with_text_still_indents() {
        assert_eq!(
            format_xml("<a><b>text</b><c /></a>"),
            "<a>\n\t<b>text</b>\n\t\t<c />\n\t</a>"
        );
    }

    #[test]
    fn test_unbalanced_close_saturates() {
        assert_eq!(format_xml("</a></b><c />"), "</a>\n</b>\n<c />");
    }

    #[derive(Debug, Clone)]
    enum Element {
        Leaf(String),
        Branch(String, Vec<Element>),
    }

    fn element() -> impl Strategy<Value = Element> {
        let leaf = "[A-Za-z][A-Za-z0-9]{0,6}".prop_map(Element::Leaf);
        leaf.prop_recursive(4, 32, 4, |inner| {
            ("[A-Za-z][A-Za-z0-9]{0,6}", prop::collection::vec(inner, 0..4))
                .prop_map(|(name, children)| Element::Branch(name, children))
        })
    }

    fn render(element: &Element, gap: &str, out: &mut String) {
        match element {
            Element::Leaf(name) => out.push_str(&format!("<{} />{}", name, gap)),
            Element::Branch(name, children) => {
                out.push_str(&format!("<{}>{}", name, gap));
                for child in children {
                    render(child, gap, out);
                }
                out.push_str(&format!("</{}>{}", name, gap));
            }
        }
    }

    proptest! {
        #[test]
        fn prop_format_is_idempotent(tree in element(), gap in "[ \t\n]{0,3}") {
            let mut raw = String::new();
            render(&tree, &gap, &mut raw);

            let once = format_xml(&raw);
            prop_assert_eq!(format_xml(&once), once);
        }
    }
}
