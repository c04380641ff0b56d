use proptest::prelude::*;
use tagtree::Document;

#[test]
fn test_lone_end_tag_is_dropped() {
    let doc = Document::parse("</x>hello");
    let roots: Vec<_> = doc.roots().collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(doc.text_str(roots[0]), Some("hello"));
}

#[test]
fn test_empty_input() {
    let doc = Document::parse("");
    assert_eq!(doc.roots().count(), 0);
    assert!(doc.find(|_| true).is_empty());
}

#[test]
fn test_angle_bracket_in_text() {
    let doc = Document::parse("<p>1 < 2</p>");
    let p = doc.roots().next().unwrap();
    assert_eq!(doc.text_content(p), "1 < 2");
}

#[test]
fn test_double_open_bracket() {
    let doc = Document::parse("<<div>");
    let roots: Vec<_> = doc.roots().collect();
    assert_eq!(roots.len(), 2);
    assert_eq!(doc.text_str(roots[0]), Some("<"));
    assert_eq!(doc.node_name(roots[1]), Some("div"));
}

#[test]
fn test_doctype_and_comments_are_text() {
    let doc = Document::parse("<!DOCTYPE html><!-- note --><p>x</p>");
    let roots: Vec<_> = doc.roots().collect();
    assert_eq!(roots.len(), 2);
    assert_eq!(
        doc.text_str(roots[0]),
        Some("<!DOCTYPE html><!-- note -->")
    );
    assert_eq!(doc.node_name(roots[1]), Some("p"));
}

#[test]
fn test_unterminated_tag_becomes_text() {
    let doc = Document::parse("<div class='x");
    let roots: Vec<_> = doc.roots().collect();
    assert_eq!(roots.len(), 1);
    assert_eq!(doc.text_str(roots[0]), Some("div class='x"));
}

#[test]
fn test_unquoted_attribute_value_is_discarded() {
    let doc = Document::parse("<a foo=bar></a>");
    let a = doc.roots().next().unwrap();
    assert_eq!(doc.get_attribute(a, "foo"), Some(""));
}

#[test]
fn test_interleaved_tags_keep_matched_shape() {
    // </b> does not match the open <i>, so it is dropped and <i> stays
    // open until </i>
    let doc = Document::parse("<b><i>x</b>y</i>z");
    let b = doc.roots().next().unwrap();
    assert_eq!(doc.node_name(b), Some("b"));
    let i = doc.first_child(b).unwrap();
    assert_eq!(doc.node_name(i), Some("i"));
    assert_eq!(doc.text_content(i), "xy");
}

#[test]
fn test_queries_on_empty_document_never_fail() {
    let doc = Document::parse("plain text only");
    assert!(doc.get_elements_by_tag_name("p").is_empty());
    assert!(doc.get_elements_by_class_name("c").is_empty());
    assert!(doc.get_element_by_id("i").is_none());
    assert!(doc.get_elements_by_name("n").is_empty());
    assert!(doc.get_elements_by_attribute("a", "v").is_empty());
}

proptest! {
    #[test]
    fn parse_never_panics(s in ".*") {
        let doc = Document::parse(&s);
        let _ = doc.find(|_| true);
    }

    #[test]
    fn markup_like_input_never_panics(s in "[<>/='\"A-Za-z0-9 .:!-]{0,80}") {
        let doc = Document::parse(&s);
        for root in doc.roots() {
            let _ = doc.outer_html(root);
            let _ = doc.text_content(root);
        }
        let _ = doc.get_elements_by_tag_name("a");
        let _ = doc.get_element_by_id("x");
    }

    #[test]
    fn serialization_never_panics(s in "[<>/='\"a-z ]{0,60}") {
        let doc = Document::parse(&s);
        for node in doc.composed() {
            let _ = doc.outer_html(node);
            let _ = doc.inner_html(node);
        }
    }
}
