use tagtree::Document;

#[test]
fn test_subtree_tag_name_in_document_order() {
    let doc = Document::parse("<ul><li>1</li><li>2</li></ul>");
    let ul = doc.roots().next().unwrap();
    let items = doc.subtree(ul).get_elements_by_tag_name("li");
    assert_eq!(items.len(), 2);
    assert_eq!(doc.text_content(items[0]), "1");
    assert_eq!(doc.text_content(items[1]), "2");
}

#[test]
fn test_subtree_descends_in_preorder() {
    let doc = Document::parse("<ul><li>1<ul><li>1.1</li></ul></li><li>2</li></ul>");
    let ul = doc.roots().next().unwrap();
    let items = doc.subtree(ul).get_elements_by_tag_name("li");
    let texts: Vec<_> = items.iter().map(|&n| doc.text_content(n)).collect();
    assert_eq!(texts, ["11.1", "1.1", "2"]);
}

#[test]
fn test_subtree_excludes_the_node_itself() {
    let doc = Document::parse("<ul><li>1</li></ul>");
    let ul = doc.roots().next().unwrap();
    assert!(doc.subtree(ul).get_elements_by_tag_name("ul").is_empty());
}

#[test]
fn test_subtree_is_scoped() {
    let doc = Document::parse("<div><p>in</p></div><p>out</p>");
    let div = doc.roots().next().unwrap();
    let found = doc.subtree(div).get_elements_by_tag_name("p");
    assert_eq!(found.len(), 1);
    assert_eq!(doc.text_content(found[0]), "in");
}

#[test]
fn test_subtree_class_name() {
    let doc = Document::parse(r#"<div><span class="a b">x</span><span class="ab">y</span></div>"#);
    let div = doc.roots().next().unwrap();
    let found = doc.subtree(div).get_elements_by_class_name("a");
    assert_eq!(found.len(), 1);
    assert_eq!(doc.text_content(found[0]), "x");
}

#[test]
fn test_subtree_name_attribute() {
    let doc = Document::parse(r#"<form><input name="q"><input name="r"></form>"#);
    let form = doc.roots().next().unwrap();
    let found = doc.subtree(form).get_elements_by_name("r");
    assert_eq!(found.len(), 1);
}

#[test]
fn test_subtree_element_by_id_first_in_document_order() {
    let doc = Document::parse(r#"<root><div id="x"><p id="x">deep</p></div></root>"#);
    let root = doc.roots().next().unwrap();
    let found = doc.subtree(root).get_element_by_id("x").unwrap();
    assert_eq!(doc.node_name(found), Some("div"));
}

#[test]
fn test_document_and_subtree_scopes_disagree_on_duplicates() {
    // composition order puts the nested carrier first; document order the
    // outer one
    let doc = Document::parse(r#"<root><div id="x"><p id="x"></p></div></root>"#);
    let root = doc.roots().next().unwrap();
    let document_scope = doc.get_element_by_id("x").unwrap();
    let subtree_scope = doc.subtree(root).get_element_by_id("x").unwrap();
    assert_eq!(doc.node_name(document_scope), Some("p"));
    assert_eq!(doc.node_name(subtree_scope), Some("div"));
}

#[test]
fn test_subtree_id_absent() {
    let doc = Document::parse("<div><p></p></div>");
    let div = doc.roots().next().unwrap();
    assert!(doc.subtree(div).get_element_by_id("x").is_none());
}

#[test]
fn test_subtree_on_text_node_is_empty() {
    let doc = Document::parse("<p>text</p>");
    let p = doc.roots().next().unwrap();
    let text = doc.first_child(p).unwrap();
    assert!(doc.subtree(text).get_elements_by_tag_name("p").is_empty());
}

#[test]
fn test_subtree_ignores_text_for_named_queries() {
    let doc = Document::parse("<div>span<span></span></div>");
    let div = doc.roots().next().unwrap();
    let found = doc.subtree(div).get_elements_by_tag_name("span");
    assert_eq!(found.len(), 1);
    assert!(doc.is_element(found[0]));
}
