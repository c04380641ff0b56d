use std::io::Write;

use indextree::NodeEdge;

use crate::document::{Document, Node};
use crate::error::Error;
use crate::htmlvalue::{Element, Value};

/// ## Serialization
///
/// Derived string views of a node. These are computed on demand and never
/// cached; the source text is reproduced without escaping or entity
/// handling.
impl Document {
    /// The outer markup of a node.
    ///
    /// A self-closing element serializes as `<name attrs/>`, a normal
    /// element as its open tag, inner markup and end tag, and a text node
    /// as its literal text. An attribute with an empty value serializes as
    /// its bare name.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse(r#"<p class="x">one<br>two</p>"#);
    /// let p = doc.roots().next().unwrap();
    /// assert_eq!(doc.outer_html(p), r#"<p class="x">one<br/>two</p>"#);
    /// ```
    pub fn outer_html(&self, node: Node) -> String {
        let mut out = String::new();
        for edge in node.get().traverse(self.arena()) {
            match edge {
                NodeEdge::Start(node_id) => match self.arena()[node_id].get() {
                    Value::Element(element) => {
                        push_open_tag(&mut out, element);
                    }
                    Value::Text(text) => out.push_str(text.get()),
                },
                NodeEdge::End(node_id) => {
                    if let Value::Element(element) = self.arena()[node_id].get() {
                        if !element.self_closing {
                            out.push_str("</");
                            out.push_str(&element.name);
                            out.push('>');
                        }
                    }
                }
            }
        }
        out
    }

    /// The inner markup of a node: the concatenated outer markup of its
    /// children. Empty for text nodes and self-closing elements.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<p>one<b>two</b></p>");
    /// let p = doc.roots().next().unwrap();
    /// assert_eq!(doc.inner_html(p), "one<b>two</b>");
    /// ```
    pub fn inner_html(&self, node: Node) -> String {
        let mut out = String::new();
        for child in self.children(node) {
            out.push_str(&self.outer_html(child));
        }
        out
    }

    /// The text content of a node.
    ///
    /// For a text node this is the literal text. For an element it is the
    /// concatenated text of all descendants, with runs of the plain space
    /// character collapsed to a single space; other whitespace such as
    /// newlines and tabs is left untouched.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<p>one  <b>two</b>\n\nthree</p>");
    /// let p = doc.roots().next().unwrap();
    /// assert_eq!(doc.text_content(p), "one two\n\nthree");
    /// ```
    pub fn text_content(&self, node: Node) -> String {
        if let Some(text) = self.text_str(node) {
            return text.to_string();
        }
        let mut raw = String::new();
        for descendant in self.descendants(node) {
            if let Some(text) = self.text_str(descendant) {
                raw.push_str(text);
            }
        }
        collapse_spaces(&raw)
    }

    /// Write the outer markup of a node into an [`std::io::Write`] sink.
    ///
    /// This is the streaming variant of [`Document::outer_html`].
    pub fn serialize(&self, node: Node, w: &mut impl Write) -> Result<(), Error> {
        for edge in node.get().traverse(self.arena()) {
            match edge {
                NodeEdge::Start(node_id) => match self.arena()[node_id].get() {
                    Value::Element(element) => {
                        let mut open = String::new();
                        push_open_tag(&mut open, element);
                        w.write_all(open.as_bytes())?;
                    }
                    Value::Text(text) => w.write_all(text.get().as_bytes())?,
                },
                NodeEdge::End(node_id) => {
                    if let Value::Element(element) = self.arena()[node_id].get() {
                        if !element.self_closing {
                            write!(w, "</{}>", element.name)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

fn push_open_tag(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(&element.name);
    for attribute in &element.attributes {
        out.push(' ');
        out.push_str(&attribute.name);
        if !attribute.value.is_empty() {
            out.push_str("=\"");
            out.push_str(&attribute.value);
            out.push('"');
        }
    }
    if element.self_closing {
        out.push('/');
    }
    out.push('>');
}

/// Collapse runs of U+0020 to a single space; other whitespace is kept.
fn collapse_spaces(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_space = false;
    for c in raw.chars() {
        if c == ' ' {
            if !previous_space {
                out.push(c);
            }
            previous_space = true;
        } else {
            out.push(c);
            previous_space = false;
        }
    }
    out
}
