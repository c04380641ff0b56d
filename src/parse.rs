use indextree::NodeId;

use crate::document::{Document, HtmlArena, Node};
use crate::htmlelements::VoidElements;
use crate::htmlvalue::{Element, Text, Value};
use crate::tag::{parse_attributes, parse_tag_name};
use crate::tokenizer::{Token, Tokenizer};

/// Builds the tree from the token stream.
///
/// There is no explicit stack: `cursor` points at the single currently open
/// node, and closing walks up through parent links. `composed` records the
/// order in which nodes reach their final state.
struct TreeBuilder {
    arena: HtmlArena,
    cursor: Option<NodeId>,
    roots: Vec<NodeId>,
    composed: Vec<NodeId>,
    void_elements: VoidElements,
}

impl TreeBuilder {
    fn new() -> Self {
        TreeBuilder {
            arena: HtmlArena::new(),
            cursor: None,
            roots: Vec::new(),
            composed: Vec::new(),
            void_elements: VoidElements::new(),
        }
    }

    /// Create a node and attach it as the last child of the cursor, or as
    /// a root-level node when no node is open.
    fn attach(&mut self, value: Value) -> NodeId {
        let node_id = self.arena.new_node(value);
        match self.cursor {
            Some(cursor) => cursor.append(node_id, &mut self.arena),
            None => self.roots.push(node_id),
        }
        node_id
    }

    /// A text run composes immediately.
    fn text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let node_id = self.attach(Value::Text(Text::new(text.to_string())));
        self.composed.push(node_id);
    }

    fn tag(&mut self, tag: &str) {
        if tag.starts_with("</") {
            self.end_tag(tag);
        } else {
            self.start_tag(tag);
        }
    }

    fn start_tag(&mut self, tag: &str) {
        let Some(tag_name) = parse_tag_name(tag) else {
            return;
        };
        let self_closing = tag.ends_with("/>") || self.void_elements.matches(tag_name.name);
        let element = Element::new(
            tag_name.name.to_string(),
            tag_name.namespace.map(str::to_string),
            parse_attributes(tag),
            self_closing,
        );
        let node_id = self.attach(Value::Element(element));
        if self_closing {
            self.composed.push(node_id);
        } else {
            self.cursor = Some(node_id);
        }
    }

    /// An end tag only ever closes the cursor itself. A name that does not
    /// match the open node is dropped without any corrective re-nesting;
    /// the tree keeps the shape of whatever did match.
    fn end_tag(&mut self, tag: &str) {
        let Some(tag_name) = parse_tag_name(tag) else {
            return;
        };
        let Some(cursor) = self.cursor else {
            return;
        };
        let name_matches = match self.arena[cursor].get() {
            Value::Element(element) => element.name.eq_ignore_ascii_case(tag_name.name),
            Value::Text(_) => false,
        };
        if name_matches {
            self.composed.push(cursor);
            self.cursor = self.arena[cursor].parent();
        }
    }

    /// End of input: everything still open closes, innermost first.
    fn drain(&mut self) {
        while let Some(cursor) = self.cursor {
            self.composed.push(cursor);
            self.cursor = self.arena[cursor].parent();
        }
    }

    fn into_document(self) -> Document {
        Document {
            arena: self.arena,
            roots: self.roots.into_iter().map(Node::new).collect(),
            composed: self.composed.into_iter().map(Node::new).collect(),
        }
    }
}

/// ## Parsing
impl Document {
    /// Parse markup into a document.
    ///
    /// Parsing never fails. Structurally broken input degrades instead:
    /// unclosed elements are closed by the end of input, mismatched end
    /// tags are dropped, and a `<` that does not open a tag is literal
    /// text.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<p>Example</p>");
    /// let p = doc.roots().next().unwrap();
    /// assert_eq!(doc.node_name(p), Some("p"));
    /// assert_eq!(doc.text_content(p), "Example");
    /// ```
    pub fn parse(markup: &str) -> Document {
        let mut builder = TreeBuilder::new();
        for token in Tokenizer::new(markup) {
            match token {
                Token::Text(text) => builder.text(text),
                Token::Tag(tag) => builder.tag(tag),
            }
        }
        builder.drain();
        builder.into_document()
    }
}
