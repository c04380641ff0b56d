use crate::document::{Document, Node};
use crate::htmlvalue::{Element, Text, Value, ValueType};

/// ## Value access
///
/// Obtain node values and their types. These are handy if you only need a
/// single aspect of a node; to handle all kinds, use a `match` statement on
/// [`Value`] instead.
impl Document {
    /// Access the value for this node.
    ///
    /// ```rust
    /// use tagtree::{Document, Value};
    ///
    /// let doc = Document::parse("<doc>Example</doc>");
    /// let root = doc.roots().next().unwrap();
    ///
    /// match doc.value(root) {
    ///     Value::Element(element) => {
    ///         assert_eq!(element.name(), "doc");
    ///     }
    ///     _ => {}
    /// }
    /// ```
    #[inline]
    pub fn value(&self, node: Node) -> &Value {
        self.arena()[node.get()].get()
    }

    /// Get the [`ValueType`] of a node.
    pub fn value_type(&self, node: Node) -> ValueType {
        self.value(node).value_type()
    }

    /// Return true if the node is an element.
    pub fn is_element(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Element
    }

    /// Return true if the node is text.
    pub fn is_text(&self, node: Node) -> bool {
        self.value_type(node) == ValueType::Text
    }

    /// If this node's value is an element, return a reference to it.
    pub fn element(&self, node: Node) -> Option<&Element> {
        if let Value::Element(element) = self.value(node) {
            Some(element)
        } else {
            None
        }
    }

    /// If this node's value is text, return a reference to it.
    pub fn text(&self, node: Node) -> Option<&Text> {
        if let Value::Text(text) = self.value(node) {
            Some(text)
        } else {
            None
        }
    }

    /// If this node's value is text, return a reference to the string.
    pub fn text_str(&self, node: Node) -> Option<&str> {
        self.text(node).map(|t| t.get())
    }

    /// The node name: the tag name for an element, [`None`] for text.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<p>Example</p>");
    /// let p = doc.roots().next().unwrap();
    /// let text = doc.first_child(p).unwrap();
    /// assert_eq!(doc.node_name(p), Some("p"));
    /// assert_eq!(doc.node_name(text), None);
    /// ```
    pub fn node_name(&self, node: Node) -> Option<&str> {
        self.element(node).map(|e| e.name())
    }

    /// Get an attribute value by name.
    ///
    /// Shorthand for [`Element::get_attribute`]; returns [`None`] for text
    /// nodes and for elements without that attribute.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse(r#"<a href="x">link</a>"#);
    /// let a = doc.roots().next().unwrap();
    /// assert_eq!(doc.get_attribute(a, "href"), Some("x"));
    /// assert_eq!(doc.get_attribute(a, "id"), None);
    /// ```
    pub fn get_attribute<'a>(&'a self, node: Node, name: &str) -> Option<&'a str> {
        self.element(node)?.get_attribute(name)
    }
}
