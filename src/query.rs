use crate::document::{Document, Node};
use crate::htmlvalue::Element;

/// ## Document-scope queries
///
/// These operations traverse the whole document in composition order, the
/// order nodes reached their final state during the parse (see
/// [`Document::composed`]). For nested elements that order puts children
/// before their parents, so a first-match query at document scope can
/// disagree with the same query scoped to a subtree, which runs in
/// document order. Both orders are part of the contract.
impl Document {
    /// Find all nodes matching a predicate, in composition order.
    ///
    /// The predicate sees every node, text nodes included.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<a><b></b></a><c></c>");
    /// let names: Vec<_> = doc
    ///     .find(|node| doc.is_element(node))
    ///     .into_iter()
    ///     .filter_map(|n| doc.node_name(n))
    ///     .collect();
    /// assert_eq!(names, ["b", "a", "c"]);
    /// ```
    pub fn find<F>(&self, predicate: F) -> Vec<Node>
    where
        F: Fn(Node) -> bool,
    {
        self.composed().filter(|&node| predicate(node)).collect()
    }

    /// Find the first node matching a predicate, in composition order.
    ///
    /// Stops at the first match.
    pub fn find_first<F>(&self, predicate: F) -> Option<Node>
    where
        F: Fn(Node) -> bool,
    {
        self.composed().find(|&node| predicate(node))
    }

    /// Get all elements carrying a class token, in composition order.
    ///
    /// The `class` attribute value is treated as a whitespace-delimited
    /// set of tokens; the query matches whole tokens only.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse(r#"<div class="a b"></div><div class="ab"></div>"#);
    /// assert_eq!(doc.get_elements_by_class_name("a").len(), 1);
    /// assert_eq!(doc.get_elements_by_class_name("ab").len(), 1);
    /// ```
    pub fn get_elements_by_class_name(&self, class_name: &str) -> Vec<Node> {
        self.find(|node| self.is_class_match(node, class_name))
    }

    /// Get all elements with this tag name, in composition order.
    ///
    /// The name comparison is ASCII case-insensitive and includes the
    /// namespace prefix when present.
    pub fn get_elements_by_tag_name(&self, tag_name: &str) -> Vec<Node> {
        self.find(|node| self.is_tag_match(node, tag_name))
    }

    /// Get the first element with this `id`, in composition order.
    ///
    /// With duplicate ids the result is composition-order dependent: a
    /// nested carrier composes before its ancestors and wins.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse(r#"<p id="x"></p>"#);
    /// assert!(doc.get_element_by_id("x").is_some());
    /// assert!(doc.get_element_by_id("y").is_none());
    /// ```
    pub fn get_element_by_id(&self, id: &str) -> Option<Node> {
        self.find_first(|node| self.is_attribute_match(node, "id", id))
    }

    /// Get all elements whose `name` attribute has this value, in
    /// composition order.
    pub fn get_elements_by_name(&self, name: &str) -> Vec<Node> {
        self.find(|node| self.is_attribute_match(node, "name", name))
    }

    /// Get all elements carrying an attribute with this exact value, in
    /// composition order.
    ///
    /// An element without the attribute never matches, but an attribute
    /// written without a value matches the empty string.
    pub fn get_elements_by_attribute(&self, name: &str, value: &str) -> Vec<Node> {
        self.find(|node| self.is_attribute_match(node, name, value))
    }

    /// Obtain a [`Subtree`] view for queries scoped to this node's
    /// descendants, in document order.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<ul><li>1</li><li>2</li></ul>");
    /// let ul = doc.roots().next().unwrap();
    /// let items = doc.subtree(ul).get_elements_by_tag_name("li");
    /// assert_eq!(doc.text_content(items[0]), "1");
    /// assert_eq!(doc.text_content(items[1]), "2");
    /// ```
    pub fn subtree(&self, node: Node) -> Subtree<'_> {
        Subtree {
            document: self,
            node,
        }
    }

    pub(crate) fn is_tag_match(&self, node: Node, tag_name: &str) -> bool {
        match self.element(node) {
            Some(element) => element.name.eq_ignore_ascii_case(tag_name),
            None => false,
        }
    }

    pub(crate) fn is_class_match(&self, node: Node, class_name: &str) -> bool {
        match self.element(node) {
            Some(element) => has_class_token(element, class_name),
            None => false,
        }
    }

    pub(crate) fn is_attribute_match(&self, node: Node, name: &str, value: &str) -> bool {
        match self.element(node) {
            Some(element) => element.get_attribute(name) == Some(value),
            None => false,
        }
    }
}

fn has_class_token(element: &Element, class_name: &str) -> bool {
    match element.get_attribute("class") {
        Some(value) => value.split_whitespace().any(|token| token == class_name),
        None => false,
    }
}

/// Queries scoped to the descendants of one node.
///
/// Obtained through [`Document::subtree`]. Unlike the document-scope
/// operations these search in document order: a recursive pre-order
/// descent over the node's children. The node itself is never part of the
/// results, and only elements can match.
pub struct Subtree<'a> {
    document: &'a Document,
    node: Node,
}

impl<'a> Subtree<'a> {
    /// Get descendant elements with this tag name, in document order.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<ol><li>a<em>x</em></li><li>b</li></ol>");
    /// let ol = doc.roots().next().unwrap();
    /// let items = doc.subtree(ol).get_elements_by_tag_name("li");
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(doc.text_content(items[0]), "ax");
    /// ```
    pub fn get_elements_by_tag_name(&self, tag_name: &str) -> Vec<Node> {
        self.search(&|node| self.document.is_tag_match(node, tag_name))
    }

    /// Get descendant elements carrying a class token, in document order.
    pub fn get_elements_by_class_name(&self, class_name: &str) -> Vec<Node> {
        self.search(&|node| self.document.is_class_match(node, class_name))
    }

    /// Get descendant elements whose `name` attribute has this value, in
    /// document order.
    pub fn get_elements_by_name(&self, name: &str) -> Vec<Node> {
        self.search(&|node| self.document.is_attribute_match(node, "name", name))
    }

    /// Get the first descendant element with this `id`, in document
    /// order.
    pub fn get_element_by_id(&self, id: &str) -> Option<Node> {
        self.search_first(self.node, &|node| {
            self.document.is_attribute_match(node, "id", id)
        })
    }

    /// Pre-order descent over the subtree, excluding the root node.
    fn search(&self, predicate: &dyn Fn(Node) -> bool) -> Vec<Node> {
        let mut result = Vec::new();
        self.search_into(self.node, predicate, &mut result);
        result
    }

    fn search_into(&self, node: Node, predicate: &dyn Fn(Node) -> bool, result: &mut Vec<Node>) {
        for child in self.document.children(node) {
            if predicate(child) {
                result.push(child);
            }
            self.search_into(child, predicate, result);
        }
    }

    fn search_first(&self, node: Node, predicate: &dyn Fn(Node) -> bool) -> Option<Node> {
        for child in self.document.children(node) {
            if predicate(child) {
                return Some(child);
            }
            if let Some(found) = self.search_first(child, predicate) {
                return Some(found);
            }
        }
        None
    }
}
