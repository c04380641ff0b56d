use crate::document::{Document, Node};

/// ## Navigation
///
/// Read-only traversal of the parsed tree. Children are owned by the
/// arena; parent links are plain index lookups, used only to walk upward.
impl Document {
    /// Get the parent node.
    ///
    /// Returns [`None`] for a root-level node.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<p>Example</p>");
    /// let p = doc.roots().next().unwrap();
    /// let text = doc.first_child(p).unwrap();
    /// assert_eq!(doc.parent(text), Some(p));
    /// assert_eq!(doc.parent(p), None);
    /// ```
    pub fn parent(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].parent().map(Node::new)
    }

    /// Iterator over the child nodes of this node.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<p><a/><b/></p>");
    /// let p = doc.roots().next().unwrap();
    /// let a = doc.first_child(p).unwrap();
    /// let b = doc.next_sibling(a).unwrap();
    /// let children: Vec<_> = doc.children(p).collect();
    /// assert_eq!(children, vec![a, b]);
    /// ```
    pub fn children(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().children(self.arena()).map(Node::new)
    }

    /// Get the first child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn first_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].first_child().map(Node::new)
    }

    /// Get the last child.
    ///
    /// Returns [`None`] if there are no children.
    pub fn last_child(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].last_child().map(Node::new)
    }

    /// Get the next sibling.
    ///
    /// Returns [`None`] if this is the last child of its parent, or a
    /// root-level node with nothing after it.
    pub fn next_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].next_sibling().map(Node::new)
    }

    /// Get the previous sibling.
    ///
    /// Returns [`None`] if there is no previous sibling.
    pub fn previous_sibling(&self, node: Node) -> Option<Node> {
        self.arena()[node.get()].previous_sibling().map(Node::new)
    }

    /// Iterator over ancestor nodes, including this one.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<a><b><c/></b></a>");
    /// let a = doc.roots().next().unwrap();
    /// let b = doc.first_child(a).unwrap();
    /// let c = doc.first_child(b).unwrap();
    ///
    /// let ancestors: Vec<_> = doc.ancestors(c).collect();
    /// assert_eq!(ancestors, vec![c, b, a]);
    /// ```
    pub fn ancestors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().ancestors(self.arena()).map(Node::new)
    }

    /// Iterator over the descendants of this node, including this one, in
    /// document order (pre-order depth-first).
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<a><b><c/></b></a>");
    /// let a = doc.roots().next().unwrap();
    /// let b = doc.first_child(a).unwrap();
    /// let c = doc.first_child(b).unwrap();
    ///
    /// let descendants: Vec<_> = doc.descendants(a).collect();
    /// assert_eq!(descendants, vec![a, b, c]);
    /// ```
    pub fn descendants(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        node.get().descendants(self.arena()).map(Node::new)
    }

    /// Get index of child.
    ///
    /// Returns [`None`] if the node is not a child of this node.
    pub fn child_index(&self, parent: Node, child: Node) -> Option<usize> {
        if self.parent(child) != Some(parent) {
            return None;
        }
        self.children(parent).position(|n| n == child)
    }
}
