use indextree::{Arena, NodeId};

use crate::htmlvalue::Value;

pub(crate) type HtmlArena = Arena<Value>;

/// A node in the parsed tree.
///
/// This is a lightweight value and can be copied. All access goes through
/// the [`Document`] that owns the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node(NodeId);

impl Node {
    #[inline]
    pub(crate) fn new(node_id: NodeId) -> Self {
        Node(node_id)
    }

    #[inline]
    pub(crate) fn get(&self) -> NodeId {
        self.0
    }
}

/// A parsed markup document.
///
/// `Document` owns every node of one parse: the node arena, the root-level
/// forest, and the composition-order record that drives document-scope
/// queries. Dropping the document releases the whole tree at once.
///
/// The tree is immutable after parsing; all further operations are reads.
///
/// The implementation is split into sections focusing on different aspects
/// of the data: parsing, navigation, typed value access, queries and
/// serialization.
pub struct Document {
    pub(crate) arena: HtmlArena,
    pub(crate) roots: Vec<Node>,
    pub(crate) composed: Vec<Node>,
}

impl Document {
    /// Iterator over the root-level nodes, in the order they appeared.
    ///
    /// Markup is treated as a forest: there can be any number of top-level
    /// elements, and bare top-level text runs are retained as root-level
    /// text nodes.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<a/>text<b/>");
    /// assert_eq!(doc.roots().count(), 3);
    /// ```
    pub fn roots(&self) -> impl Iterator<Item = Node> + '_ {
        self.roots.iter().copied()
    }

    /// Iterator over all nodes in composition order.
    ///
    /// Composition order is the order in which nodes reached their final,
    /// closed state during the parse: text and self-closing nodes the
    /// moment they were created, other elements when their end tag was
    /// seen or when the end of input closed them. For nested elements this
    /// means children come before their parents.
    ///
    /// Document-scope queries such as [`Document::find`] traverse this
    /// order.
    ///
    /// ```rust
    /// use tagtree::Document;
    ///
    /// let doc = Document::parse("<a><b></b></a>");
    /// let names: Vec<_> = doc
    ///     .composed()
    ///     .filter_map(|n| doc.node_name(n))
    ///     .collect();
    /// assert_eq!(names, ["b", "a"]);
    /// ```
    pub fn composed(&self) -> impl Iterator<Item = Node> + '_ {
        self.composed.iter().copied()
    }

    #[inline]
    pub(crate) fn arena(&self) -> &HtmlArena {
        &self.arena
    }
}
