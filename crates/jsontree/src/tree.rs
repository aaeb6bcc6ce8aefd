//! The owned tree of parsed nodes and its read-only query surface.

use alloc::vec::Vec;

use crate::{
    node::{Kind, Node, NodeId, Payload},
    ParseError,
};

/// An immutable tree of JSON nodes produced by [`parse`](crate::parse).
///
/// Every node of one document lives in a single arena owned by the tree;
/// [`NodeId`]s are indices into that arena and child/sibling relationships
/// are index links. Dropping the tree releases every node and every owned
/// string in one pass, without recursion, regardless of how deep the
/// document nests or how long its sibling lists run.
///
/// All accessors are pure: no mutation, no allocation. Accessors that are
/// only defined for certain kinds return `None` elsewhere, and indexed
/// access is bounds-checked.
///
/// # Examples
///
/// ```
/// use jsontree::Kind;
///
/// let tree = jsontree::parse(r#"[null, "two", 3]"#)?;
/// let root = tree.root();
/// assert_eq!(tree.kind(root), Kind::Array);
/// let two = tree.array_element(root, 1).unwrap();
/// assert_eq!(tree.string(two), Some("two"));
/// assert_eq!(tree.array_element(root, 3), None);
/// # Ok::<(), jsontree::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    pub(crate) fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        Tree { nodes, root }
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// The node the whole document parsed into.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The kind of `id`.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> Kind {
        self.node(id).kind
    }

    /// The numeric value of `id`; `None` unless `id` is a number node.
    #[must_use]
    pub fn number(&self, id: NodeId) -> Option<f64> {
        match self.node(id).payload {
            Payload::Number(value) => Some(value),
            Payload::None | Payload::Text(_) => None,
        }
    }

    /// The decoded text of `id`; `None` unless `id` is a string node.
    #[must_use]
    pub fn string(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).payload {
            Payload::Text(text) => Some(text),
            Payload::None | Payload::Number(_) => None,
        }
    }

    /// The key under which `id` sits in its enclosing object; `None` for
    /// array elements and for the document root.
    #[must_use]
    pub fn object_key(&self, id: NodeId) -> Option<&str> {
        self.node(id).name.as_deref()
    }

    /// The `index`-th element of the array node `id`, in document order.
    ///
    /// Linear in `index` (the child list is a linked list); `None` when the
    /// index is out of range or `id` has no children.
    #[must_use]
    pub fn array_element(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).nth(index)
    }

    /// The `index`-th member of the object node `id`, in insertion order.
    ///
    /// The same linear walk as [`array_element`](Tree::array_element); the
    /// child list makes no distinction between elements and members.
    #[must_use]
    pub fn object_element(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.children(id).nth(index)
    }

    /// The value stored under `key` in the object node `id`.
    ///
    /// Linear scan in insertion order; with duplicate keys the first match
    /// wins. `None` when no member carries `key` or `id` has no children.
    #[must_use]
    pub fn member(&self, id: NodeId, key: &str) -> Option<NodeId> {
        self.children(id)
            .find(|&child| self.node(child).name.as_deref() == Some(key))
    }

    /// Iterates the child list of `id` in document order. Empty for
    /// scalars and for empty containers.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(id).first_child,
        }
    }

    /// The number of children of `id`. Linear in the answer.
    #[must_use]
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }
}

impl core::str::FromStr for Tree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

/// Iterator over one node's child list, yielded in document order.
#[derive(Debug, Clone)]
pub struct Children<'a> {
    tree: &'a Tree,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.tree.node(id).next_sibling;
        Some(id)
    }
}
