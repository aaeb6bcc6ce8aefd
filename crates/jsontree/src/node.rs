//! Node storage: the kind tag, the scalar payload slot, and the
//! child/sibling links that form each ordered child list.

use alloc::string::String;

/// The type of one parsed JSON value.
///
/// `true` and `false` are distinct kinds rather than a boolean payload, so a
/// kind comparison alone answers every type question.
///
/// # Examples
///
/// ```
/// use jsontree::Kind;
///
/// let tree = jsontree::parse("false")?;
/// assert_eq!(tree.kind(tree.root()), Kind::False);
/// # Ok::<(), jsontree::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    True,
    False,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Returns `true` for every kind except [`Array`] and [`Object`].
    ///
    /// [`Array`]: Kind::Array
    /// [`Object`]: Kind::Object
    #[must_use]
    pub fn is_scalar(self) -> bool {
        !self.is_container()
    }

    /// Returns `true` if the kind is [`Array`] or [`Object`], the only
    /// kinds that can carry a child list.
    ///
    /// [`Array`]: Kind::Array
    /// [`Object`]: Kind::Object
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

/// Identifies one node within the [`Tree`](crate::Tree) that produced it.
///
/// An id is a plain index into the owning tree's arena. Ids are only minted
/// by parsing and only meaningful for the tree they came from; using one
/// with a different tree yields an unrelated node or a panic, never unsafety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Scalar payload slot. Which variant is live is determined by the node's
/// kind: `Number` for number nodes, `Text` for string nodes, `None` for
/// everything else.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Payload {
    None,
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) kind: Kind,
    /// The member key when this node is a direct child of an object.
    pub(crate) name: Option<String>,
    pub(crate) payload: Payload,
    /// Head of the ordered child list; only ever set on containers.
    pub(crate) first_child: Option<NodeId>,
    /// Forward link within one child list.
    pub(crate) next_sibling: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: Kind, payload: Payload) -> Self {
        Node {
            kind,
            name: None,
            payload,
            first_child: None,
            next_sibling: None,
        }
    }
}
