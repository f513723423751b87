use std::fmt;

use crate::rbt::Rbt;

/// Handle to a node slot inside the [`Rbt`] arena.
pub(crate) type NodeId = usize;

/// Node corresponds to a single cell in Rbt instance, either an entry
/// or a sentinel standing in for a missing child.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) entry: Option<(K, V)>, // None for sentinel
    pub(crate) black: bool,           // store: black or red
    pub(crate) left: Option<NodeId>,  // store: left child
    pub(crate) right: Option<NodeId>, // store: right child
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn sentinel(parent: Option<NodeId>) -> Node<K, V> {
        Node {
            entry: None,
            black: true,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> Option<&K> {
        self.entry.as_ref().map(|(key, _)| key)
    }

    #[inline]
    pub(crate) fn is_sentinel(&self) -> bool {
        self.entry.is_none()
    }

    #[inline]
    pub(crate) fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    pub(crate) fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.black
    }
}

/// Read-only view of a node reachable from an [`Rbt`] root. Meant for
/// consumers that inspect tree shape, like printers and validators,
/// without being able to mutate it.
pub struct NodeRef<'a, K, V> {
    tree: &'a Rbt<K, V>,
    id: NodeId,
}

impl<'a, K, V> Clone for NodeRef<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for NodeRef<'a, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    pub(crate) fn new(tree: &'a Rbt<K, V>, id: NodeId) -> NodeRef<'a, K, V> {
        NodeRef { tree, id }
    }

    #[inline]
    fn node(&self) -> &'a Node<K, V> {
        &self.tree.nodes[self.id]
    }

    /// Key of this node, None for a sentinel.
    pub fn key(&self) -> Option<&'a K> {
        self.node().key()
    }

    /// Value of this node, None for a sentinel.
    pub fn value(&self) -> Option<&'a V> {
        self.node().entry.as_ref().map(|(_, value)| value)
    }

    pub fn left(&self) -> Option<NodeRef<'a, K, V>> {
        self.node().left.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn right(&self) -> Option<NodeRef<'a, K, V>> {
        self.node().right.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn parent(&self) -> Option<NodeRef<'a, K, V>> {
        self.node().parent.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn is_black(&self) -> bool {
        self.node().is_black()
    }

    pub fn is_red(&self) -> bool {
        !self.node().is_black()
    }

    pub fn is_sentinel(&self) -> bool {
        self.node().is_sentinel()
    }
}

impl<'a, K, V> fmt::Debug for NodeRef<'a, K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let color = if self.is_black() { "black" } else { "red" };
        match self.key() {
            Some(key) => write!(f, "{:?}({})", key, color),
            None => write!(f, "nil({})", color),
        }
    }
}
