use crate::node::{NodeId, NodeRef};
use crate::rbt::Rbt;

/// Iterate over entries of [`Rbt`] in sort order, obtained via
/// [`Rbt::iter`] or [`Rbt::range`]. Walks from one entry to the next
/// through parent links, without an auxiliary stack. Can be reversed.
pub struct Iter<'a, K, V> {
    tree: &'a Rbt<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(
        tree: &'a Rbt<K, V>,
        front: Option<NodeId>,
        back: Option<NodeId>,
    ) -> Iter<'a, K, V> {
        Iter { tree, front, back }
    }

    fn entry(&self, id: NodeId) -> Option<(&'a K, &'a V)> {
        let tree: &'a Rbt<K, V> = self.tree;
        tree.nodes[id].entry.as_ref().map(|(key, value)| (key, value))
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.front?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.front = self.tree.successor(id);
        }
        self.entry(id)
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let id = self.back?;
        if self.front == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.back = self.tree.predecessor(id);
        }
        self.entry(id)
    }
}

/// Pre-order walk over every entry node of [`Rbt`], in no particular
/// order. Sentinels are not visited.
pub struct Walk<'a, K, V> {
    tree: &'a Rbt<K, V>,
    stack: Vec<NodeId>,
}

impl<'a, K, V> Walk<'a, K, V> {
    pub(crate) fn new(tree: &'a Rbt<K, V>, root: Option<NodeId>) -> Walk<'a, K, V> {
        let stack = root.into_iter().collect();
        Walk { tree, stack }
    }
}

impl<'a, K, V> Iterator for Walk<'a, K, V> {
    type Item = NodeRef<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        // right first, so that left is popped first.
        for child in [node.right, node.left].iter().filter_map(|child| *child) {
            if !self.tree.nodes[child].is_sentinel() {
                self.stack.push(child);
            }
        }
        Some(NodeRef::new(self.tree, id))
    }
}
