use std::{
    borrow::Borrow,
    cmp::{Ord, Ordering},
    mem,
    ops::{Bound, RangeBounds},
};

use rand::Rng;

use crate::config::Config;
use crate::depth::Depth;
use crate::error::RbtError;
use crate::iter::{Iter, Walk};
use crate::node::{Node, NodeId, NodeRef};

/// Rbt manage a single instance of in-memory index using
/// [red-black][rbt] tree. Nodes live in an arena owned by the instance and
/// refer to each other, including their parent, by index. Every missing
/// child is a black sentinel node of its own.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct Rbt<K, V> {
    name: String,
    config: Config,
    pub(crate) nodes: Vec<Node<K, V>>,
    free: Vec<NodeId>, // released slots, reused by alloc()
    root: Option<NodeId>,
    n_count: usize, // number of entries in the tree.
}

/// Different ways to construct a new Rbt instance.
impl<K, V> Rbt<K, V> {
    /// Create an empty instance of Rbt, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> Rbt<K, V>
    where
        S: AsRef<str>,
    {
        Rbt::with_config(name, Default::default())
    }

    /// Create an empty instance of Rbt with custom configuration.
    pub fn with_config<S>(name: S, config: Config) -> Rbt<K, V>
    where
        S: AsRef<str>,
    {
        Rbt {
            name: name.as_ref().to_string(),
            config,
            nodes: Default::default(),
            free: Default::default(),
            root: Default::default(),
            n_count: Default::default(),
        }
    }
}

impl<K, V> Rbt<K, V>
where
    K: Ord,
{
    /// Create a new instance of Rbt tree and load it with entries
    /// from `iter`. Later duplicates overwrite the value of earlier ones.
    pub fn load_from<S, I>(name: S, iter: I) -> Rbt<K, V>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut rbt = Rbt::new(name);
        for (key, value) in iter {
            rbt.insert(key, value);
        }
        log::debug!("{}: loaded {} entries", rbt.name, rbt.n_count);
        rbt
    }
}

/// Maintenance API.
impl<K, V> Rbt<K, V> {
    /// Identify this instance. Applications can choose unique names while
    /// creating Rbt instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return quickly with basic statisics, only entries() and node_size()
    /// are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node<K, V>>())
    }
}

/// Write operations on Rbt instance.
impl<K, V> Rbt<K, V>
where
    K: Ord,
{
    /// Set value for key. If there is an existing entry for key,
    /// overwrite the old value with new value and return the old value.
    /// The shape of the tree does not change on overwrite.
    ///
    /// ```
    /// use rb_index::Rbt;
    /// let mut index: Rbt<u64, &str> = Rbt::new("myinstance");
    ///
    /// assert_eq!(index.insert(1, "a"), None);
    /// assert_eq!(index.insert(1, "b"), Some("a"));
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut id = match self.root {
            Some(root) => root,
            None => {
                let root = self.alloc(Node::sentinel(None));
                self.fill(root, key, value);
                self.nodes[root].set_black();
                self.root = Some(root);
                self.n_count += 1;
                return None;
            }
        };

        // walk down to the sentinel where key belongs.
        while let Some(nkey) = self.nodes[id].key() {
            id = match nkey.cmp(&key) {
                Ordering::Less => self.right_of(id),
                Ordering::Greater => self.left_of(id),
                Ordering::Equal => {
                    let entry = self.nodes[id].entry.as_mut();
                    return entry.map(|(_, old)| mem::replace(old, value));
                }
            };
        }

        self.fill(id, key, value);
        self.n_count += 1;
        self.insert_fixup(id);
        self.reroot(id);
        None
    }

    /// Create a new {key, value} entry in the index. If key is already
    /// present return error, leaving the index untouched.
    pub fn create(&mut self, key: K, value: V) -> Result<(), RbtError<K>> {
        if self.find_id(&key).is_some() {
            return Err(RbtError::OverwriteKey);
        }
        self.insert(key, value);
        Ok(())
    }

    /// Same as insert(), for entries that might not carry a key. An entry
    /// without key is rejected before touching the index.
    pub fn try_insert(&mut self, key: Option<K>, value: V) -> Result<Option<V>, RbtError<K>> {
        match key {
            Some(key) => Ok(self.insert(key, value)),
            None => Err(RbtError::AbsentKey),
        }
    }

    /// Remove key from this instance and return its value.
    ///
    /// Removing the only entry fails with [`RbtError::LastEntry`] unless
    /// the instance is configured with [`Config::set_allow_empty`].
    pub fn remove<Q>(&mut self, key: &Q) -> Result<V, RbtError<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let target = self.find_id(key).ok_or(RbtError::KeyNotFound)?;

        if self.n_count == 1 {
            if !self.config.allow_empty() {
                log::debug!("{}: refusing to remove the last entry", self.name);
                return Err(RbtError::LastEntry);
            }
            let entry = self.nodes[target].entry.take();
            self.reset();
            return match entry {
                Some((_, value)) => Ok(value),
                None => panic!("remove(): root without entry ? Call the programmer"),
            };
        }

        // with an entry on the left, swap in the predecessor so that the
        // node to unlink has at most one entry below it.
        let victim = match self.nodes[target].left {
            Some(left) if !self.nodes[left].is_sentinel() => {
                let victim = self.rightmost(left);
                self.swap_entries(target, victim);
                victim
            }
            _ => target,
        };

        let (entry, pending) = self.unlink(victim);
        self.n_count -= 1;
        if let Some(bal) = pending {
            self.remove_fixup(bal);
        }
        self.reroot(victim);

        match entry {
            Some((_, value)) => Ok(value),
            None => panic!("remove(): victim without entry ? Call the programmer"),
        }
    }
}

/// Read operations on Rbt instance.
impl<K, V> Rbt<K, V>
where
    K: Ord,
{
    /// Locate the node holding key.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_id(key).map(|id| NodeRef::new(self, id))
    }

    /// Get the value for key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find_id(key)?;
        self.nodes[id].entry.as_ref().map(|(_, value)| value)
    }

    /// Get a mutable reference to the value for key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find_id(key)?;
        self.nodes[id].entry.as_mut().map(|(_, value)| value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_id(key).is_some()
    }

    /// Range over all entries from low to high. Returned iterator can be
    /// reversed to walk from high to low.
    pub fn range<Q, R>(&self, range: R) -> Iter<K, V>
    where
        K: Borrow<Q>,
        R: RangeBounds<Q>,
        Q: Ord + ?Sized,
    {
        let front = self.lower_bound(range.start_bound());
        let back = self.upper_bound(range.end_bound());
        match (front, back) {
            (Some(f), Some(b)) if self.nodes[f].key() <= self.nodes[b].key() => {
                Iter::new(self, front, back)
            }
            _ => Iter::new(self, None, None),
        }
    }

    fn find_id<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut id = self.root?;
        loop {
            let node = &self.nodes[id];
            let nkey: &Q = node.key()?.borrow();
            id = match nkey.cmp(key) {
                Ordering::Less => node.right?,
                Ordering::Greater => node.left?,
                Ordering::Equal => break Some(id),
            };
        }
    }

    // first entry at or after the bound.
    fn lower_bound<Q>(&self, bound: Bound<&Q>) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut id, mut found) = (self.root?, None);
        while let Some(key) = self.nodes[id].key() {
            let key: &Q = key.borrow();
            let ok = match bound {
                Bound::Included(low) => key >= low,
                Bound::Excluded(low) => key > low,
                Bound::Unbounded => true,
            };
            id = if ok {
                found = Some(id);
                self.left_of(id)
            } else {
                self.right_of(id)
            };
        }
        found
    }

    // last entry at or before the bound.
    fn upper_bound<Q>(&self, bound: Bound<&Q>) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (mut id, mut found) = (self.root?, None);
        while let Some(key) = self.nodes[id].key() {
            let key: &Q = key.borrow();
            let ok = match bound {
                Bound::Included(high) => key <= high,
                Bound::Excluded(high) => key < high,
                Bound::Unbounded => true,
            };
            id = if ok {
                found = Some(id);
                self.right_of(id)
            } else {
                self.left_of(id)
            };
        }
        found
    }
}

/// Traversal API, none of these mutate the tree.
impl<K, V> Rbt<K, V> {
    /// Read-only handle on the root node, None for an empty instance.
    pub fn root(&self) -> Option<NodeRef<K, V>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Return an iterator over all entries in sort order.
    pub fn iter(&self) -> Iter<K, V> {
        let front = self.root.map(|root| self.leftmost(root));
        let back = self.root.map(|root| self.rightmost(root));
        Iter::new(self, front, back)
    }

    /// Return an iterator over all entry nodes, in no particular order.
    pub fn walk(&self) -> Walk<K, V> {
        Walk::new(self, self.root)
    }

    /// Return a random entry from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(&K, &V)> {
        let mut id = self.root?;
        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let node = &self.nodes[id];
            let next = match rng.gen::<u8>() % 2 {
                0 => node.left,
                _ => node.right,
            };
            match next.filter(|&next| !self.nodes[next].is_sentinel()) {
                Some(next) if at_depth > 0 => {
                    at_depth -= 1;
                    id = next;
                }
                _ => break node.entry.as_ref().map(|(key, value)| (key, value)),
            }
        }
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            if self.nodes[left].is_sentinel() {
                break;
            }
            id = left;
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            if self.nodes[right].is_sentinel() {
                break;
            }
            id = right;
        }
        id
    }

    /// Next entry in sort order, threading through parent links.
    pub(crate) fn successor(&self, mut id: NodeId) -> Option<NodeId> {
        match self.nodes[id].right {
            Some(right) if !self.nodes[right].is_sentinel() => Some(self.leftmost(right)),
            _ => loop {
                let parent = self.nodes[id].parent?;
                if self.nodes[parent].left == Some(id) {
                    break Some(parent);
                }
                id = parent;
            },
        }
    }

    /// Previous entry in sort order, threading through parent links.
    pub(crate) fn predecessor(&self, mut id: NodeId) -> Option<NodeId> {
        match self.nodes[id].left {
            Some(left) if !self.nodes[left].is_sentinel() => Some(self.rightmost(left)),
            _ => loop {
                let parent = self.nodes[id].parent?;
                if self.nodes[parent].right == Some(id) {
                    break Some(parent);
                }
                id = parent;
            },
        }
    }
}

/// Validation API.
impl<K, V> Rbt<K, V>
where
    K: Clone + Ord,
{
    /// Validate red-black tree with following rules:
    ///
    /// * Root is black and has no parent.
    /// * Sentinels are black and have no children.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Every child points back to its parent.
    /// * Make sure keys are in sorted order and counted entries match len().
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, RbtError<K>> {
        let mut stats = Stats::new(self.n_count, mem::size_of::<Node<K, V>>());
        let mut depths = Depth::new();

        let blacks = match self.root {
            None => 0,
            Some(root) => {
                if self.nodes[root].parent.is_some() {
                    return Err(RbtError::BrokenLink("root has a parent".to_string()));
                }
                if !self.nodes[root].is_black() {
                    return Err(RbtError::RedRoot);
                }
                self.validate_tree(root, false, 0, 0, &mut depths)?
            }
        };

        let (mut counted, mut prev): (usize, Option<&K>) = (0, None);
        for (key, _) in self.iter() {
            match prev {
                Some(prev) if prev >= key => {
                    return Err(RbtError::SortError(prev.clone(), key.clone()));
                }
                _ => (),
            }
            prev = Some(key);
            counted += 1;
        }
        if counted != self.n_count {
            let expected = self.n_count;
            return Err(RbtError::EntryCount { expected, counted });
        }

        stats.set_blacks(blacks);
        stats.set_depths(depths);
        Ok(stats)
    }

    fn validate_tree(
        &self,
        id: NodeId,
        fromred: bool,
        nb: usize,
        depth: usize,
        depths: &mut Depth,
    ) -> Result<usize, RbtError<K>> {
        let node = &self.nodes[id];
        if node.is_sentinel() {
            if !node.is_black() {
                let err = format!("red sentinel at depth {}", depth);
                return Err(RbtError::InvalidSentinel(err));
            }
            if node.left.is_some() || node.right.is_some() {
                let err = format!("sentinel with children at depth {}", depth);
                return Err(RbtError::InvalidSentinel(err));
            }
            depths.sample(depth);
            return Ok(nb);
        }

        let red = !node.is_black();
        if fromred && red {
            return Err(RbtError::ConsecutiveReds);
        }
        let nb = if red { nb } else { nb + 1 };

        let (left, right) = match (node.left, node.right) {
            (Some(left), Some(right)) => (left, right),
            _ => {
                let err = format!("entry at depth {} misses a child", depth);
                return Err(RbtError::BrokenLink(err));
            }
        };
        for &child in [left, right].iter() {
            if self.nodes[child].parent != Some(id) {
                let err = format!("child of entry at depth {} points elsewhere", depth);
                return Err(RbtError::BrokenLink(err));
            }
        }

        let lblacks = self.validate_tree(left, red, nb, depth + 1, depths)?;
        let rblacks = self.validate_tree(right, red, nb, depth + 1, depths)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(RbtError::UnbalancedBlacks(err));
        }

        if let (Some(key), Some(lkey)) = (node.key(), self.nodes[left].key()) {
            if lkey >= key {
                return Err(RbtError::SortError(lkey.clone(), key.clone()));
            }
        }
        if let (Some(key), Some(rkey)) = (node.key(), self.nodes[right].key()) {
            if rkey <= key {
                return Err(RbtError::SortError(key.clone(), rkey.clone()));
            }
        }
        Ok(lblacks)
    }
}

// balancing engine.
impl<K, V> Rbt<K, V> {
    //--------- insert and remove fixups ----------------

    // `node` is red and was just filled in, or just recolored/rotated
    // into place.
    fn insert_fixup(&mut self, node: NodeId) {
        let father = match self.nodes[node].parent {
            Some(father) => father,
            None => return,
        };
        let grandpa = match self.nodes[father].parent {
            Some(grandpa) => grandpa,
            None => return,
        };
        let father_left = self.nodes[grandpa].left == Some(father);
        let uncle = if father_left {
            self.nodes[grandpa].right
        } else {
            self.nodes[grandpa].left
        };

        match (self.is_red(Some(father)), self.is_red(uncle)) {
            (true, false) if father_left != self.is_left(node) => {
                log::trace!("insert_fixup(): triangle at {}", node);
                self.rotate_up(node);
                self.insert_fixup(father)
            }
            (true, false) => {
                log::trace!("insert_fixup(): line at {}", node);
                self.rotate_up(father);
                self.nodes[grandpa].set_red();
                self.nodes[father].set_black();
            }
            (true, true) => {
                log::trace!("insert_fixup(): recolor at {}", grandpa);
                self.nodes[grandpa].set_red();
                self.nodes[father].set_black();
                if let Some(uncle) = uncle {
                    self.nodes[uncle].set_black();
                }
                self.insert_fixup(grandpa)
            }
            (false, _) => (),
        }
    }

    // path through `bal` is short of one black. Cases are picked on the
    // colors of (brother, father, close nephew, distant nephew).
    fn remove_fixup(&mut self, bal: NodeId) {
        let father = match self.nodes[bal].parent {
            Some(father) if self.nodes[bal].is_black() => father,
            _ => return,
        };
        let is_left = self.nodes[father].left == Some(bal);
        // brother subtree carries at least one black entry, hence the
        // nephews always exist.
        let (brother, close, dist) = if is_left {
            let brother = self.right_of(father);
            (brother, self.left_of(brother), self.right_of(brother))
        } else {
            let brother = self.left_of(father);
            (brother, self.right_of(brother), self.left_of(brother))
        };

        let colors = (
            self.is_red(Some(brother)),
            self.is_red(Some(father)),
            self.is_red(Some(close)),
            self.is_red(Some(dist)),
        );
        match colors {
            (false, false, false, false) => {
                log::trace!("remove_fixup(): case-1 at {}", bal);
                self.nodes[brother].set_red();
                self.remove_fixup(father);
            }
            (false, true, false, false) => {
                log::trace!("remove_fixup(): case-2 at {}", bal);
                self.nodes[brother].set_red();
                self.nodes[father].set_black();
            }
            (true, _, _, _) => {
                log::trace!("remove_fixup(): case-3 at {}", bal);
                self.rotate_up(brother);
                self.nodes[father].set_red();
                self.nodes[brother].set_black();
                self.remove_fixup(bal);
            }
            (false, _, true, false) => {
                log::trace!("remove_fixup(): case-4 at {}", bal);
                self.rotate_up(close);
                self.nodes[close].set_black();
                self.nodes[brother].set_red();
                self.remove_fixup(bal);
            }
            (false, _, _, true) => {
                log::trace!("remove_fixup(): case-5 at {}", bal);
                self.rotate_up(brother);
                self.nodes[brother].black = self.nodes[father].black;
                self.nodes[father].set_black();
                self.nodes[dist].set_black();
            }
        }
    }

    //--------- rotation routines ----------------

    //              (i)                       (i)
    //               |                         |
    //             father                    pivot
    //              /  \                      / \
    //             /    \                    /   \
    //          left    pivot           father    pr
    //                  / \              /  \
    //                pl   pr         left   pl
    //
    pub(crate) fn rotate_left(&mut self, pivot: NodeId) {
        let father = self.father_of(pivot);
        if self.nodes[father].right != Some(pivot) {
            panic!("rotate_left(): pivot is not a right child ? Call the programmer");
        }
        let inner = self.left_of(pivot);
        self.nodes[father].right = Some(inner);
        self.nodes[inner].parent = Some(father);
        self.replace_child(father, pivot);
        self.nodes[pivot].left = Some(father);
        self.nodes[father].parent = Some(pivot);
    }

    //              (i)                       (i)
    //               |                         |
    //             father                    pivot
    //              /  \                      / \
    //             /    \                    /   \
    //          pivot   right              pl   father
    //           / \                             /  \
    //         pl   pr                         pr   right
    //
    pub(crate) fn rotate_right(&mut self, pivot: NodeId) {
        let father = self.father_of(pivot);
        if self.nodes[father].left != Some(pivot) {
            panic!("rotate_right(): pivot is not a left child ? Call the programmer");
        }
        let inner = self.right_of(pivot);
        self.nodes[father].left = Some(inner);
        self.nodes[inner].parent = Some(father);
        self.replace_child(father, pivot);
        self.nodes[pivot].right = Some(father);
        self.nodes[father].parent = Some(pivot);
    }

    // rotate pivot into its father's place.
    pub(crate) fn rotate_up(&mut self, pivot: NodeId) {
        if self.is_left(pivot) {
            self.rotate_right(pivot)
        } else {
            self.rotate_left(pivot)
        }
    }

    // hook `new` under the parent of `old`, in place of `old`.
    fn replace_child(&mut self, old: NodeId, new: NodeId) {
        let grandpa = self.nodes[old].parent;
        self.nodes[new].parent = grandpa;
        if let Some(grandpa) = grandpa {
            let node = &mut self.nodes[grandpa];
            if node.left == Some(old) {
                node.left = Some(new)
            } else {
                node.right = Some(new)
            }
        }
    }

    //--------- node surgery ----------------

    // physically remove the entry held by `victim`, which has at most
    // one entry below it. Return the removed entry and the node, if any,
    // whose path lost a black.
    fn unlink(&mut self, victim: NodeId) -> (Option<(K, V)>, Option<NodeId>) {
        let child = {
            let node = &self.nodes[victim];
            match (self.is_internal(node.left), self.is_internal(node.right)) {
                (true, true) => panic!("unlink(): two entries below victim ? Call the programmer"),
                (true, false) => node.left,
                (false, true) => node.right,
                (false, false) => None,
            }
        };

        match child {
            Some(child) => {
                let black = self.nodes[child].is_black();
                let promoted = self.make_sentinel(child);
                let entry = mem::replace(&mut self.nodes[victim].entry, promoted);
                if black {
                    (entry, Some(child))
                } else {
                    self.nodes[victim].set_black();
                    (entry, None)
                }
            }
            None => {
                let black = self.nodes[victim].is_black();
                let entry = self.make_sentinel(victim);
                (entry, if black { Some(victim) } else { None })
            }
        }
    }

    // turn an entry with two sentinel children into a sentinel, in place.
    fn make_sentinel(&mut self, id: NodeId) -> Option<(K, V)> {
        let node = &mut self.nodes[id];
        let entry = node.entry.take();
        let children = [node.left.take(), node.right.take()];
        node.set_black();
        for child in children.iter().filter_map(|child| *child) {
            self.release(child);
        }
        entry
    }

    // turn a sentinel into a red entry with two fresh sentinels.
    fn fill(&mut self, id: NodeId, key: K, value: V) {
        let left = self.alloc(Node::sentinel(Some(id)));
        let right = self.alloc(Node::sentinel(Some(id)));
        let node = &mut self.nodes[id];
        node.entry = Some((key, value));
        node.set_red();
        node.left = Some(left);
        node.right = Some(right);
    }

    fn swap_entries(&mut self, a: NodeId, b: NodeId) {
        let entry = self.nodes[a].entry.take();
        let entry = mem::replace(&mut self.nodes[b].entry, entry);
        self.nodes[a].entry = entry;
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.nodes[id] = Node::sentinel(None);
        self.free.push(id);
    }

    fn reset(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.n_count = 0;
    }

    // rotations may hand the root over to another node, walk up from any
    // node in the tree to find it again.
    fn reroot(&mut self, mut id: NodeId) {
        while let Some(parent) = self.nodes[id].parent {
            id = parent;
        }
        self.nodes[id].set_black();
        self.root = Some(id);
    }

    //--------- link helpers ----------------

    #[inline]
    fn left_of(&self, id: NodeId) -> NodeId {
        match self.nodes[id].left {
            Some(left) => left,
            None => panic!("left_of(): sentinel has no children ? Call the programmer"),
        }
    }

    #[inline]
    fn right_of(&self, id: NodeId) -> NodeId {
        match self.nodes[id].right {
            Some(right) => right,
            None => panic!("right_of(): sentinel has no children ? Call the programmer"),
        }
    }

    #[inline]
    fn father_of(&self, id: NodeId) -> NodeId {
        match self.nodes[id].parent {
            Some(father) => father,
            None => panic!("father_of(): rotating the root ? Call the programmer"),
        }
    }

    #[inline]
    fn is_left(&self, id: NodeId) -> bool {
        let parent = self.nodes[id].parent;
        parent.map_or(false, |parent| self.nodes[parent].left == Some(id))
    }

    #[inline]
    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| !self.nodes[id].is_black())
    }

    #[inline]
    fn is_internal(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| !self.nodes[id].is_sentinel())
    }
}

/// Statistics on [`Rbt`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Rbt::stats`] method.
/// * To get full statisics via [`Rbt::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Rbt`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Rbt<k,V>`. Sentinels
    /// occupy the same size, and there is one more sentinel than entries.
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black entries from root to sentinel, same along
    /// every path.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}
