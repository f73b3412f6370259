//! The [`Tree`] and its public operations.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build([5, 3, 8, 3, 1]);
//!
//! // Duplicates are collapsed and the keys come back out sorted.
//! assert_eq!(tree.in_order_keys(), vec![&1, &3, &5, &8]);
//! assert!(tree.is_balanced());
//!
//! // Inserting a run of ever larger keys leans the tree to the right...
//! for key in 10..20 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until it is rebuilt.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.len(), 14);
//! ```

use std::borrow::Cow;
use std::fmt;

use tracing::{debug, trace};

use crate::build;
use crate::node::{self, Link, Node};
use crate::pretty::{Glyphs, Pretty};
use crate::traverse::{self, Iter};

/// A binary search tree over distinct, ordered keys.
///
/// A tree built with [`Tree::build`] (or collected from an iterator) starts out balanced.
/// [`insert`][Tree::insert] and [`delete`][Tree::delete] don't rebalance, so the tree may drift
/// out of balance until [`rebalance`][Tree::rebalance] is called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        traverse::drop_iteratively(self.root.take());
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a balanced tree out of `keys`, which may come in any order and may repeat. Only the
    /// first of several equal keys is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([7, 1, 4, 1]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(4));
    /// assert_eq!(tree.in_order_keys(), vec![&1, &4, &7]);
    /// ```
    pub fn build<I>(keys: I) -> Self
    where
        K: Ord,
        I: IntoIterator<Item = K>,
    {
        Self {
            root: build::build_tree(keys),
        }
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of keys in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        let mut len = 0;
        traverse::level_order(self.root(), |_| len += 1);
        len
    }

    /// Inserts `key`, returning whether it was new. Inserting a key that is already present
    /// leaves the tree as it was.
    ///
    /// The new key always becomes a leaf; nothing is rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let (root, created) = node::insert(self.root.take(), key);
        self.root = root;
        trace!(created, "insert");
        created
    }

    /// Deletes `key` from the tree and returns it, or returns `None` if it wasn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.in_order_keys(), vec![&1, &3]);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let (root, removed) = node::delete(self.root.take(), key);
        self.root = root;
        trace!(removed = removed.is_some(), "delete");
        removed
    }

    /// Finds the node holding `key`.
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether the tree holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// The smallest key.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| root.min().key())
    }

    /// The largest key.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|root| root.max().key())
    }

    /// Number of edges on the longest path from the root down to a leaf. An empty tree has a
    /// height of -1 and a tree with a single node a height of 0.
    ///
    /// Use [`Node::height`] for the height of a subtree.
    pub fn height(&self) -> isize {
        self.root().map_or(-1, Node::height)
    }

    /// Number of edges from the root down to `node`, or `None` if `node` isn't part of this tree.
    ///
    /// `node` is matched by identity, so it should come from this tree, e.g. via
    /// [`find`][Tree::find] or one of the traversals. Use [`Node::depth_of`] to measure from some
    /// other node.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build(1..=7);
    /// let five = tree.find(&5).unwrap();
    ///
    /// assert_eq!(tree.depth(tree.root().unwrap()), Some(0));
    /// assert_eq!(tree.depth(five), Some(2));
    ///
    /// let other = Tree::build([5]);
    /// assert_eq!(tree.depth(other.root().unwrap()), None);
    /// ```
    pub fn depth(&self, node: &Node<K>) -> Option<usize>
    where
        K: Ord,
    {
        self.root().and_then(|root| root.depth_of(node))
    }

    /// Whether, for every node, the heights of its left and right subtrees differ by at most one.
    /// An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the tree so that it is balanced again. The set of keys doesn't change.
    pub fn rebalance(&mut self)
    where
        K: Ord,
    {
        let keys = traverse::into_level_order(self.root.take());
        debug!(keys = keys.len(), "rebalancing");
        self.root = build::build_tree(keys);
    }

    /// Calls `visit` on every node, top to bottom and left to right within each level.
    pub fn level_order<'a>(&'a self, visit: impl FnMut(&'a Node<K>)) {
        traverse::level_order(self.root(), visit)
    }

    /// Calls `visit` on every node, visiting each node before its left and then its right
    /// subtree.
    pub fn pre_order<'a>(&'a self, visit: impl FnMut(&'a Node<K>)) {
        traverse::pre_order(self.root(), visit)
    }

    /// Calls `visit` on every node in ascending key order.
    pub fn in_order<'a>(&'a self, visit: impl FnMut(&'a Node<K>)) {
        traverse::in_order(self.root(), visit)
    }

    /// Calls `visit` on every node, visiting each node after its left and then its right
    /// subtree.
    pub fn post_order<'a>(&'a self, visit: impl FnMut(&'a Node<K>)) {
        traverse::post_order(self.root(), visit)
    }

    /// The keys in [level order][Tree::level_order].
    pub fn level_order_keys(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        self.level_order(|n| keys.push(n.key()));
        keys
    }

    /// The keys in [pre-order][Tree::pre_order].
    pub fn pre_order_keys(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        self.pre_order(|n| keys.push(n.key()));
        keys
    }

    /// The keys in [in-order][Tree::in_order], i.e. sorted.
    pub fn in_order_keys(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// The keys in [post-order][Tree::post_order].
    pub fn post_order_keys(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        self.post_order(|n| keys.push(n.key()));
        keys
    }

    /// An iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }

    /// A sideways diagram of the tree. See [`Pretty`] for the layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.pretty().to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn pretty(&self) -> Pretty<'_, K> {
        Pretty::new(self.root(), Cow::Owned(Glyphs::default()))
    }

    /// Like [`pretty`][Tree::pretty] but drawn with the given glyphs.
    pub fn pretty_with<'a>(&'a self, glyphs: &'a Glyphs) -> Pretty<'a, K> {
        Pretty::new(self.root(), Cow::Borrowed(glyphs))
    }
}

impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pretty(), f)
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K> From<Vec<K>> for Tree<K>
where
    K: Ord,
{
    fn from(keys: Vec<K>) -> Self {
        Self::build(keys)
    }
}

/// Inserts the keys one at a time, like repeated calls to [`Tree::insert`].
impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
