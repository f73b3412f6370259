//! The `Node` of a [`Tree`][crate::Tree] and the recursive algorithms that work on owned
//! subtrees.
//!
//! Mutating operations follow an "owning mutation via returned owner" pattern: they consume the
//! current (optional) subtree and return the subtree that should replace it. The caller stores
//! the result back into whichever slot it took the subtree from, e.g.
//! `(node.left, created) = insert(node.left.take(), key)`.

use std::cmp::Ordering;
use std::mem;
use std::ptr;

use crate::traverse;

/// An optional, exclusively owned subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// One vertex of a [`Tree`][crate::Tree]. A `Node` holds a key and owns up to two children.
///
/// Every key in the left subtree is less than `key` and every key in the right subtree is
/// greater than `key`.
///
/// `Clone` and `PartialEq` walk the subtree with an explicit stack, so they work on a subtree of
/// any height. `Debug`, and dropping a `Node` that was cloned out of a tree, still recurse once
/// per level; a [`Tree`][crate::Tree] drops its nodes iteratively.
#[derive(Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Clone for Node<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self::with_children(
            self.key.clone(),
            clone_subtree(self.left()),
            clone_subtree(self.right()),
        )
    }
}

/// Copies a subtree bottom up. Each node is visited after both of its subtrees, whose copies are
/// then on top of `built`, right above left.
fn clone_subtree<K>(root: Option<&Node<K>>) -> Link<K>
where
    K: Clone,
{
    let mut built: Vec<Box<Node<K>>> = Vec::new();
    traverse::post_order(root, |node| {
        let right = node.right().and_then(|_| built.pop());
        let left = node.left().and_then(|_| built.pop());
        built.push(Box::new(Node::with_children(node.key.clone(), left, right)));
    });

    built.pop()
}

impl<K> PartialEq for Node<K>
where
    K: PartialEq,
{
    /// Two subtrees are equal when they have the same shape and the same key in every position.
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.key != b.key {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<K> Eq for Node<K> where K: Eq {}

impl<K> Node<K> {
    pub(crate) fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    pub(crate) fn with_children(key: K, left: Link<K>, right: Link<K>) -> Self {
        Self { key, left, right }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The present children of this node, left before right.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }

    /// Detaches both children, leaving this node a leaf.
    pub(crate) fn take_children(&mut self) -> (Link<K>, Link<K>) {
        (self.left.take(), self.right.take())
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    /// Number of edges on the longest downward path from this node to a leaf. A leaf has a
    /// height of 0.
    ///
    /// This walks the subtree level by level so a degenerate (list shaped) subtree doesn't
    /// recurse once per node.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4, 5, 6, 7]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.height(), 2);
    /// assert_eq!(root.left().unwrap().height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut level = vec![self];
        while !level.is_empty() {
            height += 1;
            level = level.iter().flat_map(|&node| node.children()).collect();
        }

        height
    }

    /// Whether, for every node in this subtree, the heights of its left and right subtrees
    /// differ by at most one.
    pub fn is_balanced(&self) -> bool {
        balanced_height(Some(self)).is_some()
    }

    /// Finds the node holding `key` in this subtree.
    pub fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    /// Number of edges from this node down to `target`, or `None` if `target` is not a node of
    /// this subtree.
    ///
    /// `target` is matched by identity rather than by key: a node with an equal key that lives
    /// in some other tree is not found. The search still descends by key, so it only looks at
    /// the nodes on the single path where `target` could be.
    pub fn depth_of(&self, target: &Self) -> Option<usize>
    where
        K: Ord,
    {
        let mut current = self;
        let mut depth = 0;
        loop {
            if ptr::eq(current, target) {
                return Some(depth);
            }
            current = match target.key.cmp(&current.key) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return None,
                Ordering::Greater => current.right()?,
            };
            depth += 1;
        }
    }

    /// The leftmost node of this subtree.
    pub fn min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The rightmost node of this subtree.
    pub fn max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }
}

/// Height of `node` counting an absent subtree as 0 and a leaf as 1, or `None` as soon as any
/// node below is out of balance.
fn balanced_height<K>(node: Option<&Node<K>>) -> Option<usize> {
    let Some(node) = node else {
        return Some(0);
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;

    (left.abs_diff(right) <= 1).then(|| left.max(right) + 1)
}

/// Inserts `key` into the subtree. Returns the subtree's new root along with whether a node was
/// created; inserting a key that is already present returns the subtree unchanged.
pub(crate) fn insert<K>(link: Link<K>, key: K) -> (Link<K>, bool)
where
    K: Ord,
{
    let Some(mut node) = link else {
        return (Some(Box::new(Node::new(key))), true);
    };
    let created = match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, created) = insert(node.left.take(), key);
            node.left = left;
            created
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, created) = insert(node.right.take(), key);
            node.right = right;
            created
        }
    };

    (Some(node), created)
}

/// Deletes `key` from the subtree. Returns the subtree's new root along with the removed key,
/// which is `None` when `key` wasn't present (in which case the subtree is returned as is).
///
/// A node with two children is never unlinked itself. It takes over the key of its in-order
/// successor, the minimum of its right subtree, and that successor is unlinked instead.
pub(crate) fn delete<K>(link: Link<K>, key: &K) -> (Link<K>, Option<K>)
where
    K: Ord,
{
    let Some(mut node) = link else {
        return (None, None);
    };
    match key.cmp(&node.key) {
        Ordering::Less => {
            let (left, removed) = delete(node.left.take(), key);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = delete(node.right.take(), key);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => match node.take_children() {
            (None, None) => (None, Some(node.into_key())),
            (None, Some(child)) | (Some(child), None) => (Some(child), Some(node.into_key())),
            (Some(left), Some(right)) => {
                let (right, successor) = take_min(right);
                let removed = mem::replace(&mut node.key, successor);
                node.left = Some(left);
                node.right = right;
                (Some(node), Some(removed))
            }
        },
    }
}

/// Unlinks the leftmost node of the subtree, returning what's left of the subtree and the
/// unlinked node's key.
fn take_min<K>(mut node: Box<Node<K>>) -> (Link<K>, K) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(node), min)
        }
        None => {
            let right = node.right.take();
            (right, node.into_key())
        }
    }
}
