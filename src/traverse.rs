//! Breadth-first and depth-first walks over a subtree.
//!
//! Each walk calls a visitor once per node, in the order the walk defines. The depth-first walks
//! keep an explicit stack instead of recursing so that a degenerate tree (e.g. one built by
//! inserting keys in ascending order) can be walked no matter how tall it gets.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Visits nodes top to bottom and, within a level, left to right.
pub(crate) fn level_order<'a, K>(
    root: Option<&'a Node<K>>,
    mut visit: impl FnMut(&'a Node<K>),
) {
    let mut queue: VecDeque<_> = root.into_iter().collect();
    while let Some(node) = queue.pop_front() {
        visit(node);
        queue.extend(node.children());
    }
}

/// Where a node is visited relative to its subtrees in a depth-first walk.
#[derive(Clone, Copy)]
enum DepthFirst {
    Pre,
    In,
    Post,
}

/// A stack entry: either a subtree still to be expanded, or a node whose turn to be visited has
/// come.
enum Step<'a, K> {
    Expand(&'a Node<K>),
    Visit(&'a Node<K>),
}

fn depth_first<'a, K>(
    root: Option<&'a Node<K>>,
    order: DepthFirst,
    mut visit: impl FnMut(&'a Node<K>),
) {
    let mut stack: Vec<_> = root.map(Step::Expand).into_iter().collect();
    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Visit(node) => {
                visit(node);
                continue;
            }
            Step::Expand(node) => node,
        };

        // Pushed in reverse so that they pop in order.
        let left = node.left().map(Step::Expand);
        let right = node.right().map(Step::Expand);
        let this = Some(Step::Visit(node));
        match order {
            DepthFirst::Pre => stack.extend(right.into_iter().chain(left).chain(this)),
            DepthFirst::In => stack.extend(right.into_iter().chain(this).chain(left)),
            DepthFirst::Post => stack.extend(this.into_iter().chain(right).chain(left)),
        }
    }
}

/// Visits a node, then its left subtree, then its right subtree.
pub(crate) fn pre_order<'a, K>(root: Option<&'a Node<K>>, visit: impl FnMut(&'a Node<K>)) {
    depth_first(root, DepthFirst::Pre, visit)
}

/// Visits the left subtree, then the node, then the right subtree. For a BST this visits keys in
/// ascending order.
pub(crate) fn in_order<'a, K>(root: Option<&'a Node<K>>, visit: impl FnMut(&'a Node<K>)) {
    depth_first(root, DepthFirst::In, visit)
}

/// Visits the left subtree, then the right subtree, then the node.
pub(crate) fn post_order<'a, K>(root: Option<&'a Node<K>>, visit: impl FnMut(&'a Node<K>)) {
    depth_first(root, DepthFirst::Post, visit)
}

/// Takes the subtree apart, returning its keys in level order.
pub(crate) fn into_level_order<K>(root: Link<K>) -> Vec<K> {
    let mut keys = Vec::new();
    let mut queue: VecDeque<_> = root.into_iter().collect();
    while let Some(mut node) = queue.pop_front() {
        let (left, right) = node.take_children();
        queue.extend(left.into_iter().chain(right));
        keys.push(node.into_key());
    }

    keys
}

/// Drops a subtree one node at a time. Letting `Box` drop a subtree recurses once per level which
/// overflows the stack on a tall enough degenerate tree.
pub(crate) fn drop_iteratively<K>(root: Link<K>) {
    let mut stack: Vec<_> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        let (left, right) = node.take_children();
        stack.extend(left.into_iter().chain(right));
    }
}

/// A lazy, in-order iterator over the keys of a [`Tree`][crate::Tree].
///
/// Created by [`Tree::iter`][crate::Tree::iter].
#[derive(Debug)]
pub struct Iter<'a, K> {
    /// The nodes whose keys are yet to be yielded along with their right subtrees. The top of the
    /// stack is the next key.
    stack: Vec<&'a Node<K>>,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<K> FusedIterator for Iter<'_, K> {}
