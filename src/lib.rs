//! This crate exposes a Binary Search Tree (BST) that is built balanced from an arbitrary
//! sequence of keys and rebalanced only when asked to.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`).
//!
//! ## Balance
//!
//! [`Tree::build`] sorts its input, drops duplicates, and then always picks the median of the
//! remaining keys as the root of each subtree. This keeps the height at `O(lg N)` where `N` is
//! the number of keys.
//!
//! [`Tree::insert`] and [`Tree::delete`] don't restore balance the way an AVL or red-black tree
//! would. A run of inserts in ascending order turns part of the tree into what is essentially a
//! linked list. [`Tree::is_balanced`] reports whether that has happened and
//! [`Tree::rebalance`] rebuilds the whole tree from its keys.
//!
//! ## Traversals
//!
//! The tree can be walked in level order, pre-order, in-order, and post-order. Each walk takes a
//! visitor that is called once per [`Node`]. [`Tree::iter`] iterates over the keys in order
//! lazily.
//!
//! ## Features
//!
//! - `serde`: (de)serialize a `Tree` as a sequence of keys.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod build;
mod error;
mod node;
mod parse;
mod pretty;
#[cfg(feature = "serde")]
mod serde_impl;
mod traverse;
mod tree;

#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use node::Node;
pub use pretty::{Glyphs, Pretty};
pub use traverse::Iter;
pub use tree::Tree;
