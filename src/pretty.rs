//! Sideways tree diagrams.
//!
//! The right subtree is drawn above a node and the left subtree below it, so turning the output
//! 90 degrees clockwise shows the tree with its root at the top:
//!
//! ```text
//! │   ┌── 6
//! └── 4
//!     └── 2
//! ```

use std::borrow::Cow;
use std::fmt;

use crate::node::Node;

/// The pieces a diagram is drawn with.
///
/// Every connector and indent should be the same width for the columns to line up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    /// Drawn in front of a node that is a left child (and in front of the root).
    pub left_branch: String,
    /// Drawn in front of a node that is a right child.
    pub right_branch: String,
    /// Indent under an ancestor whose line continues past this row.
    pub pipe: String,
    /// Indent under an ancestor whose line doesn't.
    pub blank: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            left_branch: "└── ".to_string(),
            right_branch: "┌── ".to_string(),
            pipe: "│   ".to_string(),
            blank: "    ".to_string(),
        }
    }
}

impl Glyphs {
    /// Glyphs that only use ASCII characters.
    pub fn ascii() -> Self {
        Self {
            left_branch: "`-- ".to_string(),
            right_branch: ",-- ".to_string(),
            pipe: "|   ".to_string(),
            blank: "    ".to_string(),
        }
    }
}

/// A diagram of a tree, rendered when displayed.
///
/// Created by [`Tree::pretty`][crate::Tree::pretty] and
/// [`Tree::pretty_with`][crate::Tree::pretty_with]. Each node takes one line, terminated by a
/// newline. An empty tree renders as an empty string.
#[derive(Debug)]
pub struct Pretty<'a, K> {
    root: Option<&'a Node<K>>,
    glyphs: Cow<'a, Glyphs>,
}

impl<'a, K> Pretty<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, glyphs: Cow<'a, Glyphs>) -> Self {
        Self { root, glyphs }
    }

    fn write_node(
        &self,
        f: &mut fmt::Formatter<'_>,
        node: &Node<K>,
        prefix: &str,
        is_left: bool,
    ) -> fmt::Result
    where
        K: fmt::Display,
    {
        let glyphs = &*self.glyphs;
        if let Some(right) = node.right() {
            let indent = if is_left { &glyphs.pipe } else { &glyphs.blank };
            self.write_node(f, right, &format!("{prefix}{indent}"), false)?;
        }

        let branch = if is_left {
            &glyphs.left_branch
        } else {
            &glyphs.right_branch
        };
        writeln!(f, "{prefix}{branch}{}", node.key())?;

        if let Some(left) = node.left() {
            let indent = if is_left { &glyphs.blank } else { &glyphs.pipe };
            self.write_node(f, left, &format!("{prefix}{indent}"), true)?;
        }

        Ok(())
    }
}

impl<K> fmt::Display for Pretty<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => self.write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}
