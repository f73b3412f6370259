//! Bulk construction of a balanced tree from an arbitrary sequence of keys.

use tracing::debug;

use crate::node::{Link, Node};

/// Builds a balanced tree out of `keys`, which may be in any order and may contain duplicates.
///
/// The keys are sorted and each run of equal keys is collapsed to its first occurrence. The
/// tree is then built by median splitting, so for every node the sizes of its left and right
/// subtrees differ by at most one.
pub(crate) fn build_tree<K, I>(keys: I) -> Link<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut keys: Vec<K> = keys.into_iter().collect();
    let input_len = keys.len();

    // Stable, so the first of several equal keys is the one that survives `dedup`.
    keys.sort();
    keys.dedup();
    debug!(input_len, distinct = keys.len(), "building balanced tree");

    from_sorted(keys)
}

/// Builds a balanced tree out of keys that are already sorted and distinct.
pub(crate) fn from_sorted<K>(keys: Vec<K>) -> Link<K> {
    let len = keys.len();
    build_range(&mut keys.into_iter(), len)
}

/// Builds a subtree out of the next `len` keys of `keys`.
///
/// For a range `[start, end]` the root is the key at `floor((start + end) / 2)`, i.e. the lower
/// median, so the left subtree gets `(len - 1) / 2` keys and the right subtree the rest. The
/// subtrees are built left to right which lets us move the keys out of a plain iterator in order
/// instead of slicing.
fn build_range<K, I>(keys: &mut I, len: usize) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }
    let left_len = (len - 1) / 2;

    let left = build_range(keys, left_len);
    let key = keys.next()?;
    let right = build_range(keys, len - 1 - left_len);

    Some(Box::new(Node::with_children(key, left, right)))
}
