use balanced_bst::{Node, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

/// Whether every key is greater than everything in its left subtree and less than everything in
/// its right subtree.
fn is_bst<K: Ord>(tree: &Tree<K>) -> bool {
    fn check<K: Ord>(node: Option<&Node<K>>, lower: Option<&K>, upper: Option<&K>) -> bool {
        match node {
            None => true,
            Some(node) => {
                lower.map_or(true, |lower| node.key() > lower)
                    && upper.map_or(true, |upper| node.key() < upper)
                    && check(node.left(), lower, Some(node.key()))
                    && check(node.right(), Some(node.key()), upper)
            }
        }
    }
    check(tree.root(), None, None)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    is_bst(&tree) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn built_tree_is_sorted_and_distinct(xs: Vec<i32>) -> bool {
    let tree = Tree::build(xs.clone());
    let mut expected = xs;
    expected.sort();
    expected.dedup();

    is_bst(&tree) && tree.in_order_keys().into_iter().eq(expected.iter())
}

#[quickcheck]
fn built_tree_is_balanced(xs: Vec<i32>) -> bool {
    let mut sorted = xs.clone();
    sorted.sort();
    let mut reversed = sorted.clone();
    reversed.reverse();

    [xs, sorted, reversed]
        .into_iter()
        .all(|keys| Tree::build(keys).is_balanced())
}

#[quickcheck]
fn built_tree_has_minimum_height(xs: Vec<u16>) -> bool {
    let tree = Tree::build(xs);
    let len = tree.len();

    // floor(log2(n)) for n > 0
    let expected = if len == 0 {
        -1
    } else {
        (usize::BITS - 1 - len.leading_zeros()) as isize
    };
    tree.height() == expected
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = Tree::build(xs.clone());
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_existing_key_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs.into_iter().chain([x]));
    let before = tree.clone();

    !tree.insert(x) && tree == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs.clone());
    for delete in &deletes {
        tree.delete(delete);
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();

    is_bst(&tree)
        && deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn deleting_absent_key_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs.into_iter().filter(|&y| y != x));
    let before = tree.clone();

    tree.delete(&x).is_none() && tree == before
}

#[quickcheck]
fn rebalance_restores_balance(xs: Vec<i16>) -> bool {
    let mut tree = Tree::build(xs.clone());
    let top = tree.max().copied().unwrap_or(0).max(0);
    for key in (1..=10).map(|i| top.saturating_add(i)) {
        tree.insert(key);
    }
    let before: Vec<i16> = tree.iter().copied().collect();

    tree.rebalance();
    let after: Vec<i16> = tree.iter().copied().collect();

    tree.is_balanced() && before == after
}

#[quickcheck]
fn traversals_visit_every_node_once(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    do_ops(&ops, &mut tree, &mut BTreeSet::new());

    let expected: BTreeSet<_> = tree.iter().collect();
    let all_visited = [
        tree.level_order_keys(),
        tree.pre_order_keys(),
        tree.in_order_keys(),
        tree.post_order_keys(),
    ]
    .into_iter()
    .all(|keys| {
        keys.len() == expected.len() && keys.into_iter().collect::<BTreeSet<_>>() == expected
    });

    all_visited
}

#[quickcheck]
fn depth_matches_level(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);

    // Level order visits shallower nodes first, starting from the root.
    let mut depths = Vec::new();
    tree.level_order(|node| depths.push(tree.depth(node)));

    depths.iter().all(Option::is_some)
        && depths.windows(2).all(|w| w[0] <= w[1])
        && depths.first().map_or(true, |d| *d == Some(0))
}
