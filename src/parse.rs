//! Building a tree out of a textual key list such as `5 3 8 3 1` or `[5, 3, 8, 3, 1]`.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::Tree;

/// Splits `input` into key tokens. Keys may be separated by commas, whitespace, or both, and the
/// whole list may be wrapped in square brackets.
fn tokens(input: &str) -> Result<impl Iterator<Item = &str>> {
    let input = input.trim();
    let input = match (input.strip_prefix('['), input.ends_with(']')) {
        (Some(inner), true) => inner.strip_suffix(']').unwrap_or(inner),
        (None, false) => input,
        _ => return Err(Error::UnmatchedBracket),
    };

    Ok(input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty()))
}

/// Parses a key list into a balanced tree, exactly as [`Tree::build`] would build it from the
/// parsed keys. Blank input parses to an empty tree.
///
/// # Examples
///
/// ```
/// use balanced_bst::{Error, Tree};
///
/// let tree: Tree<i32> = "[5, 3, 8, 3, 1]".parse().unwrap();
/// assert_eq!(tree.in_order_keys(), vec![&1, &3, &5, &8]);
///
/// let error = "5 three 8".parse::<Tree<i32>>().unwrap_err();
/// assert!(matches!(error, Error::InvalidKey { position: 1, .. }));
/// ```
impl<K> FromStr for Tree<K>
where
    K: FromStr + Ord,
    K::Err: Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let keys = tokens(s)?
            .enumerate()
            .map(|(position, token)| {
                token.parse().map_err(|e: K::Err| Error::InvalidKey {
                    position,
                    token: token.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<K>>>()?;

        Ok(Self::build(keys))
    }
}
