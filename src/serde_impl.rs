//! `serde` support, enabled by the `serde` feature.
//!
//! A tree is written out as a sequence of its keys in level order. Reading a sequence back
//! builds a balanced tree from it, so a tree that was out of balance comes back balanced. A
//! `null`/unit value reads as an empty tree.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::Tree;

impl<K> Serialize for Tree<K>
where
    K: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.level_order_keys())
    }
}

impl<'de, K> Deserialize<'de> for Tree<K>
where
    K: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let keys = Option::<Vec<K>>::deserialize(deserializer)?;
        Ok(keys.map(Self::build).unwrap_or_default())
    }
}
