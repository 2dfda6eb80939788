//! `serde` support for [`AvlTree`]s
//!
//! Trees are serialized as the pre-order sequence of their values. Inserting a pre-order sequence
//! into an empty tree without rebalancing rebuilds exactly the same shape, so manual-mode trees
//! come back with their imbalances intact.

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::{Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::param::{Rebalance, RebalanceConfig};
use crate::AvlTree;

impl<T, P> Serialize for AvlTree<T, P>
where
    T: Serialize,
{
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        let mut values = Vec::with_capacity(self.len());
        self.walk_preorder(|node| values.push(node.value()));
        serializer.collect_seq(values)
    }
}

impl<'de, T, P> Deserialize<'de> for AvlTree<T, P>
where
    T: Deserialize<'de> + Ord + Copy,
    P: RebalanceConfig,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(AvlTreeVisitor { marker: PhantomData })
    }
}

struct AvlTreeVisitor<T, P> {
    marker: PhantomData<AvlTree<T, P>>,
}

impl<'de, T, P> Visitor<'de> for AvlTreeVisitor<T, P>
where
    T: Deserialize<'de> + Ord + Copy,
    P: RebalanceConfig,
{
    type Value = AvlTree<T, P>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a pre-order sequence of tree values")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }

        let mut this = AvlTree::new();
        for &v in &values {
            this = this.insert_with(v, Rebalance::Manual);
        }

        // The sequence didn't come from a balanced tree, so the shape can't be kept as-is.
        if P::MODE.is_auto() && !this.is_balanced() {
            this = values.into_iter().fold(AvlTree::new(), AvlTree::insert);
        }

        Ok(this)
    }
}

impl<T, P> AvlTree<T, P> {
    /// Returns whether every node satisfies the AVL invariant
    fn is_balanced(&self) -> bool {
        let mut balanced = true;
        self.walk_preorder(|node| balanced &= node.balance_factor().abs() <= 1);
        balanced
    }
}
